// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pinch-resizable grid controller.

use crate::{
    GridConfig, GridLayout, PinchPhase, TransitionDirective, ZoomEvent, ZoomListener, ZoomState,
};

/// A grid-view core that owns a column count and a pinch-zoom state machine.
///
/// The controller is headless: the host delivers pinch phases via
/// [`pinch`](ResizableGrid::pinch) and receives [`TransitionDirective`]s to
/// execute against its layout facility, while a [`ZoomListener`] observes the
/// zoom lifecycle. Outside of a gesture, the column count changes only
/// through [`set_columns`](ResizableGrid::set_columns), which silently clamps
/// into the configured bounds.
///
/// One gesture maps to one discrete ±1 column change:
///
/// ```text
/// Idle --(Began, direction available)--> ZoomingIn | ZoomingOut
/// Zooming* --(Changed)--> Zooming* (progress updates)
/// Zooming* --(Ended, progress > threshold)--> Idle (pending count committed)
/// Zooming* --(Ended, progress <= threshold)--> Idle (count unchanged)
/// Zooming* --(Canceled)--> Idle (count unchanged)
/// Idle --(Began, direction unavailable)--> Idle (gesture ignored)
/// ```
///
/// All methods are synchronous and single-threaded; the host recognizer is
/// expected to deliver the phases of one gesture serially.
#[derive(Debug, Clone)]
pub struct ResizableGrid {
    config: GridConfig,
    available_width: f64,
    columns: usize,
    state: ZoomState,
    progress: f64,
}

impl ResizableGrid {
    /// Creates a grid over `available_width` with the default configuration.
    ///
    /// The column count starts at the configured minimum.
    #[must_use]
    pub fn new(available_width: f64) -> Self {
        Self::with_config(available_width, GridConfig::new())
    }

    /// Creates a grid over `available_width` with the given configuration.
    #[must_use]
    pub fn with_config(available_width: f64, config: GridConfig) -> Self {
        let (min, _) = config.column_bounds();
        Self {
            config,
            available_width: available_width.max(0.0),
            columns: min,
            state: ZoomState::Idle,
            progress: 0.0,
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The column count is reset to the new effective minimum (the previous
    /// value is discarded, not re-clamped) and any in-flight zoom is
    /// abandoned. The host should re-render afterwards.
    pub fn set_config(&mut self, config: GridConfig) {
        self.config = config;
        let (min, _) = self.config.column_bounds();
        self.columns = min;
        self.reset_zoom();
    }

    /// Returns the current number of cells per row.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Sets the column count, silently clamping into the configured bounds.
    ///
    /// This is the only way to change the count outside of a committed
    /// gesture. The host should re-render afterwards.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = self.config.clamp_columns(columns);
    }

    /// Returns the width the grid lays out into.
    #[must_use]
    pub const fn available_width(&self) -> f64 {
        self.available_width
    }

    /// Sets the width the grid lays out into. Negative widths behave as 0.
    pub fn set_available_width(&mut self, width: f64) {
        self.available_width = width.max(0.0);
    }

    /// Returns the layout for the current column count.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::for_columns(self.columns, self.available_width, &self.config)
    }

    /// Returns the zoom state machine's current state.
    #[must_use]
    pub const fn zoom_state(&self) -> ZoomState {
        self.state
    }

    /// Returns the most recent transition progress, or 0 when idle.
    #[must_use]
    pub const fn transition_progress(&self) -> f64 {
        self.progress
    }

    /// Returns the column count the active gesture is heading toward, if any.
    #[must_use]
    pub const fn pending_columns(&self) -> Option<usize> {
        match self.state {
            ZoomState::Idle => None,
            ZoomState::ZoomingIn => Some(self.columns - 1),
            ZoomState::ZoomingOut => Some(self.columns + 1),
        }
    }

    /// Returns the layout the active gesture is heading toward, if any.
    #[must_use]
    pub fn target_layout(&self) -> Option<GridLayout> {
        let pending = self.pending_columns()?;
        Some(GridLayout::for_columns(
            pending,
            self.available_width,
            &self.config,
        ))
    }

    /// Feeds one pinch-gesture update into the state machine.
    ///
    /// `scale` is the recognizer's finger-separation ratio (1.0 at gesture
    /// start). The listener is notified synchronously: `will_pinch_out` /
    /// `will_pinch_in` when a `Began` phase resolves a direction, and
    /// `did_pinch_out` / `did_pinch_in` when an `Ended` phase commits.
    ///
    /// The returned directive, if any, is what the host's transition facility
    /// should do next; `Finish` and `Cancel` additionally mean "re-render and
    /// re-arm the recognizer". `None` means the phase was ignored: either no
    /// gesture is active, or a `Began` could not resolve a direction (the
    /// gesture pushes against a column bound), in which case the remainder of
    /// that gesture is ignored too.
    pub fn pinch<L: ZoomListener + ?Sized>(
        &mut self,
        phase: PinchPhase,
        scale: f64,
        listener: &mut L,
    ) -> Option<TransitionDirective> {
        match phase {
            PinchPhase::Began => self.pinch_began(scale, listener),
            PinchPhase::Changed => self.pinch_changed(scale),
            PinchPhase::Ended => self.pinch_ended(listener),
            PinchPhase::Canceled => self.pinch_canceled(),
        }
    }

    fn pinch_began<L: ZoomListener + ?Sized>(
        &mut self,
        scale: f64,
        listener: &mut L,
    ) -> Option<TransitionDirective> {
        if self.state.is_zooming() {
            return None;
        }

        // Direction follows the gesture; a pinch that pushes against a bound
        // is ignored rather than reinterpreted as the opposite direction.
        let (min, max) = self.config.column_bounds();
        let (state, event) = if scale > 1.0 {
            if self.columns <= min {
                return None;
            }
            (ZoomState::ZoomingIn, ZoomEvent::WillPinchOut)
        } else {
            if self.columns >= max {
                return None;
            }
            (ZoomState::ZoomingOut, ZoomEvent::WillPinchIn)
        };

        self.state = state;
        self.progress = 0.0;
        event.dispatch(listener, self);

        // Direction checks above guarantee a pending count and target exist.
        let target = self.target_layout()?;
        Some(TransitionDirective::Begin(target))
    }

    fn pinch_changed(&mut self, scale: f64) -> Option<TransitionDirective> {
        if !self.state.is_zooming() {
            return None;
        }
        self.progress = self.state.progress_for_scale(scale);
        Some(TransitionDirective::SetProgress(self.progress))
    }

    fn pinch_ended<L: ZoomListener + ?Sized>(
        &mut self,
        listener: &mut L,
    ) -> Option<TransitionDirective> {
        if !self.state.is_zooming() {
            return None;
        }

        let committed = self.progress > self.config.commit_threshold();
        let directive = if committed {
            let pending = self.pending_columns()?;
            let event = match self.state {
                ZoomState::ZoomingIn => ZoomEvent::DidPinchOut,
                _ => ZoomEvent::DidPinchIn,
            };
            self.columns = pending;
            self.reset_zoom();
            event.dispatch(listener, self);
            TransitionDirective::Finish
        } else {
            self.reset_zoom();
            TransitionDirective::Cancel
        };
        Some(directive)
    }

    fn pinch_canceled(&mut self) -> Option<TransitionDirective> {
        if !self.state.is_zooming() {
            return None;
        }
        self.reset_zoom();
        Some(TransitionDirective::Cancel)
    }

    fn reset_zoom(&mut self) {
        self.state = ZoomState::Idle;
        self.progress = 0.0;
    }
}
