// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom direction state and the scale-to-progress mapping.

/// Phase of a pinch gesture as reported by the host's recognizer.
///
/// Hosts deliver phases for one gesture serially: one `Began`, any number of
/// `Changed`, then exactly one `Ended` or `Canceled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinchPhase {
    /// Two fingers went down and the recognizer locked onto the gesture.
    Began,
    /// The finger separation changed; `scale` carries the new ratio.
    Changed,
    /// The fingers lifted; the pending change is committed or reverted.
    Ended,
    /// The recognizer gave up (touch cancellation, interruption). Always
    /// reverts, regardless of progress.
    Canceled,
}

/// Which way an active pinch is changing the column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomState {
    /// No pinch in progress.
    #[default]
    Idle,
    /// Fingers spreading: cells grow, column count shrinks by one.
    ZoomingIn,
    /// Fingers contracting: cells shrink, column count grows by one.
    ZoomingOut,
}

impl ZoomState {
    /// Maps a raw pinch scale onto transition progress in `[0, 1]`.
    ///
    /// The mapping is direction-specific and deliberately not symmetric, so
    /// that a comfortable gesture size crosses the default 0.5 commit
    /// threshold in either direction:
    ///
    /// - [`ZoomingIn`]: `scale / 2 - 0.25` (scale 0.5 → 0, scale 2.5 → 1),
    /// - [`ZoomingOut`]: `2 - 2 * scale` (scale 1 → 0, scale 0.5 → 1),
    /// - [`Idle`]: always 0.
    ///
    /// [`ZoomingIn`]: ZoomState::ZoomingIn
    /// [`ZoomingOut`]: ZoomState::ZoomingOut
    /// [`Idle`]: ZoomState::Idle
    #[must_use]
    pub fn progress_for_scale(self, scale: f64) -> f64 {
        let raw = match self {
            Self::Idle => 0.0,
            Self::ZoomingIn => scale * 0.5 - 0.25,
            Self::ZoomingOut => 2.0 - 2.0 * scale,
        };
        raw.clamp(0.0, 1.0)
    }

    /// Returns `true` if a pinch is in progress.
    #[must_use]
    pub const fn is_zooming(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

#[cfg(test)]
mod tests {
    use super::ZoomState;

    #[test]
    fn zooming_out_mapping_fixed_points() {
        let state = ZoomState::ZoomingOut;
        assert_eq!(state.progress_for_scale(1.0), 0.0);
        assert_eq!(state.progress_for_scale(0.75), 0.5);
        assert_eq!(state.progress_for_scale(0.5), 1.0);
        // Clamped on both ends.
        assert_eq!(state.progress_for_scale(2.0), 0.0);
        assert_eq!(state.progress_for_scale(0.1), 1.0);
    }

    #[test]
    fn zooming_in_mapping_fixed_points() {
        let state = ZoomState::ZoomingIn;
        assert_eq!(state.progress_for_scale(0.5), 0.0);
        assert_eq!(state.progress_for_scale(1.5), 0.5);
        assert_eq!(state.progress_for_scale(2.5), 1.0);
        // Clamped on both ends.
        assert_eq!(state.progress_for_scale(0.0), 0.0);
        assert_eq!(state.progress_for_scale(10.0), 1.0);
    }

    #[test]
    fn idle_maps_everything_to_zero() {
        assert_eq!(ZoomState::Idle.progress_for_scale(0.3), 0.0);
        assert_eq!(ZoomState::Idle.progress_for_scale(3.0), 0.0);
        assert!(!ZoomState::Idle.is_zooming());
        assert!(ZoomState::ZoomingIn.is_zooming());
    }
}
