// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the grid and a host's interactive-transition facility.

use crate::GridLayout;

/// A host layout facility that can be driven to an arbitrary progress value
/// and then snapped to either end.
///
/// One transition lives for exactly one gesture: `begin` once, any number of
/// `set_progress` calls with values in `[0, 1]`, then exactly one of `finish`
/// (snap to the target layout) or `cancel` (revert to the layout that was
/// current at `begin`). After `finish` or `cancel` the host should also
/// re-render its content and re-arm its gesture recognizer.
///
/// Being a trait bound, an incompatible facility is unrepresentable; there is
/// no runtime capability check.
pub trait InteractiveTransition {
    /// Starts an interactive transition toward `target`.
    fn begin(&mut self, target: &GridLayout);

    /// Moves the live blend to `progress` (already clamped to `[0, 1]`).
    fn set_progress(&mut self, progress: f64);

    /// Commits: snaps the layout to the target handed to [`begin`].
    ///
    /// [`begin`]: InteractiveTransition::begin
    fn finish(&mut self);

    /// Reverts: restores the layout from before [`begin`].
    ///
    /// [`begin`]: InteractiveTransition::begin
    fn cancel(&mut self);
}

/// What the grid asks its transition facility to do after one gesture phase.
///
/// The state machine computes directives; hosts execute them, either by hand
/// or via [`TransitionDirective::apply_to`]. This keeps the gesture logic
/// free of host types and directly testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionDirective {
    /// Start a transition toward the given layout.
    Begin(GridLayout),
    /// Drive the live blend to the given progress.
    SetProgress(f64),
    /// Commit the pending layout, then re-render.
    Finish,
    /// Revert to the pre-gesture layout, then re-render.
    Cancel,
}

impl TransitionDirective {
    /// Executes this directive against a transition facility.
    pub fn apply_to<T: InteractiveTransition + ?Sized>(&self, transition: &mut T) {
        match self {
            Self::Begin(target) => transition.begin(target),
            Self::SetProgress(progress) => transition.set_progress(*progress),
            Self::Finish => transition.finish(),
            Self::Cancel => transition.cancel(),
        }
    }
}
