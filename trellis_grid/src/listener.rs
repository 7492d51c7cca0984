// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom lifecycle notifications.

use crate::ResizableGrid;

/// Observer for the zoom lifecycle of a [`ResizableGrid`].
///
/// Every method has a no-op default, so hosts implement only the events they
/// care about. Callbacks arrive synchronously from within gesture-phase
/// handling, never later; the grid reference reflects the state at the moment
/// of the event (in particular, `did_*` callbacks see the committed column
/// count).
///
/// "Pinch out" is fingers spreading (cells grow, fewer columns); "pinch in"
/// is fingers contracting (cells shrink, more columns).
pub trait ZoomListener {
    /// A pinch-in gesture resolved its direction and is about to start
    /// growing the column count.
    fn will_pinch_in(&mut self, grid: &ResizableGrid) {
        let _ = grid;
    }

    /// A pinch-out gesture resolved its direction and is about to start
    /// shrinking the column count.
    fn will_pinch_out(&mut self, grid: &ResizableGrid) {
        let _ = grid;
    }

    /// A pinch-in gesture ended past the commit threshold; the column count
    /// grew by one.
    fn did_pinch_in(&mut self, grid: &ResizableGrid) {
        let _ = grid;
    }

    /// A pinch-out gesture ended past the commit threshold; the column count
    /// shrank by one.
    fn did_pinch_out(&mut self, grid: &ResizableGrid) {
        let _ = grid;
    }
}

/// The standard do-nothing listener, for hosts that only want directives.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl ZoomListener for NoopListener {}

/// A zoom lifecycle event, for hosts that prefer values over callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomEvent {
    /// Direction resolved toward more columns.
    WillPinchIn,
    /// Direction resolved toward fewer columns.
    WillPinchOut,
    /// A grow-by-one change was committed.
    DidPinchIn,
    /// A shrink-by-one change was committed.
    DidPinchOut,
}

impl ZoomEvent {
    /// Dispatches this event to the matching [`ZoomListener`] method.
    pub fn dispatch<L: ZoomListener + ?Sized>(self, listener: &mut L, grid: &ResizableGrid) {
        match self {
            Self::WillPinchIn => listener.will_pinch_in(grid),
            Self::WillPinchOut => listener.will_pinch_out(grid),
            Self::DidPinchIn => listener.did_pinch_in(grid),
            Self::DidPinchOut => listener.did_pinch_out(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NoopListener, ZoomEvent, ZoomListener};
    use crate::ResizableGrid;

    #[derive(Debug, Default)]
    struct Tally {
        will_in: usize,
        will_out: usize,
        did_in: usize,
        did_out: usize,
    }

    impl ZoomListener for Tally {
        fn will_pinch_in(&mut self, _grid: &ResizableGrid) {
            self.will_in += 1;
        }

        fn will_pinch_out(&mut self, _grid: &ResizableGrid) {
            self.will_out += 1;
        }

        fn did_pinch_in(&mut self, _grid: &ResizableGrid) {
            self.did_in += 1;
        }

        fn did_pinch_out(&mut self, _grid: &ResizableGrid) {
            self.did_out += 1;
        }
    }

    #[test]
    fn events_dispatch_to_the_matching_method() {
        let grid = ResizableGrid::new(320.0);
        let mut tally = Tally::default();

        ZoomEvent::WillPinchIn.dispatch(&mut tally, &grid);
        ZoomEvent::WillPinchOut.dispatch(&mut tally, &grid);
        ZoomEvent::DidPinchIn.dispatch(&mut tally, &grid);
        ZoomEvent::DidPinchIn.dispatch(&mut tally, &grid);
        ZoomEvent::DidPinchOut.dispatch(&mut tally, &grid);

        assert_eq!(tally.will_in, 1);
        assert_eq!(tally.will_out, 1);
        assert_eq!(tally.did_in, 2);
        assert_eq!(tally.did_out, 1);
    }

    #[test]
    fn noop_listener_accepts_everything() {
        let grid = ResizableGrid::new(320.0);
        let mut listener = NoopListener;
        ZoomEvent::WillPinchOut.dispatch(&mut listener, &grid);
        ZoomEvent::DidPinchOut.dispatch(&mut listener, &grid);
    }
}
