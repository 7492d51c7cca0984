// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=trellis_grid --heading-base-level=0

//! Trellis Grid: a pinch-resizable grid-view core.
//!
//! This crate is the headless heart of a grid control whose users pinch-zoom
//! to change how many equally-sized cells are shown per row. A continuous
//! two-finger scale gesture is translated into a discrete ±1 column-count
//! change, with a live blend between the old and the new layout while the
//! fingers move, committed or reverted at gesture end against a configurable
//! threshold.
//!
//! The core concepts are:
//!
//! - [`ResizableGrid`]: the controller. It owns the current column count, the
//!   zoom state machine ([`ZoomState`]), and a [`GridConfig`], and consumes
//!   pinch phases via [`ResizableGrid::pinch`].
//! - [`GridConfig`]: host-supplied bounds (min/max columns), margins, and the
//!   commit threshold, with documented defaults throughout.
//! - [`GridLayout`]: the flow-layout descriptor (square cell size, insets,
//!   spacing) computed for a column count; [`GridLayout::lerp`] blends two of
//!   them for hosts that interpolate layouts themselves.
//! - [`TransitionDirective`] and [`InteractiveTransition`]: what the host's
//!   layout-transition facility should do after each phase, and the trait it
//!   implements to have directives applied directly.
//! - [`ZoomListener`]: optional lifecycle callbacks (`will_pinch_in`,
//!   `will_pinch_out`, `did_pinch_in`, `did_pinch_out`), all defaulted to
//!   no-ops; [`NoopListener`] for hosts that only want directives.
//!
//! This crate deliberately does **not** recognize gestures, render cells, or
//! animate anything. Host frameworks are responsible for:
//!
//! - Delivering [`PinchPhase`]s and scale values from their recognizer.
//! - Executing the returned [`TransitionDirective`]s against their layout or
//!   transition machinery.
//! - Re-rendering ("reloading") after a `Finish` or `Cancel` directive and
//!   re-arming the recognizer for the next gesture.
//!
//! ## Minimal example
//!
//! A committed pinch-out, taking a four-column grid to three columns:
//!
//! ```rust
//! use trellis_grid::{
//!     GridConfig, NoopListener, PinchPhase, ResizableGrid, TransitionDirective,
//! };
//!
//! let config = GridConfig {
//!     min_columns: 2,
//!     max_columns: 6,
//!     ..GridConfig::new()
//! };
//! let mut grid = ResizableGrid::with_config(320.0, config);
//! grid.set_columns(4);
//! let mut listener = NoopListener;
//!
//! // Fingers spread: direction resolves toward fewer, larger cells.
//! let directive = grid.pinch(PinchPhase::Began, 1.2, &mut listener);
//! assert!(matches!(directive, Some(TransitionDirective::Begin(_))));
//!
//! // The blend follows the fingers.
//! let directive = grid.pinch(PinchPhase::Changed, 2.0, &mut listener);
//! assert_eq!(directive, Some(TransitionDirective::SetProgress(0.75)));
//!
//! // Past the commit threshold at release: the change sticks.
//! let directive = grid.pinch(PinchPhase::Ended, 2.0, &mut listener);
//! assert_eq!(directive, Some(TransitionDirective::Finish));
//! assert_eq!(grid.columns(), 3);
//! ```
//!
//! A gesture released early reverts instead: the final `SetProgress` value
//! stays at or below [`GridConfig::zoom_commit_threshold`], `Ended` yields
//! [`TransitionDirective::Cancel`], and the column count is unchanged.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod grid;
mod layout;
mod listener;
mod transition;
mod zoom;

pub use config::GridConfig;
pub use grid::ResizableGrid;
pub use layout::GridLayout;
pub use listener::{NoopListener, ZoomEvent, ZoomListener};
pub use transition::{InteractiveTransition, TransitionDirective};
pub use zoom::{PinchPhase, ZoomState};
