// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pinch gestures against a printing host.
//!
//! This example stands in for a real toolkit integration: the "host" here
//! implements the transition facility by lerping between the outgoing and
//! target layouts, and a listener logs the zoom lifecycle the way a delegate
//! would.
//!
//! Run:
//! - `cargo run -p trellis_examples --example pinch_zoom`

use trellis_grid::{
    GridConfig, GridLayout, InteractiveTransition, PinchPhase, ResizableGrid, TransitionDirective,
    ZoomListener,
};

/// A stand-in for a toolkit's interactive-transition layout: remembers both
/// endpoints and renders the blend as a line of text.
#[derive(Debug)]
struct PrintingTransition {
    from: GridLayout,
    target: Option<GridLayout>,
}

impl InteractiveTransition for PrintingTransition {
    fn begin(&mut self, target: &GridLayout) {
        self.target = Some(*target);
        println!(
            "  transition: {:.1}px cells -> {:.1}px cells",
            self.from.item_size.width,
            target.item_size.width
        );
    }

    fn set_progress(&mut self, progress: f64) {
        if let Some(target) = &self.target {
            let blend = self.from.lerp(target, progress);
            println!(
                "  progress {progress:.2}: cell {:.1}px, spacing {:.1}px",
                blend.item_size.width, blend.item_spacing
            );
        }
    }

    fn finish(&mut self) {
        if let Some(target) = self.target.take() {
            self.from = target;
        }
        println!("  committed");
    }

    fn cancel(&mut self) {
        self.target = None;
        println!("  reverted");
    }
}

/// The delegate analog: log every lifecycle event.
#[derive(Debug)]
struct LoggingListener;

impl ZoomListener for LoggingListener {
    fn will_pinch_in(&mut self, grid: &ResizableGrid) {
        println!("  will pinch in  (toward {:?} columns)", grid.pending_columns());
    }

    fn will_pinch_out(&mut self, grid: &ResizableGrid) {
        println!("  will pinch out (toward {:?} columns)", grid.pending_columns());
    }

    fn did_pinch_in(&mut self, grid: &ResizableGrid) {
        println!("  did pinch in   (now {} columns)", grid.columns());
    }

    fn did_pinch_out(&mut self, grid: &ResizableGrid) {
        println!("  did pinch out  (now {} columns)", grid.columns());
    }
}

fn run_gesture(
    label: &str,
    grid: &mut ResizableGrid,
    host: &mut PrintingTransition,
    listener: &mut LoggingListener,
    phases: &[(PinchPhase, f64)],
) {
    println!("\n== {label} (starting at {} columns) ==", grid.columns());
    host.from = grid.layout();
    for &(phase, scale) in phases {
        match grid.pinch(phase, scale, listener) {
            Some(directive) => {
                directive.apply_to(host);
                if matches!(
                    directive,
                    TransitionDirective::Finish | TransitionDirective::Cancel
                ) {
                    // A real host reloads its cells and re-arms the
                    // recognizer here.
                    println!("  reload: {} columns", grid.columns());
                }
            }
            None => println!("  ({phase:?} ignored)"),
        }
    }
}

fn main() {
    let config = GridConfig {
        min_columns: 2,
        max_columns: 6,
        cell_margin: 10.0,
        outline_margin: 5.0,
        zoom_commit_threshold: 0.5,
    };
    let mut grid = ResizableGrid::with_config(375.0, config);
    grid.set_columns(4);

    let mut host = PrintingTransition {
        from: grid.layout(),
        target: None,
    };
    let mut listener = LoggingListener;

    // A deliberate pinch out, held past the threshold: commits 4 -> 3.
    run_gesture(
        "slow pinch out, committed",
        &mut grid,
        &mut host,
        &mut listener,
        &[
            (PinchPhase::Began, 1.05),
            (PinchPhase::Changed, 1.3),
            (PinchPhase::Changed, 1.8),
            (PinchPhase::Changed, 2.2),
            (PinchPhase::Ended, 2.2),
        ],
    );

    // A hesitant pinch in, released early: reverts.
    run_gesture(
        "hesitant pinch in, released early",
        &mut grid,
        &mut host,
        &mut listener,
        &[
            (PinchPhase::Began, 0.95),
            (PinchPhase::Changed, 0.85),
            (PinchPhase::Ended, 0.85),
        ],
    );

    // Pinching out at the minimum has nowhere to go; the whole gesture is
    // ignored.
    grid.set_columns(2);
    run_gesture(
        "pinch out at the minimum",
        &mut grid,
        &mut host,
        &mut listener,
        &[
            (PinchPhase::Began, 1.4),
            (PinchPhase::Changed, 1.9),
            (PinchPhase::Ended, 1.9),
        ],
    );

    // The demo data source has 100 items; report the scrollable content size
    // the final layout produces for them.
    let layout = grid.layout();
    let rows = 100_usize.div_ceil(grid.columns());
    let content = kurbo::Size::new(
        375.0,
        layout.insets.y0
            + layout.insets.y1
            + rows as f64 * layout.item_size.height
            + (rows - 1) as f64 * layout.line_spacing,
    );
    println!(
        "\n100 items at {} columns fill {:.0}x{:.0}",
        grid.columns(),
        content.width,
        content.height
    );
}
