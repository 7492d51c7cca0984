// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flow layout descriptors for a fixed column count.

use kurbo::{Insets, Size};

use crate::GridConfig;

/// The metrics a host needs to lay out one grid variant.
///
/// A descriptor says nothing about columns or item counts; it is the flow
/// layout vocabulary most grid engines share: a uniform (square) item size,
/// outer insets, and the spacing between items within a row and between rows.
/// Hosts hand it to their layout or interactive-transition facility and wrap
/// cells naturally at the container edge.
///
/// Descriptors are produced by the pure [`GridLayout::for_columns`] and can be
/// blended with [`GridLayout::lerp`] for hosts that interpolate layouts
/// themselves rather than driving a native transition object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Size of every cell. Cells are square.
    pub item_size: Size,
    /// Insets between the grid's outer cells and its bounds.
    pub insets: Insets,
    /// Spacing between adjacent cells in a row.
    pub item_spacing: f64,
    /// Spacing between adjacent rows.
    pub line_spacing: f64,
}

impl GridLayout {
    /// Computes the layout that fits `columns` equal-width cells into
    /// `available_width`.
    ///
    /// The cell width is what remains of `available_width` after the outline
    /// margin on both sides and one cell margin per interior gap, divided
    /// evenly:
    ///
    /// ```text
    /// cell = (available_width - 2*outline - (columns - 1)*cell_margin) / columns
    /// ```
    ///
    /// This is a pure function: identical inputs yield an identical
    /// descriptor. The configuration is responsible for margins that leave
    /// positive room at every valid column count; a cell width that would go
    /// negative is clamped to zero (and trips a debug assertion).
    #[must_use]
    pub fn for_columns(columns: usize, available_width: f64, config: &GridConfig) -> Self {
        let columns = columns.max(1);
        let outline = config.outline_margin.max(0.0);
        let margin = config.cell_margin.max(0.0);

        let gaps = margin * (columns - 1) as f64;
        let content = available_width - 2.0 * outline - gaps;
        debug_assert!(
            content > 0.0,
            "margins leave no room for cells: available_width={available_width}, \
             outline_margin={outline}, cell_margin={margin}, columns={columns}"
        );
        let cell = (content / columns as f64).max(0.0);

        Self {
            item_size: Size::new(cell, cell),
            insets: Insets::uniform(outline),
            item_spacing: margin,
            line_spacing: margin,
        }
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other`
    /// (at `t = 1`), clamping `t` into `[0, 1]`.
    ///
    /// Every metric field is blended independently. This gives hosts without
    /// a native interactive-transition layout the same live blend: feed the
    /// transition progress in as `t` and relayout with the result.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self {
            item_size: Size::new(
                mix(self.item_size.width, other.item_size.width),
                mix(self.item_size.height, other.item_size.height),
            ),
            insets: Insets {
                x0: mix(self.insets.x0, other.insets.x0),
                y0: mix(self.insets.y0, other.insets.y0),
                x1: mix(self.insets.x1, other.insets.x1),
                y1: mix(self.insets.y1, other.insets.y1),
            },
            item_spacing: mix(self.item_spacing, other.item_spacing),
            line_spacing: mix(self.line_spacing, other.line_spacing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GridLayout;
    use crate::GridConfig;

    #[test]
    fn cell_width_accounts_for_both_margin_kinds() {
        let config = GridConfig {
            cell_margin: 10.0,
            outline_margin: 5.0,
            ..GridConfig::new()
        };
        // 320 - 2*5 - 3*10 = 280, over 4 columns = 70.
        let layout = GridLayout::for_columns(4, 320.0, &config);
        assert_eq!(layout.item_size.width, 70.0);
        assert_eq!(layout.item_size.height, 70.0);
        assert_eq!(layout.insets.x0, 5.0);
        assert_eq!(layout.insets.y1, 5.0);
        assert_eq!(layout.item_spacing, 10.0);
        assert_eq!(layout.line_spacing, 10.0);
    }

    #[test]
    fn layout_is_a_pure_function_of_its_inputs() {
        let config = GridConfig::new();
        let a = GridLayout::for_columns(3, 375.0, &config);
        let b = GridLayout::for_columns(3, 375.0, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn single_column_uses_full_content_width() {
        let config = GridConfig {
            cell_margin: 8.0,
            outline_margin: 4.0,
            ..GridConfig::new()
        };
        // No interior gaps with one column.
        let layout = GridLayout::for_columns(1, 100.0, &config);
        assert_eq!(layout.item_size.width, 92.0);
    }

    #[test]
    fn negative_margins_behave_as_zero() {
        let config = GridConfig {
            cell_margin: -3.0,
            outline_margin: -1.0,
            ..GridConfig::new()
        };
        let layout = GridLayout::for_columns(2, 100.0, &config);
        assert_eq!(layout.item_size.width, 50.0);
        assert_eq!(layout.item_spacing, 0.0);
        assert_eq!(layout.insets.x0, 0.0);
    }

    #[test]
    fn lerp_hits_both_endpoints_and_the_midpoint() {
        let config = GridConfig {
            cell_margin: 2.0,
            outline_margin: 2.0,
            ..GridConfig::new()
        };
        let from = GridLayout::for_columns(2, 204.0, &config); // cell 99
        let to = GridLayout::for_columns(4, 204.0, &config); // cell 48.5

        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);

        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid.item_size.width, 73.75);
        assert_eq!(mid.item_spacing, 2.0);
    }

    #[test]
    fn lerp_clamps_t() {
        let config = GridConfig::new();
        let from = GridLayout::for_columns(2, 200.0, &config);
        let to = GridLayout::for_columns(3, 200.0, &config);
        assert_eq!(from.lerp(&to, -1.0), from);
        assert_eq!(from.lerp(&to, 2.0), to);
    }
}
