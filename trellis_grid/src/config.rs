// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied grid configuration.

/// Bounds, spacing, and commit threshold for a pinch-resizable grid.
///
/// This is a plain value type: hosts construct one (usually via
/// [`GridConfig::new`] plus struct update syntax) and hand it to the grid
/// wholesale. Every field has a documented default, so a grid works out of
/// the box without any host configuration.
///
/// Fields are read through the effective accessors ([`column_bounds`],
/// [`commit_threshold`]) which tolerate inverted or out-of-range values by
/// clamping rather than failing; the configuration is trusted to be sane,
/// not required to be.
///
/// [`column_bounds`]: GridConfig::column_bounds
/// [`commit_threshold`]: GridConfig::commit_threshold
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Smallest number of cells per row (default 1). Values below 1 behave as 1.
    pub min_columns: usize,
    /// Largest number of cells per row (default 5). Values below the effective
    /// minimum behave as the effective minimum.
    pub max_columns: usize,
    /// Margin between adjacent cells, both within a row and between rows
    /// (default 2.0). Negative values behave as 0.
    pub cell_margin: f64,
    /// Margin between the grid's outer cells and its edges (default 2.0).
    /// Negative values behave as 0.
    pub outline_margin: f64,
    /// Minimum transition progress at gesture end required to commit the
    /// pending column-count change (default 0.5). Read clamped to `[0, 1]`.
    pub zoom_commit_threshold: f64,
}

impl GridConfig {
    /// Creates a configuration with the documented defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_columns: 1,
            max_columns: 5,
            cell_margin: 2.0,
            outline_margin: 2.0,
            zoom_commit_threshold: 0.5,
        }
    }

    /// Returns the effective `(min, max)` column bounds.
    ///
    /// The effective minimum is at least 1; the effective maximum is at least
    /// the effective minimum. An inverted configuration therefore collapses
    /// to a single valid column count instead of producing an empty range.
    #[must_use]
    pub const fn column_bounds(&self) -> (usize, usize) {
        let min = if self.min_columns < 1 {
            1
        } else {
            self.min_columns
        };
        let max = if self.max_columns < min {
            min
        } else {
            self.max_columns
        };
        (min, max)
    }

    /// Clamps a column count into the effective bounds.
    #[must_use]
    pub const fn clamp_columns(&self, columns: usize) -> usize {
        let (min, max) = self.column_bounds();
        if columns < min {
            min
        } else if columns > max {
            max
        } else {
            columns
        }
    }

    /// Returns the commit threshold clamped into `[0, 1]`.
    #[must_use]
    pub fn commit_threshold(&self) -> f64 {
        self.zoom_commit_threshold.clamp(0.0, 1.0)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::GridConfig;

    #[test]
    fn defaults_match_documentation() {
        let config = GridConfig::new();
        assert_eq!(config.column_bounds(), (1, 5));
        assert_eq!(config.cell_margin, 2.0);
        assert_eq!(config.outline_margin, 2.0);
        assert_eq!(config.commit_threshold(), 0.5);
    }

    #[test]
    fn clamp_columns_respects_bounds() {
        let config = GridConfig {
            min_columns: 2,
            max_columns: 6,
            ..GridConfig::new()
        };
        assert_eq!(config.clamp_columns(0), 2);
        assert_eq!(config.clamp_columns(2), 2);
        assert_eq!(config.clamp_columns(4), 4);
        assert_eq!(config.clamp_columns(6), 6);
        assert_eq!(config.clamp_columns(100), 6);
    }

    #[test]
    fn degenerate_bounds_collapse_instead_of_inverting() {
        // Zero minimum behaves as 1.
        let config = GridConfig {
            min_columns: 0,
            max_columns: 3,
            ..GridConfig::new()
        };
        assert_eq!(config.column_bounds(), (1, 3));

        // Inverted bounds collapse to the minimum.
        let config = GridConfig {
            min_columns: 4,
            max_columns: 2,
            ..GridConfig::new()
        };
        assert_eq!(config.column_bounds(), (4, 4));
        assert_eq!(config.clamp_columns(100), 4);
    }

    #[test]
    fn commit_threshold_is_clamped() {
        let config = GridConfig {
            zoom_commit_threshold: 1.5,
            ..GridConfig::new()
        };
        assert_eq!(config.commit_threshold(), 1.0);

        let config = GridConfig {
            zoom_commit_threshold: -0.5,
            ..GridConfig::new()
        };
        assert_eq!(config.commit_threshold(), 0.0);
    }
}
