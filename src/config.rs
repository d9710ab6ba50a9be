//! Plot tuning and page colours.

use crate::mapper::XRange;

/// Fixed tuning values for the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Inset of the plot area from every edge, in logical pixels.
    pub padding: f64,
    /// Fraction of the remaining distance covered per frame (higher = snappier).
    pub smoothing: f64,
    pub samples_per_unit: f64,
    pub min_samples: usize,
    /// Upper bound so a huge x-range cannot allocate without limit.
    pub max_samples: usize,
    pub default_x_range: XRange,
    /// Inclusive bounds for the animated frequency.
    pub b_min: f64,
    pub b_max: f64,
    /// Logical canvas size used when the container cannot be measured.
    pub logical_size: (f64, f64),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            padding: 60.0,
            smoothing: 0.16,
            samples_per_unit: 120.0,
            min_samples: 1000,
            max_samples: 200_000,
            default_x_range: XRange::DEFAULT,
            b_min: 0.0,
            b_max: 25.0,
            logical_size: (1200.0, 650.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub grid: &'static str,
    pub axis: &'static str,
    pub ticks: &'static str,
    pub graph: &'static str,
    pub chalk: &'static str,
    pub neon: &'static str,
    pub origin: &'static str,
}

pub const PALETTE: Palette = Palette {
    background: "#050608",
    grid: "#172026",
    axis: "#9fb5ba",
    ticks: "#7f8b90",
    graph: "#00f0d1",
    chalk: "#e6f6f5",
    neon: "#7b4bff",
    origin: "#ff6b6b",
};
