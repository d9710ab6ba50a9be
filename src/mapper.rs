//! World ↔ pixel transforms for the plot area.

use crate::params::Params;

/// Visible x interval. Always `min < max` once resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XRange {
    pub min: f64,
    pub max: f64,
}

impl XRange {
    pub const DEFAULT: XRange = XRange {
        min: -10.0,
        max: 10.0,
    };

    #[inline]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Turn raw field values into a usable range.
    ///
    /// A non-finite bound falls back to the matching bound of `fallback`
    /// without touching the field, so a half-typed value does not get
    /// clobbered. An empty or inverted range resets both bounds to
    /// `fallback` and returns `true`: the caller must rewrite the fields.
    pub fn resolve(raw_min: f64, raw_max: f64, fallback: XRange) -> (XRange, bool) {
        let min = if raw_min.is_finite() { raw_min } else { fallback.min };
        let max = if raw_max.is_finite() { raw_max } else { fallback.max };
        if min >= max {
            (fallback, true)
        } else {
            (XRange { min, max }, false)
        }
    }
}

impl Default for XRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Affine map from world coordinates to logical pixels.
///
/// The y-range is symmetric around zero and sized from the target amplitude
/// and offset so slider moves do not rescale the view every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
    pub px_per_x: f64,
    pub px_per_y: f64,
    pub padding: f64,
    pub width: f64,
    pub height: f64,
}

impl Mapper {
    pub fn new(range: XRange, width: f64, height: f64, padding: f64, target: &Params) -> Self {
        let px_per_x = (width - padding * 2.0) / range.span();
        let ymax_abs = (target.d.abs() + target.a.abs()).max(1.0);
        let yr = (ymax_abs * 3.0).max(5.0);
        let ymin = -yr / 2.0;
        let ymax = yr / 2.0;
        let px_per_y = (height - padding * 2.0) / (ymax - ymin);
        Self {
            xmin: range.min,
            xmax: range.max,
            ymin,
            ymax,
            px_per_x,
            px_per_y,
            padding,
            width,
            height,
        }
    }

    #[inline]
    pub fn x_to_px(&self, x: f64) -> f64 {
        self.padding + (x - self.xmin) * self.px_per_x
    }

    #[inline]
    pub fn y_to_px(&self, y: f64) -> f64 {
        self.padding + (self.ymax - y) * self.px_per_y
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_to_px(x), self.y_to_px(y))
    }

    pub fn left(&self) -> f64 {
        self.padding
    }

    pub fn right(&self) -> f64 {
        self.width - self.padding
    }

    pub fn top(&self) -> f64 {
        self.padding
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.padding
    }

    /// Pixel position of the axes crossing. An axis whose zero is out of
    /// view is pinned to the nearest plot edge.
    pub fn axes_origin(&self) -> (f64, f64) {
        let y0 = if self.ymax >= 0.0 && self.ymin <= 0.0 {
            self.y_to_px(0.0)
        } else if self.ymax < 0.0 {
            self.top()
        } else {
            self.bottom()
        };
        let x0 = if self.xmin <= 0.0 && self.xmax >= 0.0 {
            self.x_to_px(0.0)
        } else if self.xmin > 0.0 {
            self.left()
        } else {
            self.right()
        };
        (x0, y0)
    }
}
