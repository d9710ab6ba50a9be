//! Draws one frame of the plot onto a [`Surface`].

use crate::config::{PlotConfig, PALETTE};
use crate::format::{formula_caption, hex_to_rgba, tick_label};
use crate::mapper::{Mapper, XRange};
use crate::params::Params;
use crate::surface::{Align, Baseline, Path, Stroke, Surface, TextStyle};

const ARROW_SIZE: f64 = 10.0;
const TICK_HALF: f64 = 6.0;
const LABEL_GAP: f64 = 8.0;
const ORIGIN_RADIUS: f64 = 4.0;
const CAPTION_AT: (f64, f64) = (20.0, 20.0);
/// Beyond this many lines per pass a grid is solid colour anyway.
const MAX_GRID_LINES: usize = 4096;

const TICK_FONT: &str = "12px 'Inter', Arial";
const ORIGIN_FONT: &str = "11px 'Inter', Arial";
const CAPTION_FONT: &str = "20px 'Segoe Script', 'Brush Script MT', cursive";

/// Optional decorations, read from checkboxes at every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    pub show_ticks: bool,
    pub show_origin: bool,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            show_ticks: true,
            show_origin: true,
        }
    }
}

/// Paint background, grid, axes, the curve of `params` and its caption.
/// Returns the caption text.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    mapper: &Mapper,
    params: &Params,
    overlay: Overlay,
    config: &PlotConfig,
) -> String {
    surface.fill_background(PALETTE.background);
    draw_grid(surface, mapper);
    draw_axes(surface, mapper, overlay);

    let range = XRange {
        min: mapper.xmin,
        max: mapper.xmax,
    };
    let curve = sample_curve(mapper, sample_count(range, config), |x| params.eval(x));
    draw_curve(surface, &curve);

    let caption = formula_caption(params);
    draw_caption(surface, &caption);
    caption
}

/// Sampling density grows with the visible range, bounded on both sides.
pub fn sample_count(range: XRange, config: &PlotConfig) -> usize {
    let dense = (range.span() * config.samples_per_unit).floor() as usize;
    dense.max(config.min_samples).min(config.max_samples)
}

/// Sample `f` at `samples + 1` evenly spaced points across the mapper's
/// x-range. A non-finite value ends the current subpath; the next finite
/// value starts a new one.
pub fn sample_curve(mapper: &Mapper, samples: usize, f: impl Fn(f64) -> f64) -> Path {
    let dx = (mapper.xmax - mapper.xmin) / samples as f64;
    let mut path = Path::new();
    let mut started = false;
    for i in 0..=samples {
        let x = mapper.xmin + i as f64 * dx;
        let y = f(x);
        if !y.is_finite() {
            started = false;
            continue;
        }
        let (px, py) = mapper.to_px(x, y);
        if started {
            path.line_to(px, py);
        } else {
            path.move_to(px, py);
            started = true;
        }
    }
    path
}

/// `start, start + step, …` up to and including `end`, at most
/// [`MAX_GRID_LINES`] values.
fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if end >= start {
        (((end - start) / step).floor() as usize).saturating_add(1)
    } else {
        0
    };
    let count = count.min(MAX_GRID_LINES);
    (0..count).map(move |i| start + i as f64 * step)
}

fn draw_grid<S: Surface + ?Sized>(surface: &mut S, m: &Mapper) {
    let minor = Stroke::new(PALETTE.grid, 1.0);
    let major = Stroke::new(hex_to_rgba(PALETTE.neon, 0.06), 1.6);

    let vertical = |start: f64, step: f64| {
        let mut path = Path::new();
        for x in steps(start, m.xmax, step) {
            let p = m.x_to_px(x);
            path.segment((p, m.top()), (p, m.bottom()));
        }
        path
    };
    let minor_v = vertical((m.xmin * 2.0).ceil() / 2.0, 0.5);
    let major_v = vertical(m.xmin.ceil(), 1.0);
    surface.stroke_path(&minor_v, &minor);
    surface.stroke_path(&major_v, &major);

    let horizontal = |step: f64| {
        let mut path = Path::new();
        for y in steps(m.ymin.floor(), m.ymax, step) {
            let p = m.y_to_px(y);
            path.segment((m.left(), p), (m.right(), p));
        }
        path
    };
    surface.stroke_path(&horizontal(0.5), &minor);
    surface.stroke_path(&horizontal(1.0), &major);
}

fn draw_axes<S: Surface + ?Sized>(surface: &mut S, m: &Mapper, overlay: Overlay) {
    let (x0, y0) = m.axes_origin();
    let axis = Stroke::new(PALETTE.axis, 2.2);

    let mut lines = Path::new();
    lines.segment((m.left(), y0), (m.right(), y0));
    lines.segment((x0, m.top()), (x0, m.bottom()));
    surface.stroke_path(&lines, &axis);

    let tip_x = (m.right(), y0);
    let tip_y = (x0, m.top());
    let mut arrows = Path::new();
    arrows.segment(tip_x, (tip_x.0 - ARROW_SIZE, y0 - ARROW_SIZE / 2.0));
    arrows.segment(tip_x, (tip_x.0 - ARROW_SIZE, y0 + ARROW_SIZE / 2.0));
    arrows.segment(tip_y, (x0 - ARROW_SIZE / 2.0, tip_y.1 + ARROW_SIZE));
    arrows.segment(tip_y, (x0 + ARROW_SIZE / 2.0, tip_y.1 + ARROW_SIZE));
    surface.stroke_path(&arrows, &axis);

    if overlay.show_ticks {
        draw_ticks(surface, m, (x0, y0));
    }
    if overlay.show_origin {
        surface.fill_circle((x0, y0), ORIGIN_RADIUS, PALETTE.origin);
        let style = TextStyle {
            font: ORIGIN_FONT,
            color: PALETTE.chalk.to_owned(),
            align: Align::Left,
            baseline: Baseline::Bottom,
        };
        surface.fill_text("(0,0)", (x0 + LABEL_GAP, y0 - LABEL_GAP), &style);
    }
}

fn draw_ticks<S: Surface + ?Sized>(surface: &mut S, m: &Mapper, (x0, y0): (f64, f64)) {
    let x_style = TextStyle {
        font: TICK_FONT,
        color: PALETTE.ticks.to_owned(),
        align: Align::Center,
        baseline: Baseline::Top,
    };
    let y_style = TextStyle {
        align: Align::Right,
        baseline: Baseline::Middle,
        ..x_style.clone()
    };
    let mut marks = Path::new();
    let mut labels = Vec::new();

    for x in steps(m.xmin.ceil(), m.xmax, 1.0) {
        let p = m.x_to_px(x);
        marks.segment((p, y0 - TICK_HALF), (p, y0 + TICK_HALF));
        if x.abs() >= 1e-8 {
            labels.push((tick_label(x), (p, y0 + LABEL_GAP), &x_style));
        }
    }

    for y in steps(m.ymin.floor(), m.ymax, 1.0) {
        let p = m.y_to_px(y);
        marks.segment((x0 - TICK_HALF, p), (x0 + TICK_HALF, p));
        if y.abs() >= 1e-8 {
            labels.push((tick_label(y), (x0 - LABEL_GAP, p), &y_style));
        }
    }

    surface.stroke_path(&marks, &Stroke::new(PALETTE.axis, 1.4));
    for (text, at, style) in labels {
        surface.fill_text(&text, at, style);
    }
}

/// Solid stroke plus a wide translucent glow over the same path.
fn draw_curve<S: Surface + ?Sized>(surface: &mut S, curve: &Path) {
    surface.stroke_path(curve, &Stroke::new(PALETTE.graph, 3.0).rounded());
    surface.stroke_path(
        curve,
        &Stroke::new(hex_to_rgba(PALETTE.graph, 0.06), 10.0).rounded(),
    );
}

fn draw_caption<S: Surface + ?Sized>(surface: &mut S, caption: &str) {
    let style = TextStyle {
        font: CAPTION_FONT,
        color: PALETTE.chalk.to_owned(),
        align: Align::Left,
        baseline: Baseline::Top,
    };
    surface.fill_text(caption, CAPTION_AT, &style);
    surface.stroke_text(
        caption,
        CAPTION_AT,
        &style,
        &Stroke::new(hex_to_rgba("#000000", 0.12), 1.0),
    );
}
