//! Drawing seam between the plot algorithm and whatever paints it.
//!
//! The browser build implements [`Surface`] on a 2D canvas context; host
//! code and tests use [`RecordingSurface`], which keeps every operation.

pub type Point = (f64, f64);

/// Polylines in logical pixels. Each `move_to` starts a new subpath.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    subpaths: Vec<Vec<Point>>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.subpaths.push(vec![(x, y)]);
    }

    /// Extends the current subpath, or starts one if there is none.
    pub fn line_to(&mut self, x: f64, y: f64) {
        match self.subpaths.last_mut() {
            Some(sub) => sub.push((x, y)),
            None => self.move_to(x, y),
        }
    }

    /// Convenience for a single segment.
    pub fn segment(&mut self, from: Point, to: Point) {
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
    }

    pub fn subpaths(&self) -> &[Vec<Point>] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.subpaths.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    /// Round caps and joins instead of butt/miter.
    pub round: bool,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            round: false,
        }
    }

    pub fn rounded(mut self) -> Self {
        self.round = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_css(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    Top,
    Middle,
    Bottom,
}

impl Baseline {
    pub fn as_css(self) -> &'static str {
        match self {
            Baseline::Top => "top",
            Baseline::Middle => "middle",
            Baseline::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font: &'static str,
    pub color: String,
    pub align: Align,
    pub baseline: Baseline,
}

pub trait Surface {
    /// Logical (CSS pixel) size of the drawable area.
    fn size(&self) -> (f64, f64);

    fn fill_background(&mut self, color: &str);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str);

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle);

    fn stroke_text(&mut self, text: &str, at: Point, style: &TextStyle, outline: &Stroke);
}

/// Logical size plus device pixel ratio of a HiDPI drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    /// Fit a container of `container_width` logical pixels, keeping the
    /// aspect ratio of `fallback` and never exceeding its width. An
    /// unmeasurable container gets `fallback` as is.
    pub fn fit(container_width: f64, dpr: f64, fallback: (f64, f64)) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let (width, height) = if container_width.is_finite() && container_width > 0.0 {
            let width = container_width.min(fallback.0);
            (width, width * fallback.1 / fallback.0)
        } else {
            fallback
        };
        Self { width, height, dpr }
    }

    /// Backing-store size in device pixels.
    pub fn physical(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).floor() as u32,
            (self.height * self.dpr).floor() as u32,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Background(String),
    Path { path: Path, stroke: Stroke },
    Circle { center: Point, radius: f64, color: String },
    Text { text: String, at: Point, style: TextStyle, outlined: bool },
}

/// Headless surface that records what would have been drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Paths stroked with exactly `color`.
    pub fn paths_with_color<'a>(&'a self, color: &'a str) -> impl Iterator<Item = &'a Path> + 'a {
        self.ops.iter().filter_map(move |op| match op {
            DrawOp::Path { path, stroke } if stroke.color == color => Some(path),
            _ => None,
        })
    }

    /// Filled (not outlined) text in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    outlined: false,
                    ..
                } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Point, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_background(&mut self, color: &str) {
        self.ops.push(DrawOp::Background(color.to_owned()));
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.ops.push(DrawOp::Path {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: &str) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: color.to_owned(),
        });
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            at,
            style: style.clone(),
            outlined: false,
        });
    }

    fn stroke_text(&mut self, text: &str, at: Point, style: &TextStyle, _outline: &Stroke) {
        self.ops.push(DrawOp::Text {
            text: text.to_owned(),
            at,
            style: style.clone(),
            outlined: true,
        });
    }
}
