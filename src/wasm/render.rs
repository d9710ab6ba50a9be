use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, Window};

use super::controls::{button_speed, Controls, ParamControl};
use super::dom;
use crate::animator::{FrameReport, PlotAnimator};
use crate::params::parse_number;
use crate::surface::{Path, Point, Stroke, Surface, TextStyle, Viewport};

/// [`Surface`] backed by a 2D canvas context, drawing in CSS pixels on a
/// device-pixel backing store.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d canvas context not supported")?
            .dyn_into()?;
        let viewport = Viewport {
            width: canvas.width() as f64,
            height: canvas.height() as f64,
            dpr: 1.0,
        };
        Ok(Self {
            canvas,
            ctx,
            viewport,
        })
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Size the canvas to its container at the current pixel density.
    pub fn fit(&mut self, window: &Window, fallback: (f64, f64)) -> Result<(), JsValue> {
        let container = self
            .canvas
            .parent_element()
            .map(|p| p.client_width() as f64)
            .unwrap_or_default();
        let viewport = Viewport::fit(container, window.device_pixel_ratio(), fallback);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", viewport.width))?;
        style.set_property("height", &format!("{}px", viewport.height))?;
        let (w, h) = viewport.physical();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.ctx
            .set_transform(viewport.dpr, 0.0, 0.0, viewport.dpr, 0.0, 0.0)?;

        if viewport != self.viewport {
            log::debug!(
                "canvas {}x{} @{}x -> {w}x{h}",
                viewport.width,
                viewport.height,
                viewport.dpr
            );
        }
        self.viewport = viewport;
        Ok(())
    }

    fn apply_text(&self, style: &TextStyle) {
        self.ctx.set_font(style.font);
        self.ctx.set_text_align(style.align.as_css());
        self.ctx.set_text_baseline(style.baseline.as_css());
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.viewport.width, self.viewport.height)
    }

    fn fill_background(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(0.0, 0.0, self.viewport.width, self.viewport.height);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        let ctx = &self.ctx;
        ctx.save();
        ctx.begin_path();
        for sub in path.subpaths() {
            let mut points = sub.iter();
            if let Some(&(x, y)) = points.next() {
                ctx.move_to(x, y);
            }
            for &(x, y) in points {
                ctx.line_to(x, y);
            }
        }
        ctx.set_stroke_style_str(&stroke.color);
        ctx.set_line_width(stroke.width);
        if stroke.round {
            ctx.set_line_cap("round");
            ctx.set_line_join("round");
        } else {
            ctx.set_line_cap("butt");
            ctx.set_line_join("miter");
        }
        ctx.stroke();
        ctx.restore();
    }

    fn fill_circle(&mut self, (x, y): Point, radius: f64, color: &str) {
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius, 0.0, TAU).ok();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, (x, y): Point, style: &TextStyle) {
        self.apply_text(style);
        self.ctx.set_fill_style_str(&style.color);
        self.ctx.fill_text(text, x, y).ok();
    }

    fn stroke_text(&mut self, text: &str, (x, y): Point, style: &TextStyle, outline: &Stroke) {
        self.apply_text(style);
        self.ctx.set_line_width(outline.width);
        self.ctx.set_stroke_style_str(&outline.color);
        self.ctx.stroke_text(text, x, y).ok();
    }
}

struct App {
    window: Window,
    animator: PlotAnimator,
    surface: CanvasSurface,
    controls: Controls,
    /// Pending animation frame, if one is scheduled.
    frame: Option<i32>,
}

impl App {
    fn now(&self) -> f64 {
        dom::now_seconds(&self.window)
    }

    fn render(&mut self) {
        let now = self.now();
        let inputs = self.controls.inputs();
        let report = self.animator.render_frame(now, &inputs, &mut self.surface);
        self.publish(&report);
    }

    fn publish(&self, report: &FrameReport) {
        if report.x_range_reset {
            self.controls.write_x_range(report.x_range);
        }
        self.controls.set_formula(&report.caption);
    }

    /// Render on demand: only while stopped and auto-update is on.
    fn refresh(&mut self) {
        if self.controls.auto_update() && !self.animator.is_playing() {
            self.render();
        }
    }

    fn sync_targets(&mut self) {
        if let Err(e) = self.animator.set_targets(self.controls.targets()) {
            log::warn!("keeping previous target: {e}");
        }
    }

    fn sync_mode(&mut self) {
        match self.controls.mode() {
            Ok(mode) => self.animator.set_animation_mode(mode),
            Err(e) => log::warn!("{e}"),
        }
    }

    fn resize(&mut self) {
        let fallback = self.animator.config().logical_size;
        if let Err(e) = self.surface.fit(&self.window, fallback) {
            log::warn!("canvas resize failed: {e:?}");
        }
        self.render();
    }

    /// Returns `true` if play started and a frame must be scheduled.
    fn play(&mut self) -> bool {
        self.sync_mode();
        let now = self.now();
        if !self.animator.start(now) {
            return false;
        }
        self.show_playing(true);
        true
    }

    fn pause(&mut self) {
        self.animator.pause();
        if let Some(id) = self.frame.take() {
            self.window.cancel_animation_frame(id).ok();
        }
        self.show_playing(false);
    }

    fn reset(&mut self) {
        self.pause();
        if let Err(e) = self.controls.reset_fields() {
            log::warn!("resetting fields failed: {e:?}");
        }
        let now = self.now();
        let inputs = self.controls.inputs();
        let report = self.animator.reset(now, &inputs, &mut self.surface);
        self.publish(&report);
    }

    fn show_playing(&self, playing: bool) {
        if let Err(e) = self.controls.show_playing(playing) {
            log::warn!("play button state: {e:?}");
        }
    }
}

/// The app plus the animation-frame callback that drives it while playing.
struct Plot {
    window: Window,
    app: RefCell<App>,
    // `tick` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` with itself. Storing it inside an `Option`
    // allows us to create the `Plot` first and then the `Closure` that
    // refers to it.
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Plot {
    fn schedule(&self) {
        let tick = self.tick.borrow();
        let Some(tick) = tick.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(tick.as_ref().unchecked_ref())
        {
            Ok(id) => self.app.borrow_mut().frame = Some(id),
            Err(e) => log::warn!("request_animation_frame failed: {e:?}"),
        }
    }

    fn on_frame(&self) {
        let playing = {
            let mut app = self.app.borrow_mut();
            app.frame = None;
            app.render();
            app.animator.is_playing()
        };
        if playing {
            self.schedule();
        }
    }

    fn play(&self) {
        let started = self.app.borrow_mut().play();
        if started {
            self.schedule();
        }
    }

    fn pause(&self) {
        self.app.borrow_mut().pause();
    }

    fn toggle(&self) {
        let playing = self.app.borrow().animator.is_playing();
        if playing {
            self.pause();
        } else {
            self.play();
        }
    }
}

/// Build the plot on `canvas`, wire every control and draw the first frame.
pub fn start(window: Window, canvas: HtmlCanvasElement, controls: Controls) -> Result<(), JsValue> {
    let surface = CanvasSurface::new(canvas)?;
    let plot = Rc::new(Plot {
        window: window.clone(),
        app: RefCell::new(App {
            window: window.clone(),
            animator: PlotAnimator::default(),
            surface,
            controls: controls.clone(),
            frame: None,
        }),
        tick: RefCell::new(None),
    });

    {
        let p = plot.clone();
        *plot.tick.borrow_mut() =
            Some(Closure::wrap(Box::new(move || p.on_frame()) as Box<dyn FnMut()>));
    }

    for control in &controls.params {
        wire_param(&plot, control)?;
    }

    for field in [&controls.x_min, &controls.x_max, &controls.show_ticks, &controls.show_origin] {
        let p = plot.clone();
        dom::listen(field, "input", move |_| p.app.borrow_mut().refresh())?;
    }

    {
        let p = plot.clone();
        dom::listen(&controls.anim_param, "change", move |_| p.app.borrow_mut().sync_mode())?;
    }

    for button in &controls.speed_buttons {
        let p = plot.clone();
        let source = button.clone();
        dom::listen(button, "click", move |_| {
            let speed = match button_speed(&source) {
                Ok(speed) => speed,
                Err(e) => {
                    log::warn!("speed button: {e}");
                    return;
                }
            };
            let mut app = p.app.borrow_mut();
            match app.animator.set_speed(speed) {
                Ok(()) => {
                    if let Err(e) = app.controls.highlight_speed(speed) {
                        log::warn!("speed buttons: {e:?}");
                    }
                }
                Err(e) => log::warn!("{e}"),
            }
        })?;
    }

    {
        let p = plot.clone();
        dom::listen(&controls.play, "click", move |_| p.play())?;
        let p = plot.clone();
        dom::listen(&controls.pause, "click", move |_| p.pause())?;
        let p = plot.clone();
        dom::listen(&controls.reset, "click", move |_| p.app.borrow_mut().reset())?;
    }

    {
        let p = plot.clone();
        dom::listen(&window, "keydown", move |e| {
            let Some(key) = e.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if key.code() == "Space" {
                key.prevent_default();
                p.toggle();
            }
        })?;
        let p = plot.clone();
        dom::listen(&window, "resize", move |_| p.app.borrow_mut().resize())?;
    }

    let mut app = plot.app.borrow_mut();
    app.sync_targets();
    app.sync_mode();
    app.show_playing(false);
    app.resize();
    Ok(())
}

/// Keep slider and number field in sync and feed the animator.
fn wire_param(plot: &Rc<Plot>, control: &ParamControl) -> Result<(), JsValue> {
    let pairs = [
        (control.slider.clone(), control.number.clone()),
        (control.number.clone(), control.slider.clone()),
    ];
    for (source, twin) in pairs {
        let p = plot.clone();
        let id = control.id;
        let target = source.clone();
        dom::listen(&target, "input", move |_| {
            let raw = source.value();
            let mut app = p.app.borrow_mut();
            let applied = parse_number(&raw).and_then(|v| app.animator.set_target(id, v));
            match applied {
                // Half-typed input stays in its own field; the twin keeps
                // showing the target.
                Ok(()) => twin.set_value(&raw),
                Err(e) => log::warn!("{id}: {e}"),
            }
            app.refresh();
        })?;
    }
    Ok(())
}
