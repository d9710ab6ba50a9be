#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Interactive plot of `y = A·cos(Bx + C) + D` with an optional looping
//! animation of one coefficient, plus the page's navbar and theme toggles.
//!
//! Everything outside `wasm` builds and tests on the host; the browser glue
//! is only compiled for wasm32.

pub mod animator;
pub mod config;
pub mod error;
pub mod format;
pub mod mapper;
pub mod params;
pub mod plot;
pub mod surface;
pub mod theme;

pub use animator::{FrameReport, Inputs, PlayState, PlotAnimator};
pub use config::{Palette, PlotConfig, PALETTE};
pub use error::InputError;
pub use mapper::{Mapper, XRange};
pub use params::{AnimationMode, ParamId, Params};
pub use plot::Overlay;
pub use surface::{RecordingSurface, Surface, Viewport};
pub use theme::{NavPanel, Theme};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod controls;
    mod dom;
    mod nav;
    mod render;

    pub use render::CanvasSurface;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Debug).ok();

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        nav::install(&document)?;

        // The navbar script runs on every page; the plot only where its
        // canvas exists.
        match document.get_element_by_id("graph") {
            Some(canvas) => {
                let canvas = canvas.dyn_into::<web_sys::HtmlCanvasElement>()?;
                let controls = controls::Controls::find(&document)?;
                render::start(window, canvas, controls)?;
                log::info!("cosine plot ready");
            }
            None => log::debug!("no #graph canvas on this page"),
        }
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::CanvasSurface;
