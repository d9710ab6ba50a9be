//! DOM handles for the plot's controls.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement};

use super::dom;
use crate::animator::Inputs;
use crate::error::InputError;
use crate::format::format_number;
use crate::mapper::XRange;
use crate::params::{parse_number, AnimationMode, ParamId, Params};
use crate::plot::Overlay;

pub const HIDDEN: &str = "hidden";
pub const ACTIVE: &str = "active";

/// Slider and number field for one coefficient, kept in sync.
#[derive(Clone)]
pub struct ParamControl {
    pub id: ParamId,
    pub slider: HtmlInputElement,
    pub number: HtmlInputElement,
}

impl ParamControl {
    fn find(document: &Document, id: ParamId) -> Result<Self, JsValue> {
        Ok(Self {
            id,
            slider: dom::by_id(document, &format!("{id}_slider"))?,
            number: dom::by_id(document, &format!("{id}_num"))?,
        })
    }

    pub fn value(&self) -> Result<f64, InputError> {
        parse_number(&self.slider.value())
    }

    pub fn write(&self, value: f64) {
        let text = format_number(value);
        self.slider.set_value(&text);
        self.number.set_value(&text);
    }
}

#[derive(Clone)]
pub struct Controls {
    pub params: [ParamControl; 4],
    pub x_min: HtmlInputElement,
    pub x_max: HtmlInputElement,
    pub auto_update: HtmlInputElement,
    pub show_ticks: HtmlInputElement,
    pub show_origin: HtmlInputElement,
    pub anim_param: HtmlSelectElement,
    pub speed_buttons: Vec<Element>,
    pub play: Element,
    pub pause: Element,
    pub reset: Element,
    pub formula: Option<Element>,
}

impl Controls {
    pub fn find(document: &Document) -> Result<Self, JsValue> {
        Ok(Self {
            params: [
                ParamControl::find(document, ParamId::A)?,
                ParamControl::find(document, ParamId::B)?,
                ParamControl::find(document, ParamId::C)?,
                ParamControl::find(document, ParamId::D)?,
            ],
            x_min: dom::by_id(document, "xmin")?,
            x_max: dom::by_id(document, "xmax")?,
            auto_update: dom::by_id(document, "autoUpdate")?,
            show_ticks: dom::by_id(document, "showTicks")?,
            show_origin: dom::by_id(document, "showOrigin")?,
            anim_param: dom::by_id(document, "animParam")?,
            speed_buttons: dom::select_all(document, ".speed-btn")?,
            play: dom::by_id(document, "playBtn")?,
            pause: dom::by_id(document, "pauseBtn")?,
            reset: dom::by_id(document, "resetBtn")?,
            formula: document.get_element_by_id("formula-display"),
        })
    }

    /// Slider values as targets; an unparseable slider reads as NaN and is
    /// rejected by the animator.
    pub fn targets(&self) -> Params {
        let mut p = Params::DEFAULT;
        for control in &self.params {
            *p.get_mut(control.id) = control.value().unwrap_or(f64::NAN);
        }
        p
    }

    pub fn inputs(&self) -> Inputs {
        Inputs {
            x_min: parse_number(&self.x_min.value()).unwrap_or(f64::NAN),
            x_max: parse_number(&self.x_max.value()).unwrap_or(f64::NAN),
            overlay: Overlay {
                show_ticks: self.show_ticks.checked(),
                show_origin: self.show_origin.checked(),
            },
        }
    }

    pub fn auto_update(&self) -> bool {
        self.auto_update.checked()
    }

    pub fn mode(&self) -> Result<AnimationMode, InputError> {
        self.anim_param.value().parse()
    }

    pub fn write_x_range(&self, range: XRange) {
        self.x_min.set_value(&format_number(range.min));
        self.x_max.set_value(&format_number(range.max));
    }

    pub fn set_formula(&self, caption: &str) {
        if let Some(formula) = &self.formula {
            formula.set_text_content(Some(caption));
        }
    }

    /// Show exactly one of play/pause.
    pub fn show_playing(&self, playing: bool) -> Result<(), JsValue> {
        dom::set_class(&self.play, HIDDEN, playing)?;
        dom::set_class(&self.pause, HIDDEN, !playing)
    }

    /// Mark the button whose `data-speed` equals `speed` as the active one.
    pub fn highlight_speed(&self, speed: f64) -> Result<(), JsValue> {
        for button in &self.speed_buttons {
            let on = button_speed(button).ok() == Some(speed);
            dom::set_class(button, ACTIVE, on)?;
        }
        Ok(())
    }

    /// Put every field back to its default.
    pub fn reset_fields(&self) -> Result<(), JsValue> {
        for control in &self.params {
            control.write(Params::DEFAULT.get(control.id));
        }
        self.anim_param.set_value(AnimationMode::default().as_str());
        self.highlight_speed(1.0)
    }
}

pub fn button_speed(button: &Element) -> Result<f64, InputError> {
    parse_number(&button.get_attribute("data-speed").unwrap_or_default())
}
