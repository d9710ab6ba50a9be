use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement};

use super::dom;
use crate::theme::{NavPanel, Theme};

/// Wire the navbar open/close buttons and the theme toggle. Any of them may
/// be missing from a page.
pub fn install(document: &Document) -> Result<(), JsValue> {
    if let Some(navlist) = document.get_element_by_id("navlist") {
        for (id, state) in [("open-navbar", NavPanel::Open), ("close-navbar", NavPanel::Closed)] {
            let Some(button) = document.get_element_by_id(id) else {
                continue;
            };
            let navlist = navlist.clone();
            dom::listen(&button, "click", move |_| {
                if let Err(e) = dom::replace_class(&navlist, state.swap()) {
                    log::warn!("navbar toggle failed: {e:?}");
                }
            })?;
        }
    }

    if let (Some(toggle), Some(body)) = (document.get_element_by_id("theme-toggle"), document.body()) {
        apply_theme(&body, None, current_theme(&body))?;
        dom::listen(&toggle, "click", move |_| {
            let (swap, next) = current_theme(&body).toggle_swap();
            if let Err(e) = apply_theme(&body, Some(swap.from), next) {
                log::warn!("theme toggle failed: {e:?}");
            }
        })?;
    }
    Ok(())
}

fn current_theme(body: &HtmlElement) -> Theme {
    Theme::from_attr(body.get_attribute("data-theme").as_deref())
}

/// Put `theme` on `<body>` as class and `data-theme`, dropping `previous`.
fn apply_theme(body: &HtmlElement, previous: Option<&str>, theme: Theme) -> Result<(), JsValue> {
    if let Some(previous) = previous {
        dom::set_class(body, previous, false)?;
    }
    dom::set_class(body, theme.as_str(), true)?;
    body.set_attribute("data-theme", theme.as_str())?;
    log::debug!("theme {theme}");
    Ok(())
}
