use orrery_engine::LabelOverlay;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

const LABEL_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("background", "rgba(30, 30, 40, 0.95)"),
    ("color", "#ffffff"),
    ("padding", "4px 10px"),
    ("border-radius", "6px"),
    ("font", "14px sans-serif"),
    ("pointer-events", "none"),
    ("z-index", "100"),
    ("display", "none"),
];

/// Mirrors the engine's `LabelOverlay` into one floating `<div>`.
///
/// The element is created on the first sync that finds a label and is
/// reused afterwards.
#[derive(Default)]
pub struct DomLabel {
    element: Option<HtmlElement>,
}

impl DomLabel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sync(&mut self, overlay: &LabelOverlay) -> Result<(), JsValue> {
        let label = match overlay.get() {
            Some(label) => label,
            None => return Ok(()),
        };

        let element = match &self.element {
            Some(el) => el,
            None => self.element.insert(create_element()?),
        };

        let style = element.style();
        if label.visible {
            element.set_text_content(Some(&label.text));
            style.set_property("left", &format!("{}px", label.x))?;
            style.set_property("top", &format!("{}px", label.y))?;
            style.set_property("display", "block")?;
        } else {
            style.set_property("display", "none")?;
        }
        Ok(())
    }
}

fn create_element() -> Result<HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    element.set_class_name("orrery-label");
    let style = element.style();
    for (name, value) in LABEL_STYLE {
        style.set_property(name, value)?;
    }
    body.append_child(&element)?;
    log::debug!("label element created");
    Ok(element)
}
