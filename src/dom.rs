use crate::core::{BindError, Surface};
use crate::style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach `handler` to a window event for the rest of the page session.
pub fn add_window_listener(event: &str, mut handler: impl FnMut() + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

/// [`Surface`] over the live document.
pub struct DomSurface {
    document: web::Document,
}

impl DomSurface {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }

    fn element(&self, element_id: &str) -> Result<web::Element, BindError> {
        self.document
            .get_element_by_id(element_id)
            .ok_or_else(|| BindError::MissingElement(element_id.to_string()))
    }
}

impl Surface for DomSurface {
    fn contains(&self, element_id: &str) -> bool {
        self.document.get_element_by_id(element_id).is_some()
    }

    fn set_display(&mut self, element_id: &str, display: &str) -> Result<(), BindError> {
        let el = self.element(element_id)?;
        let written = match el.dyn_ref::<web::HtmlElement>() {
            Some(html) => html.style().set_property("display", display),
            // non-HTML elements (svg) have no style object
            None => {
                let current = el.get_attribute("style").unwrap_or_default();
                el.set_attribute("style", &style::with_display(&current, display))
            }
        };
        written.map_err(|e| BindError::Dom(format!("{:?}", e)))
    }

    fn set_text(&mut self, element_id: &str, text: &str) -> Result<(), BindError> {
        self.element(element_id)?.set_text_content(Some(text));
        Ok(())
    }
}
