// Helper functions for building the page: creating elements, appending them,
// and looking things up on the DOM

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| String::from("No global window available"))
}

pub fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| String::from("Window has no document"))
}

pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("No element with id '{}'", id))?
        .dyn_into::<T>()
        .map_err(|_| format!("Element '{}' has an unexpected type", id))
}

// Creates `<tag class="...">` appended to `parent`
pub fn child(document: &Document, parent: &Element, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    parent.append_child(&element)?;
    Ok(element)
}

pub fn text_child(
    document: &Document,
    parent: &Element,
    tag: &str,
    class: &str,
    text: &str,
) -> Result<Element, JsValue> {
    let element = child(document, parent, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

// Anchor, external links open in a new tab
pub fn link(document: &Document, parent: &Element, href: &str, text: &str) -> Result<Element, JsValue> {
    let anchor = text_child(document, parent, "a", "link", text)?;
    anchor.set_attribute("href", href)?;
    if href.starts_with("http") {
        anchor.set_attribute("target", "_blank")?;
        anchor.set_attribute("rel", "noopener noreferrer")?;
    }
    Ok(anchor)
}

pub fn as_html(element: &Element) -> Result<HtmlElement, JsValue> {
    element
        .clone()
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("Element is not an HtmlElement"))
}
