use wasm_bindgen::JsCast;
use web_sys as web;

/// Create `<tag class="...">`, optionally with text content.
pub fn el(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::HtmlElement> {
    let node = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    if !class.is_empty() {
        node.set_class_name(class);
    }
    if let Some(t) = text {
        node.set_text_content(Some(t));
    }
    node.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("<{}> is not an HtmlElement: {:?}", tag, e))
}

#[inline]
pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))
}

#[inline]
pub fn set_style(node: &web::HtmlElement, property: &str, value: &str) {
    _ = node.style().set_property(property, value);
}

/// `translate3d` keeps the follower on the compositor.
#[inline]
pub fn translate_px(x: f32, y: f32) -> String {
    format!("translate3d({:.2}px, {:.2}px, 0)", x, y)
}
