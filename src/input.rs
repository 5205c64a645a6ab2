use crate::core::scroll_progress;
use glam::Vec2;
use web_sys as web;

#[inline]
pub fn pointer_client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Current document scroll progress in [0, 1].
///
/// The viewport is the root element's `clientHeight`, which excludes a
/// horizontal scrollbar; `innerHeight` would include it.
pub fn window_scroll_progress(window: &web::Window) -> f32 {
    let offset = window.scroll_y().unwrap_or(0.0);
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return 0.0;
    };
    scroll_progress(
        offset,
        root.scroll_height() as f64,
        root.client_height() as f64,
    )
}
