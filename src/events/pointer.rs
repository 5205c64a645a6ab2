use crate::core::PointerTracker;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window `pointermove` listener feeding a [`PointerTracker`].
///
/// The listener is registered on construction and removed when this value
/// is dropped; after that the tracker receives no further updates.
pub struct PointerListener {
    target: web::EventTarget,
    closure: Closure<dyn FnMut(web::PointerEvent)>,
}

impl PointerListener {
    pub fn attach(window: &web::Window, tracker: PointerTracker) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            tracker.on_move(input::pointer_client_px(&ev));
        }) as Box<dyn FnMut(_)>);

        let target: web::EventTarget = window.clone().into();
        target
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("pointermove listener: {:?}", e))?;
        log::info!("[pointer] listener attached");
        Ok(Self { target, closure })
    }
}

impl Drop for PointerListener {
    fn drop(&mut self) {
        _ = self.target.remove_event_listener_with_callback(
            "pointermove",
            self.closure.as_ref().unchecked_ref(),
        );
        log::info!("[pointer] listener removed");
    }
}
