use crate::core::Observable;
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Passive window `scroll` listener publishing normalized scroll progress.
///
/// Samples once on attach so the hero starts in the right state when the
/// page is restored mid-scroll. Removed on drop.
pub struct ScrollListener {
    target: web::EventTarget,
    closure: Closure<dyn FnMut()>,
}

impl ScrollListener {
    pub fn attach(window: &web::Window, progress: Observable<f32>) -> anyhow::Result<Self> {
        progress.set(input::window_scroll_progress(window));

        let window_cb = window.clone();
        let closure = Closure::wrap(Box::new(move || {
            let p = input::window_scroll_progress(&window_cb);
            if p != progress.get() {
                log::trace!("[scroll] progress={:.3}", p);
                progress.set(p);
            }
        }) as Box<dyn FnMut()>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        let target: web::EventTarget = window.clone().into();
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(|e| anyhow::anyhow!("scroll listener: {:?}", e))?;
        log::info!("[scroll] listener attached");
        Ok(Self { target, closure })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback("scroll", self.closure.as_ref().unchecked_ref());
        log::info!("[scroll] listener removed");
    }
}
