use crate::constants::{REVEALED_CLASS, REVEAL_THRESHOLD};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot reveal for gallery cards.
///
/// A card becomes visible the first time it intersects the viewport and is
/// then unobserved, so it never hides again. The observer is disconnected
/// on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe(cards: &[web::HtmlElement]) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(card) = target.dyn_ref::<web::HtmlElement>() {
                        reveal(card);
                    }
                    observer.unobserve(&target);
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        for card in cards {
            observer.observe(card);
        }
        log::info!("[reveal] observing {} cards", cards.len());
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

fn reveal(card: &web::HtmlElement) {
    let style = card.style();
    _ = style.set_property("opacity", "1");
    _ = style.set_property("transform", "translateY(0)");
    _ = card.class_list().add_1(REVEALED_CLASS);
    log::debug!(
        "[reveal] card {}",
        card.get_attribute("data-project-id").unwrap_or_default()
    );
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
