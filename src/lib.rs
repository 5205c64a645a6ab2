#![cfg(target_arch = "wasm32")]
use crate::core::{
    hero_transform, Observable, PointerTracker, SmoothFollower, Subscription, PROJECTS,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod reveal;

/// Everything owned by the mounted view. Field order is drop order:
/// event sources go first so nothing writes into state being torn down.
/// The page DOM is removed when the last `RenderTree` handle drops.
struct App {
    _pointer_listener: events::PointerListener,
    _scroll_listener: events::ScrollListener,
    _frame_loop: frame::FrameLoop,
    _reveal: Option<reveal::RevealObserver>,
    _subscriptions: Vec<Subscription>,
    _render: Rc<render::RenderTree>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("obsidian-archive starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Tear the view down: listeners removed, frame loop cancelled, DOM removed.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|slot| slot.borrow_mut().take());
    if app.is_some() {
        drop(app);
        log::info!("[mount] view torn down");
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let host = document
        .get_element_by_id(constants::APP_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::APP_ROOT_ID))?;

    // Remount replaces any previous view.
    unmount();

    let render = Rc::new(render::RenderTree::mount(&document, &host, PROJECTS)?);

    let tracker = PointerTracker::default();
    let follower = Rc::new(RefCell::new(SmoothFollower::default()));
    let scroll = Observable::new(0.0f32);

    let mut subscriptions = Vec::new();
    {
        let follower = follower.clone();
        subscriptions.push(tracker.subscribe(move |pos| {
            follower.borrow_mut().set_target(*pos);
        }));
    }
    {
        let render = render.clone();
        subscriptions.push(scroll.subscribe(move |p| {
            render.apply_hero(hero_transform(*p));
        }));
    }
    render.apply_hero(hero_transform(0.0));

    let pointer_listener = events::PointerListener::attach(&window, tracker)?;
    let scroll_listener = events::ScrollListener::attach(&window, scroll)?;

    let reveal = match reveal::RevealObserver::observe(render.cards()) {
        Ok(r) => Some(r),
        Err(e) => {
            // Cards would stay hidden without the observer.
            log::warn!("[reveal] unavailable, showing cards immediately: {:?}", e);
            for card in render.cards() {
                dom::set_style(card, "opacity", "1");
                dom::set_style(card, "transform", "none");
            }
            None
        }
    };

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        render.clone(),
        follower,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    APP.with(|slot| {
        *slot.borrow_mut() = Some(App {
            _pointer_listener: pointer_listener,
            _scroll_listener: scroll_listener,
            _frame_loop: frame_loop,
            _reveal: reveal,
            _subscriptions: subscriptions,
            _render: render,
        });
    });
    log::info!("[mount] view mounted");
    Ok(())
}
