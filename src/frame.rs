use crate::core::SmoothFollower;
use crate::render::RenderTree;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    render: Rc<RenderTree>,
    follower: Rc<RefCell<SmoothFollower>>,
    last_instant: Instant,
    painted_once: bool,
}

impl FrameContext {
    pub fn new(render: Rc<RenderTree>, follower: Rc<RefCell<SmoothFollower>>) -> Self {
        Self {
            render,
            follower,
            last_instant: Instant::now(),
            painted_once: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut follower = self.follower.borrow_mut();
        if !follower.is_initialized() {
            return;
        }
        // Nothing moves while at rest; paint the settled position once.
        let pos = if follower.is_at_rest() {
            if self.painted_once {
                return;
            }
            follower.position()
        } else {
            follower.tick(dt_sec)
        };
        drop(follower);
        self.render.apply_follower(pos);
        self.painted_once = true;
    }
}

/// Running requestAnimationFrame loop. Dropping it cancels the pending
/// frame and releases the tick closure.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let running = Rc::new(Cell::new(true));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        handle_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    handle.set(request_frame(&tick));
    log::info!("[frame] loop started");
    FrameLoop {
        running,
        handle,
        tick,
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}
