use crate::counter::{self, SharedCounters};
use crate::dom;
use crate::events::SharedEffect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub effect: SharedEffect,
    pub counters: SharedCounters,
    pub loop_active: bool,
}

impl FrameContext {
    /// One display frame. Returns whether the loop should keep running.
    pub fn frame(&mut self) -> bool {
        let now = dom::now();
        let running = {
            let mut fx = self.effect.borrow_mut();
            fx.tick(now);
            fx.is_running()
        };
        counter::advance_all(&self.counters, now);
        running
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    frame_ctx.borrow_mut().loop_active = true;
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx_tick.borrow_mut();
        if !ctx.frame() {
            ctx.loop_active = false;
            log::info!("[frame] loop stopped");
            return;
        }
        drop(ctx);
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Stop the render loop when the page is hidden for navigation and restart
/// it if the page comes back from the back/forward cache.
pub fn wire_page_lifecycle(window: &web::Window, frame_ctx: &Rc<RefCell<FrameContext>>) {
    let ctx = frame_ctx.clone();
    dom::add_listener(window, "pagehide", move |_ev: web::Event| {
        ctx.borrow().effect.borrow_mut().stop();
    });

    let ctx = frame_ctx.clone();
    dom::add_listener(window, "pageshow", move |_ev: web::Event| {
        let needs_loop = {
            let ctx_ref = ctx.borrow();
            ctx_ref.effect.borrow_mut().start();
            !ctx_ref.loop_active
        };
        if needs_loop {
            log::info!("[frame] loop restarted");
            start_loop(ctx.clone());
        }
    });
}
