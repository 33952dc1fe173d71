use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use synapse_core::CounterAnimation;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const COUNTER_SELECTOR: &str = ".stat-number";
const COUNTER_VISIBILITY: f64 = 0.5;

pub struct RunningCounter {
    element: web::Element,
    animation: CounterAnimation,
    started: Duration,
}

pub type SharedCounters = Rc<RefCell<Vec<RunningCounter>>>;

/// Start counting each statistic the first time half of it is visible.
pub fn observe_counters(document: &web::Document) -> anyhow::Result<SharedCounters> {
    let counters: SharedCounters = Rc::new(RefCell::new(Vec::new()));
    let running = counters.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let text = target.text_content().unwrap_or_default();
                if let Some(animation) = CounterAnimation::parse(&text) {
                    log::debug!("[counter] counting to {}", animation.target());
                    running.borrow_mut().push(RunningCounter {
                        element: target.clone(),
                        animation,
                        started: dom::now(),
                    });
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(COUNTER_VISIBILITY));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for el in dom::query_all_html(document, COUNTER_SELECTOR) {
        observer.observe(&el);
    }
    Ok(counters)
}

/// Render every running counter at `now`, dropping the finished ones.
pub fn advance_all(counters: &SharedCounters, now: Duration) {
    counters.borrow_mut().retain_mut(|c| {
        let frame = c.animation.advance_to(now.saturating_sub(c.started));
        c.element.set_text_content(Some(&frame.text));
        !frame.done
    });
}
