use crate::dom;
use crate::surface::DomSurface;
use glam::Vec2;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use synapse_core::{is_interactive, SynapseEffect, TargetElement};
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedEffect = Rc<RefCell<SynapseEffect<DomSurface, StdRng>>>;

/// DOM element viewed through the core's predicate trait.
pub struct DomTarget(pub web::Element);

impl TargetElement for DomTarget {
    fn matches_selector(&self, selector: &str) -> bool {
        self.0.matches(selector).unwrap_or(false)
    }

    fn parent(&self) -> Option<Self> {
        self.0.parent_element().map(DomTarget)
    }
}

#[inline]
pub fn target_is_interactive(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| is_interactive(&DomTarget(el)))
        .unwrap_or(false)
}

pub fn wire_pointer_handlers(document: &web::Document, effect: &SharedEffect) {
    wire_pointermove(document, effect);
    wire_pointerover(document, effect);
    wire_pointerdown(document, effect);
    wire_pointerup(document, effect);
}

fn wire_pointermove(document: &web::Document, effect: &SharedEffect) {
    let effect = effect.clone();
    dom::add_listener(document, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let interactive = target_is_interactive(&ev);
        effect
            .borrow_mut()
            .pointer_move(dom::now(), pos, interactive);
    });
}

fn wire_pointerover(document: &web::Document, effect: &SharedEffect) {
    let effect = effect.clone();
    dom::add_listener(document, "pointerover", move |ev: web::PointerEvent| {
        let interactive = target_is_interactive(&ev);
        effect.borrow_mut().pointer_over(interactive);
    });
}

fn wire_pointerdown(document: &web::Document, effect: &SharedEffect) {
    let effect = effect.clone();
    dom::add_listener(document, "pointerdown", move |_ev: web::PointerEvent| {
        effect.borrow_mut().pointer_down();
    });
}

fn wire_pointerup(document: &web::Document, effect: &SharedEffect) {
    let effect = effect.clone();
    dom::add_listener(document, "pointerup", move |_ev: web::PointerEvent| {
        effect.borrow_mut().pointer_up();
    });
}
