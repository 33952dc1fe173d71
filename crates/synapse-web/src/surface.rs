use crate::dom::set_px;
use fnv::FnvHashMap;
use glam::Vec2;
use synapse_core::{CursorState, EntityId, Surface, Visual};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draws effect entities as absolutely positioned `div`s inside the
/// synapse container and moves the custom cursor marker.
pub struct DomSurface {
    document: web::Document,
    container: web::Element,
    cursor: web::HtmlElement,
    entities: FnvHashMap<EntityId, web::HtmlElement>,
}

impl DomSurface {
    pub fn new(document: web::Document, container: web::Element, cursor: web::HtmlElement) -> Self {
        Self {
            document,
            container,
            cursor,
            entities: FnvHashMap::default(),
        }
    }

    fn create_div(&self) -> Option<web::HtmlElement> {
        self.document
            .create_element("div")
            .ok()?
            .dyn_into::<web::HtmlElement>()
            .ok()
    }
}

impl Surface for DomSurface {
    fn insert(&mut self, id: EntityId, visual: &Visual) {
        let Some(el) = self.create_div() else {
            log::warn!("[surface] could not create element for {}", id);
            return;
        };
        el.set_class_name(visual.kind.class_name());

        let style = el.style();
        set_px(&style, "left", visual.position.x);
        set_px(&style, "top", visual.position.y);
        if let Some(size) = visual.size {
            set_px(&style, "width", size.x);
            set_px(&style, "height", size.y);
        }
        if let Some(deg) = visual.rotation_deg {
            let _ = style.set_property("transform", &format!("rotate({}deg)", deg));
            let _ = style.set_property("transform-origin", "0 0");
        }
        let _ = style.set_property("animation", &visual.animation_css());

        let _ = self.container.append_child(&el);
        self.entities.insert(id, el);
    }

    fn move_to(&mut self, id: EntityId, position: Vec2) {
        if let Some(el) = self.entities.get(&id) {
            let style = el.style();
            set_px(&style, "left", position.x);
            set_px(&style, "top", position.y);
        }
    }

    fn remove(&mut self, id: EntityId) -> bool {
        let Some(el) = self.entities.remove(&id) else {
            return false;
        };
        match el.parent_node() {
            Some(parent) => {
                let _ = parent.remove_child(&el);
                true
            }
            None => false,
        }
    }

    fn place_cursor(&mut self, position: Vec2) {
        let style = self.cursor.style();
        set_px(&style, "left", position.x);
        set_px(&style, "top", position.y);
    }

    fn set_cursor_state(&mut self, state: CursorState, on: bool) {
        let cl = self.cursor.class_list();
        if on {
            let _ = cl.add_1(state.class_name());
        } else {
            let _ = cl.remove_1(state.class_name());
        }
    }
}
