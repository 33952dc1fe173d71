use crate::dom;
use synapse_core::scroll::*;
use wasm_bindgen::JsCast;
use web_sys as web;

const PROGRESS_BAR_CSS: &str = "position: fixed; top: 0; left: 0; width: 0%; height: 3px; \
     background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); \
     z-index: 9999; transition: width 0.1s ease;";

const PARALLAX_SECTIONS: &str = ".technology, .services, .case-studies, .team";
const CONTENT_SECTIONS: &str = ".technology, .services, .case-studies";
const FLOATING_CARDS: &str = ".tech-card, .service-card, .case-study";
const GLOWING_CARDS: &str = ".tech-card, .service-card";

pub fn create_progress_bar(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let bar = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let _ = bar.set_attribute("style", PROGRESS_BAR_CSS);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let _ = body.append_child(&bar);
    Ok(bar)
}

pub fn wire_scroll_effects(window: &web::Window, document: &web::Document, bar: web::HtmlElement) {
    on_scroll(window, document, &bar);
    let doc = document.clone();
    dom::add_listener(window, "scroll", move |_ev: web::Event| {
        if let Some(w) = web::window() {
            on_scroll(&w, &doc, &bar);
        }
    });
}

struct ScrollMetrics {
    scrolled: f32,
    viewport_height: f32,
    progress: f32,
}

fn metrics(window: &web::Window, document: &web::Document) -> Option<ScrollMetrics> {
    let scrolled = window.page_y_offset().ok()? as f32;
    let viewport_height = window.inner_height().ok()?.as_f64()? as f32;
    let scroll_height = document.body()?.scroll_height() as f32;
    Some(ScrollMetrics {
        scrolled,
        viewport_height,
        progress: scroll_progress(scrolled, scroll_height, viewport_height),
    })
}

fn on_scroll(window: &web::Window, document: &web::Document, bar: &web::HtmlElement) {
    let Some(m) = metrics(window, document) else {
        return;
    };
    let _ = bar
        .style()
        .set_property("width", &progress_bar_width(m.progress));

    apply_parallax(document, &m);
    apply_glow(document, &m);
}

fn apply_parallax(document: &web::Document, m: &ScrollMetrics) {
    if let Some(hero) = dom::query_html(document, ".hero") {
        if hero.get_bounding_client_rect().bottom() > 0.0 {
            let _ = hero.style().set_property(
                "transform",
                &format!("translateY({}px)", hero_offset(m.scrolled)),
            );
        }
    }

    // Content sections are numbered among themselves, the team section
    // among all parallax sections.
    let mut content_index = 0;
    for (i, section) in dom::query_all_html(document, PARALLAX_SECTIONS)
        .iter()
        .enumerate()
    {
        let is_content = section.matches(CONTENT_SECTIONS).unwrap_or(false);
        let rect = section.get_bounding_client_rect();
        if in_viewport(rect.top() as f32, rect.bottom() as f32, m.viewport_height) {
            let top = section.offset_top() as f32;
            let y = if is_content {
                section_background_offset(m.scrolled, top, content_index)
            } else {
                team_background_offset(m.scrolled, top, i)
            };
            let _ = section
                .style()
                .set_property("background-position", &format!("center {}px", y));
        }
        if is_content {
            content_index += 1;
        }
    }

    for (i, icon) in dom::query_all_html(document, ".tech-icon").iter().enumerate() {
        let rect = icon.get_bounding_client_rect();
        if in_viewport(rect.top() as f32, rect.bottom() as f32, m.viewport_height) {
            let _ = icon.style().set_property(
                "transform",
                &format!("translateY({}px)", icon_float_offset(m.scrolled, i)),
            );
        }
    }

    for (i, card) in dom::query_all_html(document, FLOATING_CARDS).iter().enumerate() {
        let rect = card.get_bounding_client_rect();
        if in_viewport(rect.top() as f32, rect.bottom() as f32, m.viewport_height) {
            let center = (rect.top() + rect.height() / 2.0) as f32;
            let k = center_proximity(center, m.viewport_height);
            let _ = card.style().set_property(
                "transform",
                &format!("translateY({}px)", card_float_offset(m.scrolled, i, k)),
            );
        }
    }
}

fn apply_glow(document: &web::Document, m: &ScrollMetrics) {
    let shadow = glow_text_shadow(glow_intensity(m.progress));
    for el in dom::query_all_html(document, ".stat-number, .logo") {
        let _ = el.style().set_property("text-shadow", &shadow);
    }

    for card in dom::query_all_html(document, GLOWING_CARDS) {
        let rect = card.get_bounding_client_rect();
        let center = (rect.top() + rect.height() / 2.0) as f32;
        let _ = card.style().set_property(
            "box-shadow",
            &card_glow_shadow(center_proximity(center, m.viewport_height)),
        );
    }

    if let Some(root) = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = root
            .style()
            .set_property("--dynamic-color", &dynamic_color(m.progress));
    }
}
