#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use synapse_core::{EffectConfig, SynapseEffect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod counter;
mod dom;
mod events;
mod frame;
mod scroll;
mod surface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("synapse-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Defaults, with optional overrides from `data-*` attributes on the container.
fn config_from_container(container: &web::Element) -> EffectConfig {
    let mut cfg = EffectConfig::default();
    if let Some(raw) = container.get_attribute("data-emit-interval-ms") {
        match raw.trim().parse::<u64>() {
            Ok(ms) => cfg.emit_interval = Duration::from_millis(ms),
            Err(e) => log::warn!("[config] ignoring data-emit-interval-ms={:?}: {}", raw, e),
        }
    }
    if let Some(raw) = container.get_attribute("data-smoothing") {
        match raw.trim().parse::<f32>() {
            Ok(v) => cfg.smoothing = v,
            Err(e) => log::warn!("[config] ignoring data-smoothing={:?}: {}", raw, e),
        }
    }
    if let Err(e) = cfg.validate() {
        log::warn!("[config] {}; using defaults", e);
        return EffectConfig::default();
    }
    cfg
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::dom_ready(&document).await?;

    // The progress bar does not depend on the cursor markup being present.
    let bar = scroll::create_progress_bar(&document)?;
    scroll::wire_scroll_effects(&window, &document, bar);

    let cursor = dom::html_element_by_id(&document, "customCursor")?;
    let container = document
        .get_element_by_id("synapseContainer")
        .ok_or_else(|| anyhow::anyhow!("missing #synapseContainer"))?;
    let config = config_from_container(&container);
    log::info!(
        "[synapse] emit every {:?}, smoothing {:.2}",
        config.emit_interval,
        config.smoothing
    );

    let surface = surface::DomSurface::new(document.clone(), container, cursor);
    let mut effect = SynapseEffect::new(config, surface, StdRng::from_entropy())?;
    effect.start();
    let effect = Rc::new(RefCell::new(effect));

    events::wire_pointer_handlers(&document, &effect);
    let counters = counter::observe_counters(&document)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        effect,
        counters,
        loop_active: false,
    }));
    frame::wire_page_lifecycle(&window, &frame_ctx);
    frame::start_loop(frame_ctx);

    Ok(())
}
