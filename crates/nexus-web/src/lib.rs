#![cfg(target_arch = "wasm32")]
use nexus_core::constants::PHONE_ASSET_PATH;
use nexus_core::{acquire_phone, RigKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod asset;
pub mod constants;
pub mod debug;
pub mod dom;
pub mod events;
pub mod frame;
pub mod loader;
pub mod render;
pub mod rig;
pub mod state;

use render::{texture, GpuContext, RigRenderer};
use rig::SceneRig;
use state::{PageState, SharedPage};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nexus-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) =
        dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let rigs: Vec<SceneRig> = RigKind::ALL
        .iter()
        .filter_map(|kind| SceneRig::mount(&window, &document, *kind))
        .collect();
    let canvases: Vec<web::HtmlCanvasElement> = rigs.iter().map(|r| r.canvas.clone()).collect();
    let page = PageState::new(rigs).into_shared();

    // page controls work even if WebGPU never comes up
    events::wire_all(&window, &document, &page);
    frame::wire_resize(&window, &page);
    debug::install(&window, &page);

    if !canvases.is_empty() {
        match GpuContext::new(&canvases).await {
            Ok((gpu, surfaces)) => {
                for (rig, surface) in page.borrow_mut().rigs.iter_mut().zip(surfaces) {
                    let (w, h) = rig.state.viewport.backing_size();
                    rig.renderer = Some(RigRenderer::new(gpu.clone(), surface, w, h));
                }
            }
            Err(e) => log::error!("WebGPU unavailable: {:?}", e),
        }
    }

    let scheduler = frame::start_loops(&window, &page);
    frame::wire_visibility(&document, &page, &scheduler);

    load_phone(&window, &document, &page).await;
    log::info!("3D experience initialized");
    Ok(())
}

/// Fetch the phone once, fall back to the procedural one on any failure and
/// give every rig its own copy.
async fn load_phone(window: &web::Window, document: &web::Document, page: &SharedPage) {
    let acquired = acquire_phone(asset::fetch_bytes(window, PHONE_ASSET_PATH).await);

    let painted: Vec<Option<texture::Pixels>> = acquired
        .model
        .parts
        .iter()
        .map(|part| {
            let source = part.material.texture.as_ref()?;
            texture::paint(document, source)
                .map_err(|e| log::warn!("{} texture not drawn: {:?}", part.name, e))
                .ok()
        })
        .collect();

    {
        let mut page = page.borrow_mut();
        for rig in page.rigs.iter_mut() {
            rig.state.attach_phone(acquired.model.base_scale);
            if let Some(renderer) = &mut rig.renderer {
                renderer.upload_phone(&acquired.model, &painted);
            }
        }
        page.phone_source = Some(acquired.source);
    }
    loader::hide_after_delay(window, document);
}
