//! A scene rig in the page: its container, its canvas, the per-rig state from
//! `nexus_core` and, once WebGPU is up, its renderer.

use crate::dom;
use crate::render::RigRenderer;
use nexus_core::{RigKind, RigState};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct SceneRig {
    pub state: RigState,
    pub container: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Option<RigRenderer>,
}

impl SceneRig {
    /// Create the rig's canvas inside its container. `None` when the page has
    /// no container for this rig.
    pub fn mount(window: &web::Window, document: &web::Document, kind: RigKind) -> Option<Self> {
        let container = document.get_element_by_id(kind.container_id())?;
        let canvas: web::HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        _ = canvas.set_attribute("data-rig", kind.name());
        _ = container.append_child(&canvas);

        let (width, height) = dom::client_size(&container);
        let state = RigState::new(kind.config(), width.max(1), height.max(1), window.device_pixel_ratio());
        dom::sync_canvas_backing_size(
            &canvas,
            (state.viewport.css_width, state.viewport.css_height),
            state.viewport.backing_size(),
        );
        Some(Self {
            state,
            container,
            canvas,
            renderer: None,
        })
    }

    pub fn kind(&self) -> RigKind {
        self.state.kind()
    }

    /// Match the canvas, camera and surface to the container's current size.
    pub fn sync_size(&mut self, device_pixel_ratio: f64) {
        let (width, height) = dom::client_size(&self.container);
        if !self.state.resize(width, height, device_pixel_ratio) {
            return;
        }
        let backing = self.state.viewport.backing_size();
        dom::sync_canvas_backing_size(&self.canvas, (width, height), backing);
        if let Some(renderer) = &mut self.renderer {
            renderer.resize_if_needed(backing.0, backing.1);
        }
    }

    /// Draw the current state. Lost or outdated surfaces are reconfigured and
    /// picked up again on the next frame.
    pub fn draw(&mut self) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };
        match renderer.render(&self.state) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("{} render error: {:?}", self.kind().name(), e),
        }
    }
}
