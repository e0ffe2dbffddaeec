use crate::constants::DEBUG_GLOBAL;
use crate::state::SharedPage;
use glam::Vec3;
use js_sys::{Array, Object, Reflect};
use nexus_core::PhoneSource;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Read-only view of the rigs, exposed as `window.NexusDebug`.
#[wasm_bindgen]
pub struct NexusDebug {
    page: SharedPage,
}

fn vec3(v: Vec3) -> Array {
    Array::of3(&v.x.into(), &v.y.into(), &v.z.into())
}

fn set(obj: &Object, key: &str, value: &JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), value);
}

#[wasm_bindgen]
impl NexusDebug {
    /// One snapshot per mounted rig: camera and phone pose.
    pub fn describe(&self) -> Array {
        let page = self.page.borrow();
        page.rigs
            .iter()
            .map(|rig| {
                let state = &rig.state;
                let obj = Object::new();
                set(&obj, "name", &state.kind().name().into());
                set(&obj, "fov", &state.camera.fovy_degrees.into());
                set(&obj, "aspect", &state.camera.aspect.into());
                set(&obj, "camera", &vec3(state.camera.eye));
                set(&obj, "hasPhone", &state.phone.is_some().into());
                if let Some(phone) = &state.phone {
                    set(&obj, "position", &vec3(phone.current.position));
                    set(&obj, "rotation", &vec3(phone.current.rotation));
                    set(&obj, "scale", &vec3(phone.current.scale));
                }
                JsValue::from(obj)
            })
            .collect()
    }

    #[wasm_bindgen(js_name = phoneSource)]
    pub fn phone_source(&self) -> String {
        match &self.page.borrow().phone_source {
            None => "pending".to_string(),
            Some(PhoneSource::Asset) => "asset".to_string(),
            Some(PhoneSource::Fallback(_)) => "fallback".to_string(),
        }
    }

    #[wasm_bindgen(js_name = scrollProgress)]
    pub fn scroll_progress(&self) -> f64 {
        self.page.borrow().scroll_progress
    }

    pub fn paused(&self) -> bool {
        self.page.borrow().loops.is_paused()
    }
}

pub fn install(window: &web::Window, page: &SharedPage) {
    let debug = NexusDebug { page: page.clone() };
    _ = Reflect::set(window, &JsValue::from_str(DEBUG_GLOBAL), &JsValue::from(debug));
}
