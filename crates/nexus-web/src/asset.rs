use nexus_core::LoadError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Fetch `path` relative to the page and return its body. Network errors and
/// non-2xx responses both come back as `LoadError`.
pub async fn fetch_bytes(window: &web::Window, path: &str) -> Result<Vec<u8>, LoadError> {
    log::info!("fetching {}", path);
    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;
    let response: web::Response = response
        .dyn_into()
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }
    let body = response
        .array_buffer()
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| LoadError::Fetch(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&body).to_vec())
}
