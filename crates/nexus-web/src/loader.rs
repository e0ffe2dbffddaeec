use crate::constants::{HIDDEN_CLASS, LOADER_ID};
use crate::dom;
use nexus_core::constants::LOADER_HIDE_DELAY_MS;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(LOADER_ID)
        .map(|el| el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

/// Fade the loading overlay once every rig has its phone.
pub fn hide_after_delay(window: &web::Window, document: &web::Document) {
    if document.get_element_by_id(LOADER_ID).is_none() {
        return;
    }
    let document = document.clone();
    _ = dom::set_timeout(window, LOADER_HIDE_DELAY_MS, move || hide(&document));
}
