pub mod page;
pub mod pointer;
pub mod scroll;

pub use page::{
    wire_anchors, wire_app_icons, wire_dock_icons, wire_preorder, wire_storage_selector,
    wire_theme_toggle,
};
pub use pointer::{wire_hero_orbit, wire_pointer_follow};
pub use scroll::{wire_reveals, wire_scroll};

use crate::state::SharedPage;
use web_sys as web;

/// Register every page handler. Elements missing from the page are skipped.
pub fn wire_all(window: &web::Window, document: &web::Document, page: &SharedPage) {
    wire_pointer_follow(window, document, page);
    wire_hero_orbit(page);
    wire_scroll(window, document, page);
    wire_reveals(document);
    wire_theme_toggle(document);
    wire_storage_selector(document);
    wire_preorder(window, document);
    wire_anchors(document);
    wire_app_icons(window, document);
    wire_dock_icons(window, document);
}
