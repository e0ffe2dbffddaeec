//! Click and change handlers for the page's plain DOM controls.

use crate::constants::*;
use crate::dom;
use nexus_core::constants::{
    APP_LAUNCH_FADE_MS, APP_LAUNCH_VISIBLE_MS, ICON_PRESS_MS, PREORDER_REVERT_MS,
};
use nexus_core::storefront::{
    anchor_target_id, app_launch_background, app_title, PreorderButton, StorageOption, Theme,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Theme buttons: the clicked one becomes active and sets the phone screen's
/// theme.
pub fn wire_theme_toggle(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, THEME_BUTTON_SELECTOR));
    for button in buttons.iter() {
        let all = buttons.clone();
        let clicked = button.clone();
        let doc = document.clone();
        dom::listen(button, "click", move |_: web::MouseEvent| {
            for b in all.iter() {
                _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = clicked.class_list().add_1(ACTIVE_CLASS);

            let Ok(Some(screen)) = doc.query_selector(PHONE_SCREEN_SELECTOR) else {
                return;
            };
            let theme = Theme::from_data_attr(clicked.get_attribute("data-theme").as_deref());
            _ = match theme {
                Theme::Light => screen.class_list().add_1(LIGHT_THEME_CLASS),
                Theme::Dark => screen.class_list().remove_1(LIGHT_THEME_CLASS),
            };
        });
    }
}

/// Storage radios rewrite the price label.
pub fn wire_storage_selector(document: &web::Document) {
    for input in dom::query_all(document, STORAGE_INPUT_SELECTOR) {
        let doc = document.clone();
        let radio = input.clone();
        dom::listen(&input, "change", move |_: web::Event| {
            let Some(radio) = radio.dyn_ref::<web::HtmlInputElement>() else {
                return;
            };
            let Some(option) = StorageOption::from_value(&radio.value()) else {
                return;
            };
            if let Some(price) = doc.get_element_by_id(PRICE_DISPLAY_ID) {
                price.set_text_content(Some(&option.price_label()));
            }
        });
    }
}

/// Pre-order confirmation with a timed revert. A new click clears the pending
/// timer, and the label is only restored by the latest one.
pub fn wire_preorder(window: &web::Window, document: &web::Document) {
    let Some(el) = document.get_element_by_id(PREORDER_BUTTON_ID) else {
        return;
    };
    let original = el.text_content().unwrap_or_default();
    let button = Rc::new(RefCell::new(PreorderButton::new(original)));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let window = window.clone();
    let target = el.clone();

    dom::listen(&el, "click", move |_: web::MouseEvent| {
        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        let token = button.borrow_mut().click();
        target.set_text_content(Some(button.borrow().label()));
        _ = target.class_list().add_1(PREORDER_ADDED_CLASS);

        let button = button.clone();
        let target = target.clone();
        let handle = dom::set_timeout(&window, PREORDER_REVERT_MS, move || {
            let mut button = button.borrow_mut();
            if button.revert(token) {
                target.set_text_content(Some(button.label()));
                _ = target.class_list().remove_1(PREORDER_ADDED_CLASS);
            }
        });
        pending.set(handle);
    });
}

/// In-page links scroll smoothly to their target instead of jumping.
pub fn wire_anchors(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id)) else {
                return;
            };
            let options = web::ScrollIntoViewOptions::new();
            options.set_behavior(web::ScrollBehavior::Smooth);
            options.set_block(web::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

fn press(window: &web::Window, el: &web::Element, released: &'static str) {
    dom::set_style(el, "transform", PRESSED_TRANSFORM);
    let el = el.clone();
    _ = dom::set_timeout(window, ICON_PRESS_MS, move || {
        dom::set_style(&el, "transform", released);
    });
}

/// App icons on the demo phone: press feedback plus a short launch overlay.
pub fn wire_app_icons(window: &web::Window, document: &web::Document) {
    for icon in dom::query_all(document, APP_ICON_SELECTOR) {
        let win = window.clone();
        let doc = document.clone();
        let el = icon.clone();
        dom::listen(&icon, "click", move |_: web::MouseEvent| {
            if let Ok(Some(inner)) = el.query_selector(APP_ICON_INNER_SELECTOR) {
                press(&win, &inner, "scale(1)");
            }
            let app = el.get_attribute("data-app").unwrap_or_default();
            show_app_launch(&win, &doc, &app);
        });
    }
}

pub fn wire_dock_icons(window: &web::Window, document: &web::Document) {
    for icon in dom::query_all(document, DOCK_ICON_SELECTOR) {
        let win = window.clone();
        let el = icon.clone();
        dom::listen(&icon, "click", move |_: web::MouseEvent| press(&win, &el, ""));
    }
}

/// Overlay on the phone screen named after `app`; scales in, holds, fades out
/// and removes itself.
pub fn show_app_launch(window: &web::Window, document: &web::Document, app: &str) {
    let Ok(Some(screen)) = document.query_selector(PHONE_SCREEN_SELECTOR) else {
        return;
    };
    let Ok(overlay) = document.create_element("div") else {
        return;
    };
    overlay.set_class_name(APP_LAUNCH_CLASS);
    _ = overlay.set_attribute(
        "style",
        &format!("{}background:{};", APP_LAUNCH_STYLE, app_launch_background(app)),
    );
    overlay.set_text_content(Some(&app_title(app)));
    _ = screen.append_child(&overlay);

    let shown = overlay.clone();
    let animate_in = wasm_bindgen::closure::Closure::once_into_js(move || {
        dom::set_style(&shown, "opacity", "1");
        dom::set_style(&shown, "transform", "scale(1)");
    });
    _ = window.request_animation_frame(animate_in.unchecked_ref());

    let win = window.clone();
    _ = dom::set_timeout(window, APP_LAUNCH_VISIBLE_MS, move || {
        dom::set_style(&overlay, "opacity", "0");
        dom::set_style(&overlay, "transform", "scale(1.1)");
        _ = dom::set_timeout(&win, APP_LAUNCH_FADE_MS, move || overlay.remove());
    });
}
