#![cfg(target_arch = "wasm32")]

use nexus_core::constants::SECTION_HIDDEN_TRANSFORM;
use nexus_core::storefront::PREORDER_CONFIRMATION;
use nexus_core::RigKind;
use nexus_web::events::{page, scroll};
use nexus_web::rig::SceneRig;
use nexus_web::state::PageState;
use nexus_web::{debug, frame, loader};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn window_document() -> (web::Window, web::Document) {
    let window = web::window().unwrap();
    let document = window.document().unwrap();
    (window, document)
}

/// Fixture markup in a fresh container; remove it at the end of the test.
fn mount(html: &str) -> web::Element {
    let (_, document) = window_document();
    let root = document.create_element("div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

async fn sleep(ms: i32) {
    let (window, _) = window_document();
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn style_of(document: &web::Document, selector: &str, property: &str) -> String {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web::HtmlElement>()
        .unwrap()
        .style()
        .get_property_value(property)
        .unwrap()
}

fn dispatch(target: &web::EventTarget, event: &str) {
    target.dispatch_event(&web::Event::new(event).unwrap()).unwrap();
}

/// Shadow `document.hidden` with a plain value until `None` restores it.
fn fake_hidden(document: &web::Document, hidden: Option<bool>) {
    let doc: &js_sys::Object = document.unchecked_ref();
    let Some(hidden) = hidden else {
        js_sys::Reflect::delete_property(doc, &"hidden".into()).unwrap();
        return;
    };
    let descriptor = js_sys::Object::new();
    js_sys::Reflect::set(&descriptor, &"value".into(), &hidden.into()).unwrap();
    js_sys::Reflect::set(&descriptor, &"configurable".into(), &true.into()).unwrap();
    js_sys::Object::define_property(doc, &"hidden".into(), &descriptor);
}

fn debug_call(window: &web::Window, method: &str) -> wasm_bindgen::JsValue {
    let global = js_sys::Reflect::get(window, &"NexusDebug".into()).unwrap();
    let f: js_sys::Function = js_sys::Reflect::get(&global, &method.into())
        .unwrap()
        .dyn_into()
        .unwrap();
    f.call0(&global).unwrap()
}

fn click(document: &web::Document, selector: &str) {
    document
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web::HtmlElement>()
        .unwrap()
        .click();
}

#[wasm_bindgen_test]
fn storage_choice_rewrites_the_price() {
    let (_, document) = window_document();
    let root = mount(
        r#"<span id="price-display">$1,199</span>
           <input type="radio" name="storage" value="256" checked>
           <input type="radio" name="storage" value="512">
           <input type="radio" name="storage" value="1024">
           <input type="radio" name="storage" value="64">"#,
    );
    page::wire_storage_selector(&document);

    let price = || document.get_element_by_id("price-display").unwrap().text_content().unwrap();
    for (value, expected) in [("1024", "$1,599"), ("512", "$1,399"), ("256", "$1,199"), ("64", "$1,199")] {
        click(&document, &format!("input[name=\"storage\"][value=\"{}\"]", value));
        assert_eq!(price(), expected);
    }
    root.remove();
}

#[wasm_bindgen_test]
async fn preorder_confirms_then_reverts_once() {
    let (window, document) = window_document();
    let root = mount(r#"<button id="preorder-btn">Pre-order Now</button>"#);
    page::wire_preorder(&window, &document);

    let button = document.get_element_by_id("preorder-btn").unwrap();
    click(&document, "#preorder-btn");
    sleep(700).await;
    click(&document, "#preorder-btn");
    assert_eq!(button.text_content().unwrap(), PREORDER_CONFIRMATION);
    assert!(button.class_list().contains("added"));

    // first timer would have fired here; the second click restarted it
    sleep(1000).await;
    assert_eq!(button.text_content().unwrap(), PREORDER_CONFIRMATION);

    sleep(700).await;
    assert_eq!(button.text_content().unwrap(), "Pre-order Now");
    assert!(!button.class_list().contains("added"));
    root.remove();
}

#[wasm_bindgen_test]
async fn in_page_links_scroll_without_navigating() {
    let (window, document) = window_document();
    window.scroll_to_with_x_and_y(0.0, 0.0);
    let root = mount(
        r##"<a id="to-specs" href="#specs-fixture">Specs</a>
            <a id="to-nowhere" href="#missing-fixture">Nowhere</a>
            <div style="height: 3000px"></div>
            <section id="specs-fixture">specs</section>
            <div style="height: 3000px"></div>"##,
    );
    page::wire_anchors(&document);
    let before = window.location().hash().unwrap();
    let target = document.get_element_by_id("specs-fixture").unwrap();
    let start_top = target.get_bounding_client_rect().top();

    click(&document, "#to-nowhere");
    sleep(300).await;
    assert_eq!(target.get_bounding_client_rect().top(), start_top);

    click(&document, "#to-specs");
    sleep(1500).await;
    assert_eq!(window.location().hash().unwrap(), before);
    assert!(window.scroll_y().unwrap() > 0.0);
    assert!(target.get_bounding_client_rect().top().abs() < 2.0);

    root.remove();
    window.scroll_to_with_x_and_y(0.0, 0.0);
}

#[wasm_bindgen_test]
fn theme_buttons_switch_the_phone_screen() {
    let (_, document) = window_document();
    let root = mount(
        r#"<div class="phone-screen"></div>
           <button class="control-btn active" id="dark-btn" data-theme="dark">Dark</button>
           <button class="control-btn" id="light-btn" data-theme="light">Light</button>"#,
    );
    page::wire_theme_toggle(&document);
    let screen = document.query_selector(".phone-screen").unwrap().unwrap();

    click(&document, "#light-btn");
    assert!(screen.class_list().contains("light-theme"));
    assert!(document.get_element_by_id("light-btn").unwrap().class_list().contains("active"));
    assert!(!document.get_element_by_id("dark-btn").unwrap().class_list().contains("active"));

    click(&document, "#dark-btn");
    assert!(!screen.class_list().contains("light-theme"));
    root.remove();
}

#[wasm_bindgen_test]
async fn app_launch_overlay_shows_then_removes_itself() {
    let (window, document) = window_document();
    let root = mount(r#"<div class="phone-screen"></div>"#);
    page::show_app_launch(&window, &document, "weather");

    let overlay = document.query_selector(".app-launch-overlay").unwrap().unwrap();
    assert_eq!(overlay.text_content().unwrap(), "Weather");

    sleep(1500).await;
    assert!(document.query_selector(".app-launch-overlay").unwrap().is_none());
    root.remove();
}

#[wasm_bindgen_test]
fn loader_gets_hidden() {
    let (_, document) = window_document();
    let root = mount(r#"<div id="loader"></div>"#);
    assert!(!loader::is_hidden(&document));
    loader::hide(&document);
    assert!(loader::is_hidden(&document));
    root.remove();
}

#[wasm_bindgen_test]
fn debug_global_reports_pending_phone() {
    let (window, _) = window_document();
    let page = PageState::new(Vec::new()).into_shared();
    debug::install(&window, &page);

    let global = js_sys::Reflect::get(&window, &"NexusDebug".into()).unwrap();
    let phone_source: js_sys::Function = js_sys::Reflect::get(&global, &"phoneSource".into())
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(phone_source.call0(&global).unwrap().as_string().unwrap(), "pending");

    let describe: js_sys::Function = js_sys::Reflect::get(&global, &"describe".into())
        .unwrap()
        .dyn_into()
        .unwrap();
    let rigs: js_sys::Array = describe.call0(&global).unwrap().dyn_into().unwrap();
    assert_eq!(rigs.length(), 0);
}

#[wasm_bindgen_test]
async fn reveals_start_hidden_and_show_on_intersection() {
    let (_, document) = window_document();
    let root = mount(
        r#"<div class="feature-card" style="position: fixed; top: 0; left: 0; width: 200px; height: 100px">card</div>
           <div class="features-header" style="position: fixed; top: 120px; left: 0; width: 200px; height: 100px">header</div>"#,
    );
    scroll::wire_reveals(&document);

    assert_eq!(style_of(&document, ".features-header", "opacity"), "0");
    assert_eq!(style_of(&document, ".features-header", "transform"), SECTION_HIDDEN_TRANSFORM);
    assert!(!style_of(&document, ".features-header", "transition").is_empty());

    sleep(500).await;
    let card = document.query_selector(".feature-card").unwrap().unwrap();
    assert!(card.class_list().contains("visible"));
    assert_eq!(style_of(&document, ".features-header", "opacity"), "1");
    assert_ne!(style_of(&document, ".features-header", "transform"), SECTION_HIDDEN_TRANSFORM);
    root.remove();
}

#[wasm_bindgen_test]
fn display_tilt_waits_for_the_display_phone() {
    let (window, document) = window_document();

    // no display rig at all
    let bare = PageState::new(Vec::new()).into_shared();
    scroll::wire_scroll(&window, &document, &bare);

    let root = mount(
        r#"<div id="display-phone" style="width: 200px; height: 100px"></div>
           <section id="display" style="position: fixed; top: 10px; height: 50px">display</section>"#,
    );
    let rig = SceneRig::mount(&window, &document, RigKind::Display).unwrap();
    let page = PageState::new(vec![rig]).into_shared();
    scroll::wire_scroll(&window, &document, &page);

    dispatch(&window, "scroll");
    assert_eq!(bare.borrow().display_tilt, None);
    assert_eq!(page.borrow().display_tilt, None);
    let progress = page.borrow().scroll_progress;
    assert!((0.0..=1.0).contains(&progress));

    page.borrow_mut()
        .rig_mut(RigKind::Display)
        .unwrap()
        .state
        .attach_phone(1.0);
    dispatch(&window, "scroll");
    assert!(page.borrow().display_tilt.is_some());
    assert_eq!(bare.borrow().display_tilt, None);
    root.remove();
}

#[wasm_bindgen_test]
fn hidden_tab_pauses_every_loop_until_it_returns() {
    let (window, document) = window_document();
    let root = mount(r#"<div id="hero-canvas" style="width: 200px; height: 100px"></div>"#);
    let rig = SceneRig::mount(&window, &document, RigKind::Hero).unwrap();
    let page = PageState::new(vec![rig]).into_shared();
    debug::install(&window, &page);
    let scheduler = frame::start_loops(&window, &page);
    frame::wire_visibility(&document, &page, &scheduler);
    assert_eq!(page.borrow().loops.running(), 1);
    assert_eq!(debug_call(&window, "paused").as_bool(), Some(false));

    fake_hidden(&document, Some(true));
    dispatch(&document, "visibilitychange");
    assert_eq!(debug_call(&window, "paused").as_bool(), Some(true));
    assert_eq!(page.borrow().loops.running(), 0);

    fake_hidden(&document, Some(false));
    dispatch(&document, "visibilitychange");
    dispatch(&document, "visibilitychange");
    assert_eq!(debug_call(&window, "paused").as_bool(), Some(false));
    assert_eq!(page.borrow().loops.running(), 1);

    fake_hidden(&document, None);
    page.borrow_mut().loops.pause(&*scheduler);
    root.remove();
}
