use crate::dom;
use crate::state::SharedPage;
use nexus_core::input::PointerTargets;
use nexus_core::RigKind;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

#[inline]
fn inner_size(window: &web::Window) -> (f32, f32) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w as f32, h as f32)
}

/// Pointer position over the whole window drives the hero phone's rotation
/// targets.
pub fn wire_pointer_follow(window: &web::Window, document: &web::Document, page: &SharedPage) {
    let window = window.clone();
    let page = page.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = inner_size(&window);
        page.borrow_mut().pointer =
            PointerTargets::from_client(ev.client_x() as f32, ev.client_y() as f32, w, h);
    });
}

/// Dragging on the hero canvas orbits its camera.
pub fn wire_hero_orbit(page: &SharedPage) {
    let Some(canvas) = page.borrow().rig(RigKind::Hero).map(|r| r.canvas.clone()) else {
        return;
    };
    let last: Rc<Cell<Option<(i32, i32)>>> = Rc::new(Cell::new(None));

    {
        let last = last.clone();
        let target = canvas.clone();
        dom::listen(&canvas, "pointerdown", move |ev: web::PointerEvent| {
            last.set(Some((ev.client_x(), ev.client_y())));
            _ = target.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let last = last.clone();
        let target = canvas.clone();
        let page = page.clone();
        dom::listen(&canvas, "pointermove", move |ev: web::PointerEvent| {
            let Some((x0, y0)) = last.get() else {
                return;
            };
            let (x, y) = (ev.client_x(), ev.client_y());
            last.set(Some((x, y)));
            let height = target.client_height() as f32;
            let mut page = page.borrow_mut();
            if let Some(orbit) = page.rig_mut(RigKind::Hero).and_then(|r| r.state.orbit.as_mut()) {
                orbit.drag((x - x0) as f32, (y - y0) as f32, height);
            }
        });
    }
    for event in ["pointerup", "pointercancel"] {
        let last = last.clone();
        dom::listen(&canvas, event, move |_: web::PointerEvent| last.set(None));
    }
}
