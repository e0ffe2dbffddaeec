use crate::dom;
use crate::state::SharedPage;
use nexus_core::{FrameHandle, FrameScheduler, RigKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` with one long-lived callback per rig.
pub struct RafScheduler {
    window: web::Window,
    callbacks: [FrameSlot; 3],
}

impl RafScheduler {
    fn new(window: web::Window) -> Self {
        Self {
            window,
            callbacks: Default::default(),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&self, rig: RigKind) -> Option<FrameHandle> {
        let slot = self.callbacks[rig.index()].borrow();
        let callback = slot.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel(&self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle);
    }
}

/// Start an independent loop for every mounted rig.
pub fn start_loops(window: &web::Window, page: &SharedPage) -> Rc<RafScheduler> {
    let scheduler = Rc::new(RafScheduler::new(window.clone()));
    for kind in RigKind::ALL {
        if page.borrow().rig(kind).is_none() {
            continue;
        }
        let page_tick = page.clone();
        let scheduler_tick = scheduler.clone();
        *scheduler.callbacks[kind.index()].borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let mut page = page_tick.borrow_mut();
            page.loops.on_frame(kind, &*scheduler_tick);
            page.frame(kind);
        }) as Box<dyn FnMut()>));
        page.borrow_mut().loops.start(kind, &*scheduler);
    }
    log::info!("{} render loops running", page.borrow().loops.running());
    scheduler
}

/// Stop every loop while the tab is hidden and restart them when it returns.
pub fn wire_visibility(document: &web::Document, page: &SharedPage, scheduler: &Rc<RafScheduler>) {
    let doc = document.clone();
    let page = page.clone();
    let scheduler = scheduler.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        let visible = !doc.hidden();
        let mut page = page.borrow_mut();
        page.loops.set_visible(visible, &*scheduler);
        if visible {
            log::info!("page visible, {} loops resumed", page.loops.running());
        } else {
            log::info!("page hidden, loops paused");
        }
    });
}

/// Keep every rig sized to its container.
pub fn wire_resize(window: &web::Window, page: &SharedPage) {
    let win = window.clone();
    let page = page.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let dpr = win.device_pixel_ratio();
        for rig in page.borrow_mut().rigs.iter_mut() {
            rig.sync_size(dpr);
        }
    });
}
