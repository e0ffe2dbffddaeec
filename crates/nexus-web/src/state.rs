use crate::rig::SceneRig;
use instant::Instant;
use nexus_core::input::PointerTargets;
use nexus_core::{FrameInputs, LoopControl, PhoneSource, RigKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the page's callbacks share. Only rigs whose container exists
/// are present.
pub struct PageState {
    pub rigs: Vec<SceneRig>,
    pub pointer: PointerTargets,
    /// Last pitch written by the scroll handler for the display phone.
    pub display_tilt: Option<f32>,
    pub scroll_progress: f64,
    /// `None` while the asset request is in flight.
    pub phone_source: Option<PhoneSource>,
    pub loops: LoopControl,
    clock: Instant,
}

pub type SharedPage = Rc<RefCell<PageState>>;

impl PageState {
    pub fn new(rigs: Vec<SceneRig>) -> Self {
        Self {
            rigs,
            pointer: PointerTargets::default(),
            display_tilt: None,
            scroll_progress: 0.0,
            phone_source: None,
            loops: LoopControl::new(),
            clock: Instant::now(),
        }
    }

    pub fn into_shared(self) -> SharedPage {
        Rc::new(RefCell::new(self))
    }

    pub fn rig(&self, kind: RigKind) -> Option<&SceneRig> {
        self.rigs.iter().find(|r| r.kind() == kind)
    }

    pub fn rig_mut(&mut self, kind: RigKind) -> Option<&mut SceneRig> {
        self.rigs.iter_mut().find(|r| r.kind() == kind)
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed().as_secs_f32()
    }

    /// Advance one rig's animator and draw it.
    pub fn frame(&mut self, kind: RigKind) {
        let inputs = FrameInputs {
            elapsed: self.elapsed(),
            pointer: self.pointer,
            tilt: match kind {
                RigKind::Display => self.display_tilt,
                _ => None,
            },
        };
        if let Some(rig) = self.rig_mut(kind) {
            rig.state.advance(&inputs);
            rig.draw();
        }
    }
}
