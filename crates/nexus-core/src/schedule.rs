//! Bookkeeping for the three per-rig frame loops.
//!
//! The browser hands out an integer handle for every pending animation frame.
//! `LoopControl` remembers at most one pending handle per rig so pausing can
//! cancel exactly what is queued and resuming never stacks a second loop on
//! top of one that is still running.

use crate::rig::RigKind;

pub type FrameHandle = i32;

/// Source of frame callbacks (`requestAnimationFrame` in the browser).
pub trait FrameScheduler {
    /// Queue the next frame for `rig`; `None` if the platform refused.
    fn schedule(&self, rig: RigKind) -> Option<FrameHandle>;
    fn cancel(&self, handle: FrameHandle);
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoopControl {
    pending: [Option<FrameHandle>; 3],
    enabled: [bool; 3],
    paused: bool,
}

impl LoopControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the loop for `rig` unless it already has a frame queued.
    pub fn start(&mut self, rig: RigKind, scheduler: &impl FrameScheduler) {
        self.enabled[rig.index()] = true;
        if !self.paused {
            self.ensure_scheduled(rig, scheduler);
        }
    }

    /// Called at the top of a frame callback: the handle that fired is spent,
    /// queue the next one while the page is visible.
    pub fn on_frame(&mut self, rig: RigKind, scheduler: &impl FrameScheduler) {
        self.pending[rig.index()] = None;
        if !self.paused && self.enabled[rig.index()] {
            self.ensure_scheduled(rig, scheduler);
        }
    }

    /// Cancel every queued frame.
    pub fn pause(&mut self, scheduler: &impl FrameScheduler) {
        self.paused = true;
        for slot in self.pending.iter_mut() {
            if let Some(handle) = slot.take() {
                scheduler.cancel(handle);
            }
        }
    }

    /// Restart every enabled loop that has nothing queued. Calling this while
    /// already running is a no-op.
    pub fn resume(&mut self, scheduler: &impl FrameScheduler) {
        self.paused = false;
        for rig in RigKind::ALL {
            if self.enabled[rig.index()] {
                self.ensure_scheduled(rig, scheduler);
            }
        }
    }

    pub fn set_visible(&mut self, visible: bool, scheduler: &impl FrameScheduler) {
        if visible {
            self.resume(scheduler);
        } else {
            self.pause(scheduler);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of loops with a frame queued right now.
    pub fn running(&self) -> usize {
        self.pending.iter().filter(|h| h.is_some()).count()
    }

    pub fn pending(&self, rig: RigKind) -> Option<FrameHandle> {
        self.pending[rig.index()]
    }

    fn ensure_scheduled(&mut self, rig: RigKind, scheduler: &impl FrameScheduler) {
        let slot = &mut self.pending[rig.index()];
        if slot.is_none() {
            *slot = scheduler.schedule(rig);
        }
    }
}
