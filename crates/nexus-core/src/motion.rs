//! Per-frame transform formulas for the phone in each rig.
//!
//! Each profile derives a target transform from elapsed time (plus pointer and
//! scroll input where relevant) and blends the current transform towards it.
//! A blend factor of 1 snaps straight to the target.

use crate::input::PointerTargets;
use crate::transform::{lerp, Transform};

/// Inputs shared by all animators for one frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInputs {
    /// Seconds since the page clock started.
    pub elapsed: f32,
    pub pointer: PointerTargets,
    /// Pitch override set by the scroll handler for the display rig.
    pub tilt: Option<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Floats up and down and turns towards the pointer.
    PointerFollow {
        bob_speed: f32,
        bob_amplitude: f32,
        pointer_gain: f32,
        rotation_blend: f32,
    },
    /// Sways around the resting yaw; pitch follows the scroll tilt.
    Oscillate {
        sway_speed: f32,
        sway_amplitude: f32,
        bob_speed: f32,
        bob_amplitude: f32,
    },
    /// Continuous yaw spin with a gentle bob.
    Spin {
        spin_speed: f32,
        bob_speed: f32,
        bob_amplitude: f32,
    },
}

impl Motion {
    /// Target transform for this frame. `rest` holds the resting pose the
    /// phone was attached with, `current` the pose left by the last frame.
    pub fn target(&self, rest: &Transform, current: &Transform, inputs: &FrameInputs) -> Transform {
        let t = inputs.elapsed;
        let mut target = *current;
        match *self {
            Motion::PointerFollow {
                bob_speed,
                bob_amplitude,
                pointer_gain,
                ..
            } => {
                target.position.y = rest.position.y + (t * bob_speed).sin() * bob_amplitude;
                target.rotation.x = rest.rotation.x + inputs.pointer.rotation_y * pointer_gain;
                target.rotation.y = rest.rotation.y + inputs.pointer.rotation_x * pointer_gain;
            }
            Motion::Oscillate {
                sway_speed,
                sway_amplitude,
                bob_speed,
                bob_amplitude,
            } => {
                target.rotation.y = rest.rotation.y + (t * sway_speed).sin() * sway_amplitude;
                target.position.y = rest.position.y + (t * bob_speed).sin() * bob_amplitude;
                if let Some(tilt) = inputs.tilt {
                    target.rotation.x = tilt;
                }
            }
            Motion::Spin {
                spin_speed,
                bob_speed,
                bob_amplitude,
            } => {
                target.rotation.y = t * spin_speed;
                target.position.y = rest.position.y + (t * bob_speed).sin() * bob_amplitude;
            }
        }
        target
    }

    #[inline]
    fn rotation_blend(&self) -> f32 {
        match *self {
            Motion::PointerFollow { rotation_blend, .. } => rotation_blend,
            _ => 1.0,
        }
    }

    /// Advance `current` one frame towards this profile's target.
    pub fn step(&self, rest: &Transform, current: &mut Transform, inputs: &FrameInputs) {
        let target = self.target(rest, current, inputs);
        let k = self.rotation_blend();
        current.rotation.x = lerp(current.rotation.x, target.rotation.x, k);
        current.rotation.y = lerp(current.rotation.y, target.rotation.y, k);
        current.rotation.z = lerp(current.rotation.z, target.rotation.z, k);
        current.position = target.position;
        current.scale = target.scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::f32::consts::FRAC_PI_6;

    fn hero() -> Motion {
        Motion::PointerFollow {
            bob_speed: 0.5,
            bob_amplitude: 0.1,
            pointer_gain: 0.3,
            rotation_blend: 0.05,
        }
    }

    #[test]
    fn pointer_follow_eases_towards_target() {
        let rest = Transform::IDENTITY.with_rotation(Vec3::new(0.0, FRAC_PI_6, 0.0));
        let mut cur = rest;
        let inputs = FrameInputs {
            elapsed: 0.0,
            pointer: PointerTargets {
                rotation_x: 1.0,
                ..Default::default()
            },
            tilt: None,
        };
        hero().step(&rest, &mut cur, &inputs);
        // 5% of the way to rest + 0.3
        assert!((cur.rotation.y - (FRAC_PI_6 + 0.015)).abs() < 1e-6);
        for _ in 0..500 {
            hero().step(&rest, &mut cur, &inputs);
        }
        assert!((cur.rotation.y - (FRAC_PI_6 + 0.3)).abs() < 1e-4);
    }

    #[test]
    fn spin_is_linear_in_time() {
        let m = Motion::Spin {
            spin_speed: 0.2,
            bob_speed: 0.5,
            bob_amplitude: 0.08,
        };
        let rest = Transform::IDENTITY;
        let mut cur = rest;
        let inputs = FrameInputs {
            elapsed: 10.0,
            ..Default::default()
        };
        m.step(&rest, &mut cur, &inputs);
        assert!((cur.rotation.y - 2.0).abs() < 1e-6);
        assert!((cur.position.y - 5.0f32.sin() * 0.08).abs() < 1e-6);
    }

    #[test]
    fn oscillate_keeps_last_tilt_when_none_is_given() {
        let m = Motion::Oscillate {
            sway_speed: 0.3,
            sway_amplitude: 0.2,
            bob_speed: 0.4,
            bob_amplitude: 0.05,
        };
        let rest = Transform::IDENTITY;
        let mut cur = rest;
        let mut inputs = FrameInputs {
            elapsed: 1.0,
            tilt: Some(0.12),
            ..Default::default()
        };
        m.step(&rest, &mut cur, &inputs);
        assert!((cur.rotation.x - 0.12).abs() < 1e-6);
        inputs.tilt = None;
        m.step(&rest, &mut cur, &inputs);
        assert!((cur.rotation.x - 0.12).abs() < 1e-6);
    }
}
