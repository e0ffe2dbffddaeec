//! Limited orbit controls for the hero camera: auto-rotation, damped drag,
//! clamped polar angle, no zoom and no pan.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitSettings {
    pub damping: f32,
    /// Revolutions per minute (speed 1.0 = one revolution every 60 s).
    pub auto_rotate_speed: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub rotate_speed: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            damping: 0.05,
            auto_rotate_speed: 0.5,
            min_polar: PI / 3.0,
            max_polar: PI / 1.5,
            rotate_speed: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitControls {
    pub settings: OrbitSettings,
    pub target: Vec3,
    radius: f32,
    /// Angle around +Y measured from +Z.
    azimuth: f32,
    /// Angle from +Y.
    polar: f32,
    delta_azimuth: f32,
    delta_polar: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3, settings: OrbitSettings) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(1e-4);
        let azimuth = offset.x.atan2(offset.z);
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        Self {
            settings,
            target,
            radius,
            azimuth,
            polar,
            delta_azimuth: 0.0,
            delta_polar: 0.0,
        }
    }

    /// Feed a pointer drag of `dx`/`dy` CSS pixels over an element `element_height` tall.
    pub fn drag(&mut self, dx: f32, dy: f32, element_height: f32) {
        if element_height <= 0.0 {
            return;
        }
        let k = TAU * self.settings.rotate_speed / element_height;
        self.delta_azimuth -= dx * k;
        self.delta_polar -= dy * k;
    }

    /// Advance by `dt_sec` and return the new eye position.
    pub fn update(&mut self, dt_sec: f32) -> Vec3 {
        self.delta_azimuth -= TAU / 60.0 * self.settings.auto_rotate_speed * dt_sec;

        let d = self.settings.damping;
        self.azimuth += self.delta_azimuth * d;
        self.polar += self.delta_polar * d;
        self.polar = self
            .polar
            .clamp(self.settings.min_polar, self.settings.max_polar);
        self.delta_azimuth *= 1.0 - d;
        self.delta_polar *= 1.0 - d;

        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let sin_p = self.polar.sin();
        self.target
            + Vec3::new(
                self.radius * sin_p * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                self.radius * sin_p * self.azimuth.cos(),
            )
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }
}
