//! Scene rig presets and the per-rig state passed to bootstrap, animation and
//! resize code.

use crate::camera::Camera;
use crate::constants::{MAX_FRAME_DT_SEC, MAX_PIXEL_RATIO};
use crate::lighting::Light;
use crate::motion::{FrameInputs, Motion};
use crate::orbit::{OrbitControls, OrbitSettings};
use crate::transform::Transform;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_4, FRAC_PI_6};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RigKind {
    Hero,
    Display,
    Cta,
}

impl RigKind {
    pub const ALL: [RigKind; 3] = [RigKind::Hero, RigKind::Display, RigKind::Cta];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            RigKind::Hero => 0,
            RigKind::Display => 1,
            RigKind::Cta => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RigKind::Hero => "hero",
            RigKind::Display => "display",
            RigKind::Cta => "cta",
        }
    }

    /// Id of the DOM element the rig's canvas is appended to.
    pub fn container_id(self) -> &'static str {
        match self {
            RigKind::Hero => "hero-canvas",
            RigKind::Display => "display-phone",
            RigKind::Cta => "cta-canvas",
        }
    }

    pub fn config(self) -> RigConfig {
        match self {
            RigKind::Hero => RigConfig::hero(),
            RigKind::Display => RigConfig::display(),
            RigKind::Cta => RigConfig::cta(),
        }
    }
}

/// Static description of one rig.
#[derive(Clone, Debug, PartialEq)]
pub struct RigConfig {
    pub kind: RigKind,
    pub fov_degrees: f32,
    pub camera_position: Vec3,
    pub exposure: f32,
    pub lights: Vec<Light>,
    /// Pose the phone clone is attached with.
    pub rest_rotation: Vec3,
    pub rest_scale: f32,
    pub motion: Motion,
    pub orbit: Option<OrbitSettings>,
}

impl RigConfig {
    pub fn hero() -> Self {
        Self {
            kind: RigKind::Hero,
            fov_degrees: 45.0,
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            exposure: 1.2,
            lights: vec![
                Light::ambient(0xffffff, 0.4),
                // key (warm accent)
                Light::directional(0xf5a623, 1.5, Vec3::new(5.0, 5.0, 5.0)),
                // fill (cool)
                Light::directional(0x00d4ff, 0.8, Vec3::new(-5.0, 3.0, 2.0)),
                // rim
                Light::directional(0xffffff, 0.6, Vec3::new(0.0, -3.0, -5.0)),
                Light::point(0xf5a623, 2.0, 10.0, Vec3::new(2.0, 2.0, 3.0)),
                Light::point(0x00d4ff, 1.5, 10.0, Vec3::new(-2.0, -1.0, 3.0)),
            ],
            rest_rotation: Vec3::new(0.0, FRAC_PI_6, 0.0),
            rest_scale: 1.0,
            motion: Motion::PointerFollow {
                bob_speed: 0.5,
                bob_amplitude: 0.1,
                pointer_gain: 0.3,
                rotation_blend: 0.05,
            },
            orbit: Some(OrbitSettings::default()),
        }
    }

    pub fn display() -> Self {
        Self {
            kind: RigKind::Display,
            fov_degrees: 50.0,
            camera_position: Vec3::new(0.0, 0.0, 4.0),
            exposure: 1.0,
            lights: vec![
                Light::ambient(0xffffff, 0.5),
                Light::directional(0x00d4ff, 1.2, Vec3::new(0.0, 0.0, 5.0)),
                Light::directional(0xffffff, 0.8, Vec3::new(0.0, 5.0, 2.0)),
                Light::directional(0xf5a623, 0.6, Vec3::new(5.0, 0.0, 0.0)),
            ],
            rest_rotation: Vec3::ZERO,
            rest_scale: 1.0,
            motion: Motion::Oscillate {
                sway_speed: 0.3,
                sway_amplitude: 0.2,
                bob_speed: 0.4,
                bob_amplitude: 0.05,
            },
            orbit: None,
        }
    }

    pub fn cta() -> Self {
        Self {
            kind: RigKind::Cta,
            fov_degrees: 45.0,
            camera_position: Vec3::new(2.0, 1.0, 4.0),
            exposure: 1.0,
            lights: vec![
                Light::ambient(0xffffff, 0.4),
                Light::directional(0xf5a623, 1.5, Vec3::new(3.0, 3.0, 5.0)),
                Light::directional(0x00d4ff, 1.0, Vec3::new(-3.0, 2.0, 3.0)),
                // back glow
                Light::point(0xf5a623, 2.0, 10.0, Vec3::new(0.0, 0.0, -3.0)),
            ],
            rest_rotation: Vec3::new(0.0, -FRAC_PI_4, 0.0),
            rest_scale: 1.0,
            motion: Motion::Spin {
                spin_speed: 0.2,
                bob_speed: 0.5,
                bob_amplitude: 0.08,
            },
            orbit: None,
        }
    }
}

/// Size of the rig's drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// CSS size, always equal to the container's client size.
    pub css_width: u32,
    pub css_height: u32,
    pub pixel_ratio: f64,
}

impl Viewport {
    pub fn new(css_width: u32, css_height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            css_width,
            css_height,
            pixel_ratio: clamp_pixel_ratio(device_pixel_ratio),
        }
    }

    /// Backing-store size in physical pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width as f64 * self.pixel_ratio).round() as u32;
        let h = (self.css_height as f64 * self.pixel_ratio).round() as u32;
        (w.max(1), h.max(1))
    }
}

#[inline]
pub fn clamp_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Phone clone owned by a rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhoneInstance {
    pub rest: Transform,
    pub current: Transform,
}

/// Everything one rig needs between frames.
#[derive(Clone, Debug)]
pub struct RigState {
    pub config: RigConfig,
    pub camera: Camera,
    pub viewport: Viewport,
    pub phone: Option<PhoneInstance>,
    pub orbit: Option<OrbitControls>,
    last_elapsed: Option<f32>,
}

impl RigState {
    pub fn new(config: RigConfig, css_width: u32, css_height: u32, device_pixel_ratio: f64) -> Self {
        let mut camera = Camera::facing_forward(config.fov_degrees, config.camera_position);
        let orbit = config.orbit.map(|settings| {
            camera.target = Vec3::ZERO;
            OrbitControls::new(camera.eye, camera.target, settings)
        });
        camera.set_aspect(css_width as f32, css_height as f32);
        Self {
            viewport: Viewport::new(css_width, css_height, device_pixel_ratio),
            config,
            camera,
            phone: None,
            orbit,
            last_elapsed: None,
        }
    }

    pub fn kind(&self) -> RigKind {
        self.config.kind
    }

    /// Keep camera aspect and surface size in step with the container.
    /// Returns false (and changes nothing) for zero-sized containers.
    pub fn resize(&mut self, css_width: u32, css_height: u32, device_pixel_ratio: f64) -> bool {
        if css_width == 0 || css_height == 0 {
            return false;
        }
        self.camera.set_aspect(css_width as f32, css_height as f32);
        self.viewport = Viewport::new(css_width, css_height, device_pixel_ratio);
        true
    }

    /// Attach this rig's clone of the phone with the preset resting pose.
    pub fn attach_phone(&mut self, base_scale: f32) {
        let rest = Transform::IDENTITY
            .with_rotation(self.config.rest_rotation)
            .with_uniform_scale(base_scale * self.config.rest_scale);
        self.phone = Some(PhoneInstance {
            rest,
            current: rest,
        });
    }

    /// Run one frame of this rig's animator.
    pub fn advance(&mut self, inputs: &FrameInputs) {
        let dt = match self.last_elapsed {
            Some(prev) => (inputs.elapsed - prev).clamp(0.0, MAX_FRAME_DT_SEC),
            None => 0.0,
        };
        self.last_elapsed = Some(inputs.elapsed);

        if let Some(phone) = &mut self.phone {
            self.config
                .motion
                .step(&phone.rest, &mut phone.current, inputs);
        }
        if let Some(orbit) = &mut self.orbit {
            self.camera.eye = orbit.update(dt);
            self.camera.target = orbit.target;
        }
    }
}
