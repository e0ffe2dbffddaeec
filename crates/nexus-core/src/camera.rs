//! Perspective camera shared by the three scene rigs.
//!
//! The camera keeps an explicit `aspect` that the resize path overwrites with
//! the container's width/height, and an `eye`/`target` pair. Cameras that are
//! not driven by orbit controls look straight down -Z from their position.

use crate::constants::{CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_degrees: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera at `eye` facing down -Z, the default orientation of a fresh camera.
    pub fn facing_forward(fovy_degrees: f32, eye: Vec3) -> Self {
        Self {
            eye,
            target: eye - Vec3::Z,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_degrees,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_camera_looks_down_negative_z() {
        let cam = Camera::facing_forward(45.0, Vec3::new(2.0, 1.0, 4.0));
        let dir = (cam.target - cam.eye).normalize();
        assert!(dir.abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }

    #[test]
    fn aspect_ignores_degenerate_sizes() {
        let mut cam = Camera::facing_forward(45.0, Vec3::Z * 5.0);
        cam.set_aspect(800.0, 400.0);
        assert_eq!(cam.aspect, 2.0);
        cam.set_aspect(800.0, 0.0);
        assert_eq!(cam.aspect, 2.0);
    }

    #[test]
    fn origin_projects_to_screen_center() {
        let mut cam = Camera::facing_forward(45.0, Vec3::Z * 5.0);
        cam.set_aspect(16.0, 9.0);
        let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6 && ndc.y.abs() < 1e-6);
    }
}
