//! Procedural stand-in for the phone asset, assembled from boxes, a plane and
//! two cylinders.

use super::{box_mesh, cylinder_mesh, plane_mesh, Material, MeshData, MeshPart, PhoneModel, TextureSource};
use crate::transform::Transform;
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: &'static str,
}

/// Lock-screen image painted onto the fallback screen with a 2D canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockFace {
    pub width: u32,
    pub height: u32,
    pub gradient: Vec<GradientStop>,
    pub time_text: &'static str,
    pub time_font: &'static str,
    pub time_color: &'static str,
    pub time_baseline_y: f64,
    pub date_text: &'static str,
    pub date_font: &'static str,
    pub date_color: &'static str,
    pub date_baseline_y: f64,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self {
            width: 512,
            height: 1024,
            gradient: vec![
                GradientStop {
                    offset: 0.0,
                    color: "#1a1a2e",
                },
                GradientStop {
                    offset: 0.5,
                    color: "#16213e",
                },
                GradientStop {
                    offset: 1.0,
                    color: "#0f0f1a",
                },
            ],
            time_text: "12:45",
            time_font: "120px sans-serif",
            time_color: "rgba(255, 255, 255, 0.9)",
            time_baseline_y: 300.0,
            date_text: "Thursday, January 22",
            date_font: "32px sans-serif",
            date_color: "rgba(255, 255, 255, 0.6)",
            date_baseline_y: 360.0,
        }
    }
}

fn part(name: &str, mesh: MeshData, material: Material, local: Transform) -> MeshPart {
    MeshPart {
        name: name.to_string(),
        mesh,
        material,
        local: local.matrix(),
    }
}

pub fn build_fallback_phone() -> PhoneModel {
    let lying_flat = Vec3::new(FRAC_PI_2, 0.0, 0.0);

    let mut screen_material = Material::standard("screen", 0x0f0f1a, 0.1, 0.3)
        .with_emissive(0x1a1a2e, 0.5);
    screen_material.texture = Some(TextureSource::ClockFace(ClockFace::default()));

    let parts = vec![
        // slightly larger shell behind the body stands in for bevelled edges
        part(
            "frame",
            box_mesh(1.24, 2.44, 0.14),
            Material::standard("frame", 0x2a2a2a, 0.95, 0.1),
            Transform::from_position(Vec3::new(0.0, 0.0, -0.01)),
        ),
        part(
            "body",
            box_mesh(1.2, 2.4, 0.12),
            Material::standard("body", 0x1a1a1a, 0.9, 0.2),
            Transform::IDENTITY,
        ),
        part(
            "screen",
            plane_mesh(1.1, 2.2),
            screen_material,
            Transform::from_position(Vec3::new(0.0, 0.0, 0.061)),
        ),
        part(
            "notch",
            box_mesh(0.4, 0.08, 0.02),
            Material::standard("notch", 0x000000, 0.5, 0.5),
            Transform::from_position(Vec3::new(0.0, 1.05, 0.07)),
        ),
        part(
            "camera_bump",
            cylinder_mesh(0.15, 0.04, 32),
            Material::standard("camera_bump", 0x2a2a2a, 0.9, 0.2),
            Transform::from_position(Vec3::new(-0.35, 0.85, -0.08)).with_rotation(lying_flat),
        ),
        part(
            "lens",
            cylinder_mesh(0.08, 0.03, 32),
            Material::standard("lens", 0x1a1a1a, 0.95, 0.1),
            Transform::from_position(Vec3::new(-0.35, 0.85, -0.095)).with_rotation(lying_flat),
        ),
    ];

    PhoneModel {
        parts,
        base_scale: 1.0,
    }
}
