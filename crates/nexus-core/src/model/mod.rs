//! Phone geometry: the shared mesh model, the asset parser, the procedural
//! fallback and the loader routine that always yields one of the two.

mod asset;
mod fallback;
mod primitives;

pub use asset::parse_glb;
pub use fallback::{build_fallback_phone, ClockFace, GradientStop};
pub use primitives::{box_mesh, cylinder_mesh, plane_mesh};

use crate::error::LoadError;
use crate::lighting::hex_to_linear;
use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }
}

/// Indexed triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.len() < 3 || self.vertices.is_empty()
    }

    /// Bake `m` into positions and normals.
    pub fn transform(&mut self, m: &Mat4) {
        let normal_m = Mat3::from_mat4(*m).inverse().transpose();
        for v in &mut self.vertices {
            v.position = m.transform_point3(Vec3::from(v.position)).to_array();
            v.normal = (normal_m * Vec3::from(v.normal))
                .normalize_or_zero()
                .to_array();
        }
        // Mirroring transforms flip the winding.
        if m.determinant() < 0.0 {
            for tri in self.indices.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        }
    }

    /// Smooth normals from face normals, used when an asset ships without them.
    pub fn compute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            // out-of-range triangles contribute nothing
            let (Some(va), Some(vb), Some(vc)) =
                (self.vertices.get(a), self.vertices.get(b), self.vertices.get(c))
            else {
                continue;
            };
            let pa = Vec3::from(va.position);
            let pb = Vec3::from(vb.position);
            let pc = Vec3::from(vc.position);
            let n = (pb - pa).cross(pc - pa);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
        }
        for (v, n) in self.vertices.iter_mut().zip(acc) {
            let n = n.normalize_or_zero();
            v.normal = if n == Vec3::ZERO { Vec3::Z } else { n }.to_array();
        }
    }
}

/// Content drawn into a part's colour/emissive map.
#[derive(Clone, Debug, PartialEq)]
pub enum TextureSource {
    ClockFace(ClockFace),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// Linear RGB.
    pub base_color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Vec3,
    pub emissive_intensity: f32,
    /// Strength of the fake environment reflection.
    pub reflectivity: f32,
    pub texture: Option<TextureSource>,
}

impl Material {
    pub fn standard(name: &str, color: u32, metalness: f32, roughness: f32) -> Self {
        Self {
            name: name.to_string(),
            base_color: hex_to_linear(color),
            metalness,
            roughness,
            emissive: Vec3::ZERO,
            emissive_intensity: 1.0,
            reflectivity: 1.0,
            texture: None,
        }
    }

    pub fn with_emissive(mut self, color: u32, intensity: f32) -> Self {
        self.emissive = hex_to_linear(color);
        self.emissive_intensity = intensity;
        self
    }

    pub fn is_screen(&self) -> bool {
        self.name
            .to_lowercase()
            .contains(crate::constants::SCREEN_MATERIAL_TAG)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeshPart {
    pub name: String,
    pub mesh: MeshData,
    pub material: Material,
    /// Part placement inside the phone.
    pub local: Mat4,
}

/// The phone shape shared by all rigs; each rig renders its own clone.
#[derive(Clone, Debug, PartialEq)]
pub struct PhoneModel {
    pub parts: Vec<MeshPart>,
    /// Uniform scale applied under each rig's instance transform.
    pub base_scale: f32,
}

impl PhoneModel {
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| p.mesh.is_empty())
    }

    pub fn triangle_count(&self) -> usize {
        self.parts.iter().map(|p| p.mesh.triangle_count()).sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PhoneSource {
    Asset,
    Fallback(LoadError),
}

#[derive(Clone, Debug)]
pub struct AcquiredPhone {
    pub model: PhoneModel,
    pub source: PhoneSource,
}

/// Turn the outcome of the asset fetch into a usable phone.
///
/// A fetched asset that parses into at least one triangle is used as is;
/// anything else (fetch error, bad bytes, empty scene) switches to the
/// procedural phone. The result is never empty.
pub fn acquire_phone(fetched: Result<Vec<u8>, LoadError>) -> AcquiredPhone {
    match fetched.and_then(|bytes| parse_glb(&bytes)) {
        Ok(model) => {
            log::info!(
                "[model] phone asset loaded: parts={} triangles={}",
                model.parts.len(),
                model.triangle_count()
            );
            AcquiredPhone {
                model,
                source: PhoneSource::Asset,
            }
        }
        Err(reason) => {
            log::warn!("[model] could not load phone asset ({reason}), using fallback geometry");
            AcquiredPhone {
                model: build_fallback_phone(),
                source: PhoneSource::Fallback(reason),
            }
        }
    }
}
