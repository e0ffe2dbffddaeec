use super::{MeshData, Vertex};
use glam::Vec3;
use std::f32::consts::TAU;

/// Axis-aligned box centred on the origin, one quad (4 vertices) per face.
pub fn box_mesh(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    // (normal, u axis, v axis); corners are n ± u ± v scaled by the half extents
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData {
        vertices: Vec::with_capacity(24),
        indices: Vec::with_capacity(36),
    };
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        let corners = [(-1.0, 1.0), (1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
        for (su, sv) in corners {
            let p = (n + u * su + v * sv) * h;
            mesh.vertices.push(Vertex::new(
                p.to_array(),
                n.to_array(),
                [(su + 1.0) * 0.5, (1.0 - sv) * 0.5],
            ));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 2, base + 1, base + 2, base + 3, base + 1]);
    }
    mesh
}

/// Plane in the XY plane facing +Z. `uv (0,0)` is the top-left corner so
/// canvas pixel rows map straight onto it.
pub fn plane_mesh(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let n = [0.0, 0.0, 1.0];
    MeshData {
        vertices: vec![
            Vertex::new([-hw, hh, 0.0], n, [0.0, 0.0]),
            Vertex::new([hw, hh, 0.0], n, [1.0, 0.0]),
            Vertex::new([-hw, -hh, 0.0], n, [0.0, 1.0]),
            Vertex::new([hw, -hh, 0.0], n, [1.0, 1.0]),
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}

/// Capped cylinder along +Y centred on the origin.
pub fn cylinder_mesh(radius: f32, height: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let hh = height * 0.5;
    let mut mesh = MeshData::default();

    // side wall: two rings with outward normals, seam duplicated for uvs
    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (s, c) = (u * TAU).sin_cos();
        let n = [s, 0.0, c];
        mesh.vertices
            .push(Vertex::new([radius * s, hh, radius * c], n, [u, 0.0]));
        mesh.vertices
            .push(Vertex::new([radius * s, -hh, radius * c], n, [u, 1.0]));
    }
    for i in 0..segments {
        let top = i * 2;
        let bottom = top + 1;
        let next_top = top + 2;
        let next_bottom = top + 3;
        mesh.indices
            .extend_from_slice(&[top, bottom, next_top, bottom, next_bottom, next_top]);
    }

    // caps
    for (y, ny) in [(hh, 1.0f32), (-hh, -1.0f32)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices
            .push(Vertex::new([0.0, y, 0.0], [0.0, ny, 0.0], [0.5, 0.5]));
        for i in 0..segments {
            let (s, c) = (i as f32 / segments as f32 * TAU).sin_cos();
            mesh.vertices.push(Vertex::new(
                [radius * s, y, radius * c],
                [0.0, ny, 0.0],
                [0.5 + 0.5 * s, 0.5 - 0.5 * c],
            ));
        }
        for i in 0..segments {
            let a = center + 1 + i;
            let b = center + 1 + (i + 1) % segments;
            if ny > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, b]);
            } else {
                mesh.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }
    mesh
}
