use super::{Material, MeshData, MeshPart, PhoneModel, Vertex};
use crate::constants::{
    ASSET_REFLECTIVITY, ASSET_SCALE, SCREEN_EMISSIVE_HEX, SCREEN_EMISSIVE_INTENSITY,
};
use crate::error::LoadError;
use crate::lighting::hex_to_linear;
use glam::{Mat4, Vec3};

/// Parse a binary glTF (or embedded glTF JSON) into a phone model.
///
/// Node transforms are baked into the part vertices. Materials keep their
/// factors; images are never decoded. Primitives other than triangle lists
/// are skipped.
pub fn parse_glb(bytes: &[u8]) -> Result<PhoneModel, LoadError> {
    if bytes.is_empty() {
        return Err(LoadError::Empty);
    }
    let gltf::Gltf { document, blob } = gltf::Gltf::from_slice(bytes)?;
    let buffers = gltf::import_buffers(&document, None, blob)?;
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or(LoadError::Empty)?;

    let mut parts = Vec::new();
    for node in scene.nodes() {
        collect_node(&node, Mat4::IDENTITY, &buffers, &mut parts)?;
    }
    if parts.iter().all(|p| p.mesh.is_empty()) {
        return Err(LoadError::Empty);
    }

    for part in &mut parts {
        tag_material(&mut part.material);
    }

    Ok(PhoneModel {
        parts,
        base_scale: ASSET_SCALE,
    })
}

fn collect_node(
    node: &gltf::Node,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<MeshPart>,
) -> Result<(), LoadError> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        let node_name = node.name().unwrap_or("node");
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                log::warn!(
                    "[model] skipping {:?} primitive {}#{}",
                    primitive.mode(),
                    node_name,
                    primitive.index()
                );
                continue;
            }
            let mut data = read_primitive(&primitive, buffers)?;
            if data.is_empty() {
                continue;
            }
            data.transform(&world);
            out.push(MeshPart {
                name: format!("{}#{}", node_name, primitive.index()),
                mesh: data,
                material: read_material(&primitive.material()),
                local: Mat4::IDENTITY,
            });
        }
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn read_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Result<MeshData, LoadError> {
    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| d.0.as_slice()));

    let positions: Vec<[f32; 3]> = match reader.read_positions() {
        Some(iter) => iter.collect(),
        None => return Ok(MeshData::default()),
    };
    let normals: Option<Vec<[f32; 3]>> = reader.read_normals().map(|iter| iter.collect());
    let uvs: Option<Vec<[f32; 2]>> = reader
        .read_tex_coords(0)
        .map(|tc| tc.into_f32().collect());

    let vertices = positions
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Vertex::new(
                *p,
                normals
                    .as_ref()
                    .and_then(|n| n.get(i).copied())
                    .unwrap_or([0.0; 3]),
                uvs.as_ref()
                    .and_then(|uv| uv.get(i).copied())
                    .unwrap_or([0.0; 2]),
            )
        })
        .collect::<Vec<_>>();

    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..vertices.len() as u32).collect(),
    };
    if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
        return Err(LoadError::Parse(format!(
            "primitive {} index {} out of range for {} vertices",
            primitive.index(),
            bad,
            vertices.len()
        )));
    }

    let mut data = MeshData { vertices, indices };
    if normals.is_none() {
        data.compute_normals();
    }
    Ok(data)
}

fn read_material(material: &gltf::Material) -> Material {
    let pbr = material.pbr_metallic_roughness();
    let [r, g, b, _a] = pbr.base_color_factor();
    Material {
        name: material.name().unwrap_or_default().to_string(),
        base_color: Vec3::new(r, g, b),
        metalness: pbr.metallic_factor(),
        roughness: pbr.roughness_factor(),
        emissive: Vec3::from(material.emissive_factor()),
        emissive_intensity: 1.0,
        reflectivity: 1.0,
        texture: None,
    }
}

/// Screen materials glow; every material reflects a bit more of the environment.
fn tag_material(material: &mut Material) {
    if material.is_screen() {
        material.emissive = hex_to_linear(SCREEN_EMISSIVE_HEX);
        material.emissive_intensity = SCREEN_EMISSIVE_INTENSITY;
    }
    material.reflectivity = ASSET_REFLECTIVITY;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bytes_are_rejected() {
        assert_eq!(parse_glb(&[]), Err(LoadError::Empty));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_glb(b"definitely not a glb").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
