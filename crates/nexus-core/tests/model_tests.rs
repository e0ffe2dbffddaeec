// Host-side tests for phone acquisition: asset path and procedural fallback.

use nexus_core::model::*;
use nexus_core::{LoadError, RigKind, RigState};

// One triangle, positions only, in an embedded-buffer glTF.
const TRIANGLE_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scene": 0,
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "name": "Display", "mesh": 0, "translation": [0.0, 0.5, 0.0] }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "material": 0 }] }],
  "materials": [{
    "name": "Screen_Glass",
    "pbrMetallicRoughness": { "baseColorFactor": [0.1, 0.1, 0.1, 1.0], "metallicFactor": 0.2, "roughnessFactor": 0.4 }
  }],
  "buffers": [{ "byteLength": 36, "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAA" }],
  "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 36 }],
  "accessors": [{
    "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
    "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]
  }]
}"#;

// Three positions indexed as [0, 1, 5], without normals.
const DANGLING_INDEX_GLTF: &str = r#"{
  "asset": { "version": "2.0" },
  "scenes": [{ "nodes": [0] }],
  "nodes": [{ "mesh": 0 }],
  "meshes": [{ "primitives": [{ "attributes": { "POSITION": 0 }, "indices": 1 }] }],
  "buffers": [{ "byteLength": 44, "uri": "data:application/octet-stream;base64,AAAAAAAAAAAAAAAAAACAPwAAAAAAAAAAAAAAAAAAgD8AAAAAAAABAAUAAAA=" }],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
    { "buffer": 0, "byteOffset": 36, "byteLength": 6 }
  ],
  "accessors": [
    { "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3", "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
    { "bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR" }
  ]
}"#;

fn triangle_with_image() -> String {
    TRIANGLE_GLTF.replacen(
        r#""scene": 0,"#,
        r#""scene": 0, "images": [{ "uri": "textures/missing.png" }],"#,
        1,
    )
}

fn triangle_with_line_sibling() -> String {
    TRIANGLE_GLTF.replacen(
        r#""material": 0 }]"#,
        r#""material": 0 }, { "attributes": { "POSITION": 0 }, "mode": 1 }]"#,
        1,
    )
}

fn lines_only() -> String {
    TRIANGLE_GLTF.replacen(r#""material": 0 }]"#, r#""material": 0, "mode": 1 }]"#, 1)
}

fn attach_everywhere(model: &PhoneModel) -> Vec<RigState> {
    RigKind::ALL
        .iter()
        .map(|kind| {
            let mut rig = RigState::new(kind.config(), 640, 480, 1.0);
            rig.attach_phone(model.base_scale);
            rig
        })
        .collect()
}

#[test]
fn fetch_failure_yields_a_phone_in_every_rig() {
    let acquired = acquire_phone(Err(LoadError::Status(404)));
    assert_eq!(acquired.source, PhoneSource::Fallback(LoadError::Status(404)));
    assert!(!acquired.model.is_empty());
    assert!(acquired.model.triangle_count() > 0);

    let rigs = attach_everywhere(&acquired.model);
    assert_eq!(rigs.len(), 3);
    assert!(rigs.iter().all(|r| r.phone.is_some()));
}

#[test]
fn unparsable_bytes_fall_back_too() {
    let acquired = acquire_phone(Ok(vec![0x67, 0x6c, 0x54, 0x46, 0, 0, 0, 0]));
    assert!(matches!(acquired.source, PhoneSource::Fallback(LoadError::Parse(_))));
    assert!(!acquired.model.is_empty());
}

#[test]
fn empty_response_falls_back() {
    let acquired = acquire_phone(Ok(Vec::new()));
    assert_eq!(acquired.source, PhoneSource::Fallback(LoadError::Empty));
    assert!(!acquired.model.is_empty());
}

#[test]
fn asset_is_scaled_and_screen_tagged() {
    let acquired = acquire_phone(Ok(TRIANGLE_GLTF.as_bytes().to_vec()));
    assert_eq!(acquired.source, PhoneSource::Asset);

    let model = acquired.model;
    assert_eq!(model.base_scale, 2.0);
    assert_eq!(model.parts.len(), 1);

    let part = &model.parts[0];
    assert_eq!(part.mesh.triangle_count(), 1);
    // node translation baked into the vertices
    assert!((part.mesh.vertices[0].position[1] - 0.5).abs() < 1e-6);
    // normals computed for a CCW triangle in the XY plane
    assert!((part.mesh.vertices[0].normal[2] - 1.0).abs() < 1e-6);

    assert!(part.material.is_screen());
    assert!((part.material.emissive_intensity - 0.3).abs() < 1e-6);
    assert!((part.material.reflectivity - 1.5).abs() < 1e-6);
}

#[test]
fn each_rig_gets_its_resting_pose() {
    let model = build_fallback_phone();
    let rigs = attach_everywhere(&model);
    let yaws: Vec<f32> = rigs
        .iter()
        .map(|r| r.phone.as_ref().map(|p| p.rest.rotation.y).unwrap_or(f32::NAN))
        .collect();
    assert!((yaws[0] - std::f32::consts::FRAC_PI_6).abs() < 1e-6);
    assert!(yaws[1].abs() < 1e-6);
    assert!((yaws[2] + std::f32::consts::FRAC_PI_4).abs() < 1e-6);
}

#[test]
fn indices_past_the_vertex_list_fall_back() {
    let acquired = acquire_phone(Ok(DANGLING_INDEX_GLTF.as_bytes().to_vec()));
    assert!(matches!(acquired.source, PhoneSource::Fallback(LoadError::Parse(_))));
    assert!(!acquired.model.is_empty());
    assert_eq!(attach_everywhere(&acquired.model).len(), 3);
}

#[test]
fn referenced_images_are_not_loaded() {
    let acquired = acquire_phone(Ok(triangle_with_image().into_bytes()));
    assert_eq!(acquired.source, PhoneSource::Asset);
    assert_eq!(acquired.model.parts.len(), 1);
}

#[test]
fn non_triangle_primitives_are_skipped() {
    let acquired = acquire_phone(Ok(triangle_with_line_sibling().into_bytes()));
    assert_eq!(acquired.source, PhoneSource::Asset);
    assert_eq!(acquired.model.parts.len(), 1);
    assert_eq!(acquired.model.triangle_count(), 1);

    let acquired = acquire_phone(Ok(lines_only().into_bytes()));
    assert_eq!(acquired.source, PhoneSource::Fallback(LoadError::Empty));
    assert!(!acquired.model.is_empty());
}
