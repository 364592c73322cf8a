//! Integration tests: rig persistence round-trips
//!
//! Author: Moroya Sakamoto

mod common;

use alice_lighting::prelude::*;
use common::*;
use std::path::PathBuf;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("alice_lighting_test_io");
    std::fs::create_dir_all(&dir).ok();
    dir
}

#[test]
fn rig_json_round_trip() {
    let rig = sun_and_palette_rig().with_model(ShadingModel::Global);
    let path = temp_dir().join("sun.rig.json");

    save_rig(&rig, &path).expect("save_rig failed");
    let loaded = load_rig(&path).expect("load_rig failed");

    assert_eq!(loaded.model, ShadingModel::Global);
    assert_eq!(loaded.lights.len(), rig.lights.len());
    assert_eq!(loaded.materials.len(), rig.materials.len());
    assert_eq!(loaded.lights.lights()[0], rig.lights.lights()[0]);
    assert_eq!(loaded.materials.materials()[2], rig.materials.materials()[2]);

    std::fs::remove_file(&path).ok();
}

#[test]
fn loaded_rig_generates_identical_shader() {
    let rig = three_point_rig().with_model(ShadingModel::OrenNayar);
    let path = temp_dir().join("three_point.rig.json");

    save_rig(&rig, &path).expect("save_rig failed");
    let loaded = load_rig(&path).expect("load_rig failed");

    assert_eq!(rig.generate().source, loaded.generate().source);

    std::fs::remove_file(&path).ok();
}

#[test]
fn empty_rig_round_trip_keeps_defaults() {
    let path = temp_dir().join("empty.rig.json");

    save_rig(&empty_rig(), &path).expect("save_rig failed");
    let loaded = load_rig(&path).expect("load_rig failed");

    assert_eq!(loaded.model, ShadingModel::Directional);
    assert!(loaded.lights.is_empty());
    let shader = loaded.generate();
    assert_eq!(shader.light_count, DEFAULT_LIGHT_COUNT);

    std::fs::remove_file(&path).ok();
}

#[test]
fn wrong_extension_is_rejected() {
    let path = temp_dir().join("rig.yaml");
    let err = save_rig(&empty_rig(), &path).unwrap_err();
    assert!(matches!(err, RigIoError::InvalidFormat(_)));

    let err = load_rig(&path).unwrap_err();
    assert!(matches!(err, RigIoError::InvalidFormat(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = temp_dir().join("does_not_exist.rig.json");
    let err = load_rig(&path).unwrap_err();
    assert!(matches!(err, RigIoError::Io(_)));
}
