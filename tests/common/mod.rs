//! Common test helpers for ALICE-Lighting integration tests
//!
//! Author: Moroya Sakamoto

use alice_lighting::prelude::*;

// ============================================================================
// Standard rigs
// ============================================================================

/// Empty rig: default model, no registered lights or materials
#[allow(dead_code)]
pub fn empty_rig() -> LightingRig {
    LightingRig::new()
}

/// Three-point studio rig: key, fill, rim
#[allow(dead_code)]
pub fn three_point_rig() -> LightingRig {
    LightingRig::new()
        .with_light(
            Light::default()
                .with_position(2.0, 4.0, 3.0)
                .with_color(1.0, 0.95, 0.8),
        )
        .with_light(
            Light::default()
                .with_position(-3.0, 2.0, 2.0)
                .with_color(0.4, 0.45, 0.6)
                .with_attenuation(0.5),
        )
        .with_light(
            Light::default()
                .with_position(0.0, 3.0, -4.0)
                .with_color(0.9, 0.9, 1.0)
                .with_attenuation(2.0),
        )
}

/// Rig with one light left entirely at constructor defaults
#[allow(dead_code)]
pub fn single_default_light_rig() -> LightingRig {
    LightingRig::new().with_light(Light::default())
}

/// Rig carrying a small material palette alongside a sun light
#[allow(dead_code)]
pub fn sun_and_palette_rig() -> LightingRig {
    LightingRig::new()
        .with_light(
            Light::default()
                .with_position(5.0, 10.0, 5.0)
                .with_color(1.0, 0.9, 0.6),
        )
        .with_material(Material::default().with_diffuse(1.0, 0.0, 0.0))
        .with_material(
            Material::default()
                .with_diffuse(0.1, 0.4, 0.1)
                .with_shininess(32.0),
        )
        .with_material(
            Material::default()
                .with_diffuse(0.2, 0.2, 0.8)
                .with_fresnel(0.2, 0.8, 2.0),
        )
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Count non-overlapping occurrences of a pattern
#[allow(dead_code)]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Extract the `Light lights[...] = ...;` declaration from generated source
#[allow(dead_code)]
pub fn extract_lights_literal(source: &str) -> &str {
    let start = source
        .find("Light lights[")
        .expect("source has no light table");
    let end = source[start..]
        .find(");")
        .expect("light table not terminated")
        + start
        + 2;
    &source[start..end]
}

/// Extract the `Material materials[...] = ...;` declaration
#[allow(dead_code)]
pub fn extract_materials_literal(source: &str) -> &str {
    let start = source
        .find("Material materials[")
        .expect("source has no material table");
    let end = source[start..]
        .find(");")
        .expect("material table not terminated")
        + start
        + 2;
    &source[start..end]
}
