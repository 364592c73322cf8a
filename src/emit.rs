//! GLSL literal emission
//!
//! Converts numeric values into the constructor-call substrings spliced into
//! generated shader source, with a stable decimal representation: every
//! emitted scalar carries a decimal point (`2` becomes `2.0`), so the output
//! always parses as a GLSL `float` rather than an `int`.
//!
//! Author: Moroya Sakamoto

use glam::{Vec2, Vec3, Vec4};

/// Format a scalar with the shortest representation that still carries a
/// decimal point: `2.0`, `-2.0`, `0.25`.
pub fn emit_f32(value: f32) -> String {
    if value == value.trunc() && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Format a scalar with exactly one fractional digit: `1` -> `1.0`,
/// `2.5` -> `2.5`, `0.25` -> `0.2`.
///
/// Used where the table layout fixes the precision (light attenuation,
/// material shininess) regardless of the stored value.
pub fn emit_f32_fixed1(value: f32) -> String {
    format!("{:.1}", value)
}

/// Emit a `vec2( x, y )` constructor call
pub fn emit_vec2(v: Vec2) -> String {
    format!("vec2({},{})", emit_f32(v.x), emit_f32(v.y))
}

/// Emit a `vec3( x, y, z )` constructor call
pub fn emit_vec3(v: Vec3) -> String {
    format!("vec3({},{},{})", emit_f32(v.x), emit_f32(v.y), emit_f32(v.z))
}

/// Emit a `vec4( x, y, z, w )` constructor call
pub fn emit_vec4(v: Vec4) -> String {
    format!(
        "vec4({},{},{},{})",
        emit_f32(v.x),
        emit_f32(v.y),
        emit_f32(v.z),
        emit_f32(v.w)
    )
}
