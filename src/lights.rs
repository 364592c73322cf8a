//! Light registry and GLSL light-table emission
//!
//! Holds the ordered collection of registered [`Light`] descriptors and
//! renders it as a fixed-size GLSL array literal:
//!
//! ```text
//! Light lights[2] = Light[2](
//!     Light( vec3(2.0,2.0,3.0), vec3(0.25,0.25,0.25), 1.0 ),
//!     Light( vec3(-2.0,2.0,3.0), vec3(0.25,0.25,0.25), 1.0 )
//! );
//! ```
//!
//! With no lights registered, a two-light default table is emitted instead so
//! the generated shader always has a populated table to index.
//!
//! Author: Moroya Sakamoto

use crate::emit::{emit_f32_fixed1, emit_vec3};
use crate::types::Light;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Number of lights a shader is generated against when the registry is empty.
///
/// Must equal `DEFAULT_LIGHTS.len()`; the array-size token of the emitted
/// literal and the `MAX_LIGHTS` constant in loop-based shading models both
/// derive from it.
pub const DEFAULT_LIGHT_COUNT: usize = DEFAULT_LIGHTS.len();

/// Fallback light table: two dim white lights flanking the origin.
const DEFAULT_LIGHTS: [Light; 2] = [
    Light {
        position: Vec3::new(2.0, 2.0, 3.0),
        color: Vec3::new(0.25, 0.25, 0.25),
        attenuation: 1.0,
        intensity: 1.0,
    },
    Light {
        position: Vec3::new(-2.0, 2.0, 3.0),
        color: Vec3::new(0.25, 0.25, 0.25),
        attenuation: 1.0,
        intensity: 1.0,
    },
];

/// Ordered collection of lights for one shader build
///
/// The registry owns its descriptors; registration order is table order, so
/// `lights[0]` in the generated shader is the first light pushed (the sun
/// light for the `global` shading models).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightRegistry {
    lights: Vec<Light>,
}

impl LightRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        LightRegistry::default()
    }

    /// Register a light at the end of the table
    pub fn push(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Registered lights, in table order
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of registered lights
    pub fn len(&self) -> usize {
        self.lights.len()
    }

    /// True if no lights are registered
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Remove all registered lights
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Light count the shader is generated against: the registered count, or
    /// [`DEFAULT_LIGHT_COUNT`] when the registry is empty.
    ///
    /// Always equals the element count of [`emit_lights_literal`]'s output.
    ///
    /// [`emit_lights_literal`]: LightRegistry::emit_lights_literal
    pub fn shader_light_count(&self) -> usize {
        if self.lights.is_empty() {
            DEFAULT_LIGHT_COUNT
        } else {
            self.lights.len()
        }
    }

    /// Emit the GLSL array-literal declaration for the registered lights,
    /// or the default table if none are registered.
    pub fn emit_lights_literal(&self) -> String {
        if self.lights.is_empty() {
            emit_light_table(&DEFAULT_LIGHTS)
        } else {
            emit_light_table(&self.lights)
        }
    }
}

/// Render a light slice as `Light lights[N] = Light[N](...);`
///
/// The array-size token is taken from the slice length, so it cannot diverge
/// from the element count. Attenuation is fixed to one fractional digit.
fn emit_light_table(lights: &[Light]) -> String {
    let n = lights.len();
    let mut out = String::new();
    write!(out, "Light lights[{}] = Light[{}](", n, n).unwrap();

    for (i, light) in lights.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write!(
            out,
            "\n  Light( {}, {}, {} )",
            emit_vec3(light.position),
            emit_vec3(light.color),
            emit_f32_fixed1(light.attenuation)
        )
        .unwrap();
    }

    out.push_str("\n);");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_registry_emits_default_table() {
        let registry = LightRegistry::new();
        let literal = registry.emit_lights_literal();

        assert!(literal.starts_with("Light lights[2] = Light[2]("));
        assert!(literal.contains("vec3(2.0,2.0,3.0)"));
        assert!(literal.contains("vec3(-2.0,2.0,3.0)"));
        assert!(literal.contains("vec3(0.25,0.25,0.25)"));
        assert_eq!(registry.shader_light_count(), 2);
    }

    #[test]
    fn test_single_light_table() {
        let mut registry = LightRegistry::new();
        registry.push(Light::default());
        let literal = registry.emit_lights_literal();

        assert!(literal.starts_with("Light lights[1] = Light[1]("));
        assert!(literal.contains("Light( vec3(2.0,2.0,3.0), vec3(0.0,0.0,1.0), 1.0 )"));
        assert_eq!(registry.shader_light_count(), 1);
    }

    #[test]
    fn test_size_token_matches_element_count() {
        for n in 1..6 {
            let mut registry = LightRegistry::new();
            for i in 0..n {
                registry.push(Light::default().with_position(i as f32, 2.0, 3.0));
            }
            let literal = registry.emit_lights_literal();
            assert!(literal.contains(&format!("lights[{}] = Light[{}](", n, n)));
            assert_eq!(literal.matches("Light( ").count(), n);
        }
    }

    #[test]
    fn test_no_trailing_comma() {
        let mut registry = LightRegistry::new();
        registry.push(Light::default());
        registry.push(Light::default().with_position(-2.0, 2.0, 3.0));
        let literal = registry.emit_lights_literal();

        assert!(!literal.contains(",\n);"));
        assert!(literal.ends_with(")\n);"));
    }

    #[test]
    fn test_attenuation_one_fractional_digit() {
        let mut registry = LightRegistry::new();
        registry.push(Light::default().with_attenuation(1.0));
        registry.push(Light::default().with_attenuation(2.5));
        let literal = registry.emit_lights_literal();

        assert!(literal.contains("vec3(0.0,0.0,1.0), 1.0 )"));
        assert!(literal.contains("vec3(0.0,0.0,1.0), 2.5 )"));
    }

    #[test]
    fn test_statement_terminated() {
        let registry = LightRegistry::new();
        assert!(registry.emit_lights_literal().ends_with(';'));
    }
}
