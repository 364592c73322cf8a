//! Material catalogue and GLSL material-table emission
//!
//! Same shape as the light registry: an ordered collection of [`Material`]
//! descriptors rendered as a fixed-size GLSL array literal, with a canned
//! two-material default table when nothing is registered. Table order is
//! registration order; the generated shader selects an element with
//! `materials[ int(materialID) ]` and performs no bounds check, so an
//! out-of-range id is undefined at the GLSL level.
//!
//! Author: Moroya Sakamoto

use crate::emit::{emit_f32, emit_f32_fixed1, emit_vec3};
use crate::types::{Fresnel, Material};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Number of materials a shader is generated against when the catalogue is
/// empty. Must equal `DEFAULT_MATERIALS.len()`.
pub const DEFAULT_MATERIAL_COUNT: usize = DEFAULT_MATERIALS.len();

/// Fallback material table: matte white and matte red.
const DEFAULT_MATERIALS: [Material; 2] = [
    Material {
        ambient: Vec3::ONE,
        diffuse: Vec3::ZERO,
        specular: Vec3::ONE,
        shininess: 8.0,
        fresnel: Fresnel {
            bias: 0.0,
            scale: 1.0,
            power: 4.0,
        },
    },
    Material {
        ambient: Vec3::ONE,
        diffuse: Vec3::new(1.0, 0.0, 0.0),
        specular: Vec3::ONE,
        shininess: 8.0,
        fresnel: Fresnel {
            bias: 0.0,
            scale: 1.0,
            power: 4.0,
        },
    },
];

/// Ordered collection of materials for one shader build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialCatalogue {
    materials: Vec<Material>,
}

impl MaterialCatalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        MaterialCatalogue::default()
    }

    /// Register a material at the end of the table; returns the id the
    /// generated shader selects it with.
    pub fn push(&mut self, material: Material) -> usize {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Registered materials, in table order
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Number of registered materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// True if no materials are registered
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Remove all registered materials
    pub fn clear(&mut self) {
        self.materials.clear();
    }

    /// Emit the GLSL array-literal declaration for the registered materials,
    /// or the default table if none are registered.
    pub fn emit_materials_literal(&self) -> String {
        if self.materials.is_empty() {
            emit_material_table(&DEFAULT_MATERIALS)
        } else {
            emit_material_table(&self.materials)
        }
    }
}

/// Render a material slice as `Material materials[N] = Material[N](...);`
///
/// Shininess is fixed to one fractional digit like light attenuation; the
/// fresnel triple keeps full precision.
fn emit_material_table(materials: &[Material]) -> String {
    let n = materials.len();
    let mut out = String::new();
    write!(out, "Material materials[{}] = Material[{}](", n, n).unwrap();

    for (i, mat) in materials.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write!(
            out,
            "\n  Material( {}, {}, {}, {}, Fresnel( {}, {}, {} ) )",
            emit_vec3(mat.ambient),
            emit_vec3(mat.diffuse),
            emit_vec3(mat.specular),
            emit_f32_fixed1(mat.shininess),
            emit_f32(mat.fresnel.bias),
            emit_f32(mat.fresnel.scale),
            emit_f32(mat.fresnel.power)
        )
        .unwrap();
    }

    out.push_str("\n);");
    out
}
