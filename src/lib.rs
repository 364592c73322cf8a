//! # ALICE-Lighting
//!
//! **A.L.I.C.E. - Adaptive Lightweight Implicit Compression Engine** —
//! lighting shader synthesis for SDF raymarching renderers.
//!
//! Turns typed light and material descriptors into GLSL source text: the
//! fixed-size data-table declarations plus a `lighting(...)` function body
//! selected from a catalogue of interchangeable shading models.
//!
//! ## Features
//!
//! - **Shading models**: physically-inspired directional, Oren-Nayar,
//!   occlusion-driven global (two variants), normal debug view
//! - **Light registry**: ordered light table with GLSL array-literal
//!   emission and a sensible two-light default
//! - **Material catalogue**: ambient/diffuse/specular + Fresnel materials
//!   with the same table emission
//! - **Stand-alone output**: wrap any generated lighting function into a
//!   complete raymarching fragment shader
//! - **Persistence**: `.rig.json` save/load for rig configurations
//!
//! ## Example
//!
//! ```rust
//! use alice_lighting::prelude::*;
//!
//! // A warm key light over a red material
//! let rig = LightingRig::new()
//!     .with_model(ShadingModel::Directional)
//!     .with_light(Light::default().with_position(2.0, 4.0, 3.0).with_color(1.0, 0.9, 0.6))
//!     .with_material(Material::default().with_diffuse(1.0, 0.0, 0.0));
//!
//! let shader = rig.generate();
//! assert!(shader.source.contains("vec3 lighting("));
//!
//! // Complete fragment shader for quick visualization
//! let fragment = shader.to_fragment_shader();
//! assert!(fragment.starts_with("#version"));
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod emit;
pub mod io;
pub mod lights;
pub mod materials;
pub mod shader;
pub mod shading;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::emit::{emit_f32, emit_f32_fixed1, emit_vec2, emit_vec3, emit_vec4};
    pub use crate::io::{from_json_string, load_rig, save_rig, to_json_string, RigIoError};
    pub use crate::lights::{LightRegistry, DEFAULT_LIGHT_COUNT};
    pub use crate::materials::{MaterialCatalogue, DEFAULT_MATERIAL_COUNT};
    pub use crate::shader::{LightingRig, LightingShader};
    pub use crate::shading::{GeneratorInput, ShadingError, ShadingModel};
    pub use crate::types::{Fresnel, Light, Material};
    pub use glam::Vec3;
}

// Re-exports for convenience
pub use shader::{LightingRig, LightingShader};
pub use shading::ShadingModel;
pub use types::{Fresnel, Light, Material};
