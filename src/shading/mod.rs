//! Shading-model catalogue
//!
//! A fixed set of interchangeable BRDF generators. Each variant of
//! [`ShadingModel`] maps to a pure function from [`GeneratorInput`] (light
//! count plus the two spliced table literals) to complete GLSL source text
//! defining `vec3 lighting(vec3, vec3, vec3, vec3, float)`.
//!
//! The catalogue is a closed enum rather than a name-keyed map, so selecting
//! a model is compile-time checked; the only fallible path is parsing a model
//! name from configuration text, which surfaces [`ShadingError::UnknownModel`]
//! immediately.
//!
//! Author: Moroya Sakamoto

mod models;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Shading-model selection errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShadingError {
    /// A model name not present in the catalogue
    #[error("unknown shading model: {0}")]
    UnknownModel(String),
}

/// Inputs shared by every shading-model generator
///
/// `light_count` must equal the element count of `lights_literal`; the
/// registry guarantees this when both come from the same
/// [`LightRegistry`](crate::lights::LightRegistry).
#[derive(Debug, Clone, Copy)]
pub struct GeneratorInput<'a> {
    /// Number of lights in the table (>= 1)
    pub light_count: usize,
    /// GLSL `Light lights[N] = ...;` declaration
    pub lights_literal: &'a str,
    /// GLSL `Material materials[N] = ...;` declaration
    pub materials_literal: &'a str,
}

/// Catalogue of lighting models a shader can be generated from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadingModel {
    /// Per-light Lambert diffuse + Phong specular + occluded ambient and
    /// Fresnel rim, gamma-corrected and attenuated per light
    #[default]
    Directional,
    /// `Directional` pipeline with Oren-Nayar diffuse and a Gaussian
    /// specular lobe
    OrenNayar,
    /// Single fixed sun (`lights[0]`): ambient, diffuse, backlight, skydome,
    /// Fresnel and specular terms, all non-ambient terms occlusion-gated
    Global,
    /// `Global` without occlusion gating on the skydome, backlight and
    /// Fresnel terms, giving a brighter rim
    GlobalNoOcclusionRim,
    /// Debug view: returns the surface normal as a pseudo-color
    Normal,
}

impl ShadingModel {
    /// Every catalogue entry, in display order
    pub const ALL: [ShadingModel; 5] = [
        ShadingModel::Directional,
        ShadingModel::OrenNayar,
        ShadingModel::Global,
        ShadingModel::GlobalNoOcclusionRim,
        ShadingModel::Normal,
    ];

    /// Canonical catalogue name
    pub fn name(self) -> &'static str {
        match self {
            ShadingModel::Directional => "directional",
            ShadingModel::OrenNayar => "orenn",
            ShadingModel::Global => "global",
            ShadingModel::GlobalNoOcclusionRim => "global-no-occlusion-rim",
            ShadingModel::Normal => "normal",
        }
    }

    /// True for models that loop over the light table (and therefore declare
    /// a `MAX_LIGHTS` constant)
    pub fn is_multi_light(self) -> bool {
        matches!(self, ShadingModel::Directional | ShadingModel::OrenNayar)
    }

    /// Generate complete GLSL source for this model
    pub fn generate(self, input: &GeneratorInput<'_>) -> String {
        match self {
            ShadingModel::Directional => models::directional(input),
            ShadingModel::OrenNayar => models::oren_nayar(input),
            ShadingModel::Global => models::global(input),
            ShadingModel::GlobalNoOcclusionRim => models::global_no_occlusion_rim(input),
            ShadingModel::Normal => models::normal(input),
        }
    }
}

impl fmt::Display for ShadingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShadingModel {
    type Err = ShadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "directional" => Ok(ShadingModel::Directional),
            "orenn" => Ok(ShadingModel::OrenNayar),
            "global" => Ok(ShadingModel::Global),
            // `global_` is the historical spelling of the no-occlusion-rim
            // variant and stays accepted.
            "global-no-occlusion-rim" | "global_" => Ok(ShadingModel::GlobalNoOcclusionRim),
            "normal" => Ok(ShadingModel::Normal),
            other => Err(ShadingError::UnknownModel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for model in ShadingModel::ALL {
            let parsed: ShadingModel = model.name().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn test_historical_alias() {
        let parsed: ShadingModel = "global_".parse().unwrap();
        assert_eq!(parsed, ShadingModel::GlobalNoOcclusionRim);
    }

    #[test]
    fn test_unknown_model_is_an_error() {
        let err = "phong".parse::<ShadingModel>().unwrap_err();
        assert_eq!(err, ShadingError::UnknownModel("phong".to_string()));
    }

    #[test]
    fn test_default_is_directional() {
        assert_eq!(ShadingModel::default(), ShadingModel::Directional);
    }

    #[test]
    fn test_multi_light_classification() {
        assert!(ShadingModel::Directional.is_multi_light());
        assert!(ShadingModel::OrenNayar.is_multi_light());
        assert!(!ShadingModel::Global.is_multi_light());
        assert!(!ShadingModel::GlobalNoOcclusionRim.is_multi_light());
        assert!(!ShadingModel::Normal.is_multi_light());
    }
}
