//! Core descriptor types for ALICE-Lighting
//!
//! Defines the light and material value types that get rendered into the
//! GLSL data tables consumed by the generated `lighting()` function.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Point light descriptor
///
/// Immutable once created; registered lights are owned by a
/// [`LightRegistry`](crate::lights::LightRegistry) in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// World-space position
    pub position: Vec3,
    /// Tint / intensity color
    pub color: Vec3,
    /// Inverse-square falloff coefficient (>= 0)
    pub attenuation: f32,
    /// Light intensity. Carried on the descriptor but not yet consumed by
    /// the shading templates.
    pub intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Light {
            position: Vec3::new(2.0, 2.0, 3.0),
            color: Vec3::new(0.0, 0.0, 1.0),
            attenuation: 1.0,
            intensity: 1.0,
        }
    }
}

impl Light {
    /// Create a light from all components
    pub fn new(position: Vec3, color: Vec3, attenuation: f32, intensity: f32) -> Self {
        Light {
            position,
            color,
            attenuation: attenuation.max(0.0),
            intensity,
        }
    }

    /// Set position
    #[inline]
    pub fn with_position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Set color
    #[inline]
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.color = Vec3::new(r, g, b);
        self
    }

    /// Set attenuation coefficient (clamped to >= 0)
    #[inline]
    pub fn with_attenuation(mut self, attenuation: f32) -> Self {
        self.attenuation = attenuation.max(0.0);
        self
    }

    /// Set intensity
    #[inline]
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }
}

/// Fresnel rim-term parameters
///
/// Rendered as a GLSL `Fresnel( bias, scale, power )` constructor inside
/// material table elements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fresnel {
    /// Constant offset added to the rim term
    pub bias: f32,
    /// Multiplier on the view-angle falloff
    pub scale: f32,
    /// Falloff exponent
    pub power: f32,
}

impl Default for Fresnel {
    fn default() -> Self {
        Fresnel {
            bias: 0.0,
            scale: 1.0,
            power: 4.0,
        }
    }
}

impl Fresnel {
    /// Create fresnel parameters
    pub fn new(bias: f32, scale: f32, power: f32) -> Self {
        Fresnel { bias, scale, power }
    }
}

/// Surface material descriptor
///
/// Classic ambient/diffuse/specular split with a Phong shininess exponent
/// and a Fresnel triple. Registered materials are owned by a
/// [`MaterialCatalogue`](crate::materials::MaterialCatalogue); the generated
/// shader indexes the table with `int(materialID)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Ambient tint
    pub ambient: Vec3,
    /// Diffuse tint
    pub diffuse: Vec3,
    /// Specular tint
    pub specular: Vec3,
    /// Phong specular exponent
    pub shininess: f32,
    /// Fresnel rim parameters
    pub fresnel: Fresnel,
}

impl Default for Material {
    fn default() -> Self {
        Material {
            ambient: Vec3::ONE,
            diffuse: Vec3::ZERO,
            specular: Vec3::ONE,
            shininess: 8.0,
            fresnel: Fresnel::default(),
        }
    }
}

impl Material {
    /// Create a material from all components
    pub fn new(
        ambient: Vec3,
        diffuse: Vec3,
        specular: Vec3,
        shininess: f32,
        fresnel: Fresnel,
    ) -> Self {
        Material {
            ambient,
            diffuse,
            specular,
            shininess,
            fresnel,
        }
    }

    /// Set ambient tint
    #[inline]
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient = Vec3::new(r, g, b);
        self
    }

    /// Set diffuse tint
    #[inline]
    pub fn with_diffuse(mut self, r: f32, g: f32, b: f32) -> Self {
        self.diffuse = Vec3::new(r, g, b);
        self
    }

    /// Set specular tint
    #[inline]
    pub fn with_specular(mut self, r: f32, g: f32, b: f32) -> Self {
        self.specular = Vec3::new(r, g, b);
        self
    }

    /// Set Phong shininess exponent
    #[inline]
    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set Fresnel parameters
    #[inline]
    pub fn with_fresnel(mut self, bias: f32, scale: f32, power: f32) -> Self {
        self.fresnel = Fresnel::new(bias, scale, power);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_defaults() {
        let light = Light::default();
        assert_eq!(light.position, Vec3::new(2.0, 2.0, 3.0));
        assert_eq!(light.color, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(light.attenuation, 1.0);
        assert_eq!(light.intensity, 1.0);
    }

    #[test]
    fn test_light_builder() {
        let light = Light::default()
            .with_position(0.0, 4.0, 0.0)
            .with_color(1.0, 1.0, 1.0)
            .with_attenuation(0.5);
        assert_eq!(light.position, Vec3::new(0.0, 4.0, 0.0));
        assert_eq!(light.attenuation, 0.5);
    }

    #[test]
    fn test_negative_attenuation_clamped() {
        let light = Light::default().with_attenuation(-2.0);
        assert_eq!(light.attenuation, 0.0);
    }

    #[test]
    fn test_material_defaults() {
        let mat = Material::default();
        assert_eq!(mat.ambient, Vec3::ONE);
        assert_eq!(mat.diffuse, Vec3::ZERO);
        assert_eq!(mat.shininess, 8.0);
        assert_eq!(mat.fresnel, Fresnel::new(0.0, 1.0, 4.0));
    }

    #[test]
    fn test_serde_round_trip() {
        let light = Light::default().with_color(0.3, 0.6, 0.9);
        let json = serde_json::to_string(&light).unwrap();
        let back: Light = serde_json::from_str(&json).unwrap();
        assert_eq!(light, back);
    }
}
