//! Lighting shader generation facade
//!
//! [`LightingRig`] is the caller-owned configuration for one shader build:
//! the active shading model plus the owned light registry and material
//! catalogue. [`LightingShader::generate`] turns a rig into the final GLSL
//! text; the artifact also knows how to wrap itself into a complete
//! stand-alone fragment shader for quick visualization.
//!
//! Generation is pure and synchronous. Concurrent shader builds each own
//! their rig; nothing in this module touches shared state.
//!
//! Author: Moroya Sakamoto

use crate::lights::LightRegistry;
use crate::materials::MaterialCatalogue;
use crate::shading::{GeneratorInput, ShadingModel};
use crate::types::{Light, Material};
use serde::{Deserialize, Serialize};

/// Caller-owned configuration for one shader build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LightingRig {
    /// Active shading model
    pub model: ShadingModel,
    /// Light table for this build
    pub lights: LightRegistry,
    /// Material table for this build
    pub materials: MaterialCatalogue,
}

impl LightingRig {
    /// Create a rig with the default model (`directional`) and empty tables
    pub fn new() -> Self {
        LightingRig::default()
    }

    /// Set the shading model
    pub fn with_model(mut self, model: ShadingModel) -> Self {
        self.model = model;
        self
    }

    /// Register a light
    pub fn with_light(mut self, light: Light) -> Self {
        self.lights.push(light);
        self
    }

    /// Register a material
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Generate the lighting shader for this rig
    pub fn generate(&self) -> LightingShader {
        LightingShader::generate(self)
    }
}

/// Generated lighting shader text
///
/// `source` is the spliced GLSL: table declarations plus the selected
/// model's `lighting()` definition, assuming an environment that defines
/// `scene` and `softshadow`. Use [`to_fragment_shader`] to embed it into a
/// self-contained raymarching fragment shader instead.
///
/// [`to_fragment_shader`]: LightingShader::to_fragment_shader
#[derive(Debug, Clone)]
pub struct LightingShader {
    /// The generated GLSL source code
    pub source: String,
    /// Model the source was generated from
    pub model: ShadingModel,
    /// Light count the source was generated against
    pub light_count: usize,
    /// GLSL version used by the stand-alone wrapper (default: 450)
    pub version: u32,
}

impl LightingShader {
    /// Generate the lighting shader for a rig
    pub fn generate(rig: &LightingRig) -> Self {
        Self::generate_with_version(rig, 450)
    }

    /// Generate with a specific GLSL version for the stand-alone wrapper
    pub fn generate_with_version(rig: &LightingRig, version: u32) -> Self {
        // Both literals are emitted unconditionally; the debug `normal`
        // model receives and ignores them.
        let lights_literal = rig.lights.emit_lights_literal();
        let materials_literal = rig.materials.emit_materials_literal();
        let light_count = rig.lights.shader_light_count();

        let input = GeneratorInput {
            light_count,
            lights_literal: &lights_literal,
            materials_literal: &materials_literal,
        };
        let source = rig.model.generate(&input);

        LightingShader {
            source,
            model: rig.model,
            light_count,
            version,
        }
    }

    /// Get the generated lighting function text (for embedding in a larger
    /// shader that resolves the glslify imports itself)
    pub fn lighting_function(&self) -> &str {
        &self.source
    }

    /// Generate a complete raymarching fragment shader (Shadertoy-style)
    ///
    /// Embeds the generated lighting source together with a demo `scene`
    /// SDF, `softshadow`, and concrete `calcAO`/`orenn`/`gauss`
    /// implementations replacing the glslify imports, so the output compiles
    /// without any module resolution step.
    pub fn to_fragment_shader(&self) -> String {
        let mut helpers = String::new();
        helpers.push_str(HELPER_CALC_AO);
        helpers.push('\n');
        helpers.push_str(HELPER_SOFTSHADOW);
        helpers.push('\n');
        if self.model == ShadingModel::OrenNayar {
            helpers.push_str(HELPER_ORENN);
            helpers.push('\n');
            helpers.push_str(HELPER_GAUSS);
            helpers.push('\n');
        }

        format!(
            r#"#version {}

// ALICE-Lighting generated fragment shader ({} model)

precision highp float;

uniform vec2 iResolution;
uniform float iTime;

out vec4 fragColor;

// demo scene: unit sphere resting on a ground plane
float scene( vec3 p ) {{
  float sph = length( p - vec3( 0.0, 0.0, 0.0 ) ) - 1.0;
  float gnd = p.y + 1.0;
  return min( sph, gnd );
}}

{}
{}

vec3 calcNormal( vec3 p ) {{
  const float h = 0.0001;
  const vec2 k = vec2( 1.0, -1.0 );
  return normalize(
    k.xyy * scene( p + k.xyy * h ) +
    k.yyx * scene( p + k.yyx * h ) +
    k.yxy * scene( p + k.yxy * h ) +
    k.xxx * scene( p + k.xxx * h )
  );
}}

void main() {{
  vec2 uv = ( gl_FragCoord.xy - 0.5 * iResolution.xy ) / iResolution.y;

  // Camera
  vec3 ro = vec3( 0.0, 0.5, 5.0 );
  vec3 rd = normalize( vec3( uv, -1.5 ) );

  // Raymarching
  float t = 0.0;
  for( int i = 0; i < 128; i++ ) {{
    vec3 p = ro + rd * t;
    float d = scene( p );
    if( d < 0.001 || t > 100.0 ) break;
    t += d;
  }}

  vec3 col = vec3( 0.0 );
  if( t < 100.0 ) {{
    vec3 p = ro + rd * t;
    vec3 nor = calcNormal( p );
    col = lighting( p, nor, ro, rd, 0.0 );
  }}

  fragColor = vec4( col, 1.0 );
}}
"#,
            self.version,
            self.model,
            helpers,
            strip_glslify_pragmas(&self.source)
        )
    }
}

/// Drop `#pragma glslify:` import lines; the stand-alone wrapper provides
/// concrete implementations instead.
fn strip_glslify_pragmas(source: &str) -> String {
    source
        .lines()
        .filter(|line| !line.trim_start().starts_with("#pragma glslify:"))
        .collect::<Vec<_>>()
        .join("\n")
}

// GLSL implementations standing in for the glslify imports in stand-alone
// output. `calcAO` mirrors glsl-sdf-ops/ao, `orenn` glsl-diffuse-oren-nayar,
// `gauss` glsl-specular-gaussian.

const HELPER_CALC_AO: &str = r#"float calcAO( vec3 pos, vec3 nor ) {
  float occ = 0.0;
  float sca = 1.0;
  for( int i = 0; i < 5; i++ ) {
    float h = 0.01 + 0.12 * float( i ) / 4.0;
    float d = scene( pos + h * nor );
    occ += ( h - d ) * sca;
    sca *= 0.95;
  }
  return clamp( 1.0 - 3.0 * occ, 0.0, 1.0 );
}"#;

const HELPER_SOFTSHADOW: &str = r#"float softshadow( vec3 ro, vec3 rd, float mint, float maxt, float k ) {
  float res = 1.0;
  float t = mint;
  for( int i = 0; i < 64; i++ ) {
    if( t >= maxt ) break;
    float h = scene( ro + rd * t );
    if( h < 0.001 ) return 0.0;
    res = min( res, k * h / t );
    t += h;
  }
  return clamp( res, 0.0, 1.0 );
}"#;

const HELPER_ORENN: &str = r#"float orenn( vec3 lightDirection, vec3 viewDirection, vec3 surfaceNormal, float roughness, float albedo ) {
  float LdotV = dot( lightDirection, viewDirection );
  float NdotL = dot( lightDirection, surfaceNormal );
  float NdotV = dot( surfaceNormal, viewDirection );
  float s = LdotV - NdotL * NdotV;
  float t = mix( 1.0, max( NdotL, NdotV ), step( 0.0, s ) );
  float sigma2 = roughness * roughness;
  float A = 1.0 + sigma2 * ( albedo / ( sigma2 + 0.13 ) + 0.5 / ( sigma2 + 0.33 ) );
  float B = 0.45 * sigma2 / ( sigma2 + 0.09 );
  return albedo * max( 0.0, NdotL ) * ( A + B * s / t ) / 3.14159265;
}"#;

const HELPER_GAUSS: &str = r#"float gauss( vec3 lightDirection, vec3 viewDirection, vec3 surfaceNormal, float shininess ) {
  vec3 H = normalize( lightDirection + viewDirection );
  float theta = acos( dot( H, surfaceNormal ) );
  float w = theta / shininess;
  return exp( -w * w );
}"#;
