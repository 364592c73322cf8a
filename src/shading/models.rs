//! GLSL generator bodies for the shading-model catalogue
//!
//! Each generator splices the light/material table literals and the light
//! count into a GLSL template and returns self-contained source: the
//! `MAX_LIGHTS` constant where applicable, the glslify import pragmas the
//! body needs, both table declarations, and exactly one
//! `vec3 lighting(vec3, vec3, vec3, vec3, float)` definition.
//!
//! The surrounding shader environment is expected to define a `scene` SDF
//! map (referenced by the ambient-occlusion import) and
//! `softshadow(vec3, vec3, float, float, float)`.
//!
//! Author: Moroya Sakamoto

use super::GeneratorInput;

/// Per-light Lambert diffuse + Phong specular, ambient and Fresnel rim
/// gated by ambient occlusion, gamma correction and inverse-square
/// attenuation applied per light.
pub(super) fn directional(input: &GeneratorInput<'_>) -> String {
    format!(
        r#"const int MAX_LIGHTS = {};
#pragma glslify: calcAO = require( 'glsl-sdf-ops/ao', map = scene )

{}

{}

vec3 lighting( vec3 surfacePosition, vec3 normal, vec3 rayOrigin, vec3 rayDirection, float materialID ) {{
  vec3 outputColor = vec3( 0. );

  // applies to all lights
  float occlusion = calcAO( surfacePosition, normal );

  Material mat = materials[ int( materialID ) ];

  for( int i = 0; i < MAX_LIGHTS; i++ ) {{
    Light light = lights[ i ];

    vec3 surfaceToLightDirection = normalize( light.position - surfacePosition );

    // similarity between normal and direction to light
    float diffuseCoefficient = dot( normal, surfaceToLightDirection );

    // reflection angle for light striking the surface
    vec3 angleOfReflection = reflect( -surfaceToLightDirection, normal );

    // does the reflected light travel toward the camera
    float specularAngle = clamp( dot( angleOfReflection, -rayDirection ), 0., 1. );
    float specularCoefficient = pow( specularAngle, mat.shininess );

    float attenuation = 1. / ( light.attenuation * pow( length( light.position - surfacePosition ), 2. ) );

    float fresnel = mat.fresnel.bias + mat.fresnel.scale * pow( 1.0 + dot( rayDirection, normal ), mat.fresnel.power );

    diffuseCoefficient *= softshadow( surfacePosition, normalize( light.position ), 0.02, 2.5, 8. );

    vec3 color = vec3( 0. );
    color += 1.2 * diffuseCoefficient * mat.diffuse * light.color;
    color += 2.2 * specularCoefficient * mat.specular * diffuseCoefficient * light.color;
    color += 0.3 * ( mat.ambient * light.color ) * occlusion;
    color += ( fresnel * light.color ) * occlusion;

    // gamma correction must occur before attenuation, so it runs per light
    vec3 gammaCorrectedColor = pow( color, vec3( 1. / 2.2 ) );
    outputColor += 2. * gammaCorrectedColor * attenuation;
  }}

  return outputColor;
}}
"#,
        input.light_count, input.materials_literal, input.lights_literal
    )
}

/// `directional` pipeline with an Oren-Nayar rough diffuse term and a
/// Gaussian specular lobe, both imported as glslify modules.
pub(super) fn oren_nayar(input: &GeneratorInput<'_>) -> String {
    format!(
        r#"const int MAX_LIGHTS = {};
#pragma glslify: calcAO = require( 'glsl-sdf-ops/ao', map = scene )
#pragma glslify: orenn = require( 'glsl-diffuse-oren-nayar' )
#pragma glslify: gauss = require( 'glsl-specular-gaussian' )

{}

{}

vec3 lighting( vec3 surfacePosition, vec3 normal, vec3 rayOrigin, vec3 rayDirection, float materialID ) {{
  vec3 outputColor = vec3( 0. );

  // applies to all lights
  float occlusion = calcAO( surfacePosition, normal );

  Material mat = materials[ int( materialID ) ];

  for( int i = 0; i < MAX_LIGHTS; i++ ) {{
    Light light = lights[ i ];

    vec3 surfaceToLightDirection = normalize( light.position - surfacePosition );

    float diffuseCoefficient = orenn( surfaceToLightDirection, -rayDirection, normal, 0.15, 4.0 );
    float specularCoefficient = gauss( surfaceToLightDirection, -rayDirection, normal, .5 );

    float attenuation = 1. / ( light.attenuation * pow( length( light.position - surfacePosition ), 2. ) );

    float fresnel = mat.fresnel.bias + mat.fresnel.scale * pow( 1.0 + dot( rayDirection, normal ), mat.fresnel.power );

    diffuseCoefficient *= softshadow( surfacePosition, normalize( light.position ), 0.02, 2.5, 8. );

    vec3 color = vec3( 0. );
    color += 1.2 * diffuseCoefficient * mat.diffuse * light.color;
    color += 2.2 * specularCoefficient * mat.specular * diffuseCoefficient * light.color;
    color += 0.3 * ( mat.ambient * light.color ) * occlusion;
    color += ( fresnel * light.color ) * occlusion;

    // gamma correction must occur before attenuation, so it runs per light
    vec3 gammaCorrectedColor = pow( color, vec3( 1. / 2.2 ) );
    outputColor += 2. * gammaCorrectedColor * attenuation;
  }}

  return outputColor;
}}
"#,
        input.light_count, input.materials_literal, input.lights_literal
    )
}

/// Single-sun outdoor model: every non-ambient term occlusion-gated.
pub(super) fn global(input: &GeneratorInput<'_>) -> String {
    global_template(input, true)
}

/// `global` with the skydome, backlight and Fresnel terms left ungated.
pub(super) fn global_no_occlusion_rim(input: &GeneratorInput<'_>) -> String {
    global_template(input, false)
}

/// Shared body for the two `global` variants; `occlude_rim` controls whether
/// the skydome, backlight and Fresnel contributions multiply in `occ`.
fn global_template(input: &GeneratorInput<'_>, occlude_rim: bool) -> String {
    let rim_occ = if occlude_rim { " * occ" } else { "" };

    format!(
        r#"#pragma glslify: calcAO = require( 'glsl-sdf-ops/ao', map = scene )

{materials}

{lights}

vec3 lighting( vec3 pos, vec3 nor, vec3 ro, vec3 rd, float materialID ) {{
  Light light = lights[ 0 ];
  vec3  ref = reflect( rd, nor );
  float occ = calcAO( pos, nor );
  vec3  lig = normalize( light.position );
  float amb = clamp( 0.5 + 0.5 * nor.y, 0.0, 1.0 );
  float dif = clamp( dot( nor, lig ), 0.0, 1.0 );

  // simulated backlight
  float bac = clamp( dot( nor, normalize( vec3( -lig.x, 0.0, -lig.z ) ) ), 0.0, 1.0 ) * clamp( 1.0 - pos.y, 0.0, 1.0 );

  // simulated skydome light
  float dom = smoothstep( -0.1, 0.1, ref.y );
  float fre = pow( clamp( 1.0 + dot( nor, rd ), 0.0, 1.0 ), 2.0 );
  float spe = pow( clamp( dot( ref, lig ), 0.0, 1.0 ), 8.0 );

  dif *= softshadow( pos, lig, 0.02, 2.5, 8. );
  dom *= softshadow( pos, ref, 0.02, 2.5, 8. );

  Material mat = materials[ int( materialID ) ];

  vec3 brdf = vec3( 0.0 );
  brdf += 1.20 * dif * vec3( 1.00, 0.90, 0.60 ) * mat.diffuse * light.color;
  brdf += 2.20 * spe * vec3( 1.00, 0.90, 0.60 ) * dif * mat.specular * light.color;
  brdf += 0.30 * amb * vec3( 0.50, 0.70, 1.00 ) * occ * mat.ambient * light.color;
  brdf += 0.40 * dom * vec3( 0.50, 0.70, 1.00 ){rim};
  brdf += 0.70 * bac * vec3( 0.25 ){rim};
  brdf += 0.40 * ( fre * light.color ){rim};

  return brdf;
}}
"#,
        materials = input.materials_literal,
        lights = input.lights_literal,
        rim = rim_occ
    )
}

/// Debug view: the table literals are accepted but deliberately unused.
pub(super) fn normal(_input: &GeneratorInput<'_>) -> String {
    String::from(
        "vec3 lighting( vec3 pos, vec3 nor, vec3 ro, vec3 rd, float materialID ) {\n  return nor;\n}\n",
    )
}
