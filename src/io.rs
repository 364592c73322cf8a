//! Rig persistence
//!
//! Saves and loads [`LightingRig`] configurations as human-readable JSON
//! (`.rig.json`), streaming through `BufReader`/`BufWriter`.
//!
//! Author: Moroya Sakamoto

use crate::shader::LightingRig;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Rig persistence errors
#[derive(Error, Debug)]
pub enum RigIoError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid file format
    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Save a lighting rig to a `.rig.json` file
pub fn save_rig(rig: &LightingRig, path: impl AsRef<Path>) -> Result<(), RigIoError> {
    let path = path.as_ref();
    check_extension(path)?;

    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, rig).map_err(|e| RigIoError::Serialization(e.to_string()))?;

    Ok(())
}

/// Load a lighting rig from a `.rig.json` file
pub fn load_rig(path: impl AsRef<Path>) -> Result<LightingRig, RigIoError> {
    let path = path.as_ref();
    check_extension(path)?;

    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let rig: LightingRig =
        serde_json::from_reader(reader).map_err(|e| RigIoError::Serialization(e.to_string()))?;

    Ok(rig)
}

/// Serialize a rig to a JSON string
pub fn to_json_string(rig: &LightingRig) -> Result<String, RigIoError> {
    serde_json::to_string_pretty(rig).map_err(|e| RigIoError::Serialization(e.to_string()))
}

/// Parse a rig from a JSON string
pub fn from_json_string(json: &str) -> Result<LightingRig, RigIoError> {
    serde_json::from_str(json).map_err(|e| RigIoError::Serialization(e.to_string()))
}

fn check_extension(path: &Path) -> Result<(), RigIoError> {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    if name.ends_with(".rig.json") {
        Ok(())
    } else {
        Err(RigIoError::InvalidFormat(format!(
            "expected .rig.json extension: {}",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shading::ShadingModel;
    use crate::types::Light;

    #[test]
    fn test_json_string_round_trip() {
        let rig = LightingRig::new()
            .with_model(ShadingModel::Global)
            .with_light(Light::default().with_color(1.0, 0.9, 0.6));

        let json = to_json_string(&rig).unwrap();
        let back = from_json_string(&json).unwrap();

        assert_eq!(back.model, ShadingModel::Global);
        assert_eq!(back.lights.len(), 1);
        assert_eq!(back.lights.lights()[0].color, rig.lights.lights()[0].color);
    }

    #[test]
    fn test_wrong_extension_rejected() {
        let rig = LightingRig::new();
        let err = save_rig(&rig, "lights.json").unwrap_err();
        assert!(matches!(err, RigIoError::InvalidFormat(_)));
    }

    #[test]
    fn test_garbage_json_rejected() {
        let err = from_json_string("{ not json").unwrap_err();
        assert!(matches!(err, RigIoError::Serialization(_)));
    }
}
