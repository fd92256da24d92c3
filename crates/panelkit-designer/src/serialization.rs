//! Serialization and deserialization for panel projects.
//!
//! Panels persist as a versioned JSON payload wrapping the whole
//! [`PanelModel`]. Validation is structural and happens through typed
//! deserialization: every dimension and option field must be present with
//! the right type, element ids must be strings, element types must come
//! from the closed enum, and properties must match one of the known shapes.
//! Any mismatch, unparseable text included, surfaces as the single
//! [`SerializationError::SchemaMismatch`] error so callers can show one
//! message and leave their in-memory model untouched.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use panelkit_core::SerializationError;

use crate::model::PanelModel;

/// Current project format version. Monotonically increasing; readers reject
/// payloads with a strictly greater version.
pub const SERIALIZATION_VERSION: u32 = 1;

/// A versioned, persistable panel payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializedPanel {
    pub version: u32,
    pub model: PanelModel,
}

/// Encodes a model as a versioned JSON document.
pub fn serialize_panel_model(model: &PanelModel) -> Result<String, SerializationError> {
    let payload = SerializedPanel {
        version: SERIALIZATION_VERSION,
        model: model.clone(),
    };
    Ok(serde_json::to_string(&payload)?)
}

/// Decodes and validates a serialized panel payload.
pub fn parse_serialized_panel(payload: &str) -> Result<SerializedPanel, SerializationError> {
    let parsed: SerializedPanel =
        serde_json::from_str(payload).map_err(|_| SerializationError::SchemaMismatch)?;
    validate_serialized_panel(&parsed)?;
    Ok(parsed)
}

/// Checks the version gate on an already-structured payload. Forward
/// incompatibility is explicit and fatal, not best-effort.
pub fn validate_serialized_panel(payload: &SerializedPanel) -> Result<(), SerializationError> {
    if payload.version > SERIALIZATION_VERSION {
        return Err(SerializationError::SchemaMismatch);
    }
    Ok(())
}

/// Convenience wrapper returning just the model.
pub fn deserialize_panel_model(payload: &str) -> Result<PanelModel, SerializationError> {
    Ok(parse_serialized_panel(payload)?.model)
}

/// Writes a model to a project file on disk.
pub fn write_panel_file(path: impl AsRef<Path>, model: &PanelModel) -> anyhow::Result<()> {
    let path = path.as_ref();
    let json = serialize_panel_model(model)?;
    fs::write(path, json).with_context(|| format!("Failed to write panel file {}", path.display()))
}

/// Reads a model back from a project file on disk.
pub fn read_panel_file(path: impl AsRef<Path>) -> anyhow::Result<PanelModel> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read panel file {}", path.display()))?;
    let model = deserialize_panel_model(&text)
        .with_context(|| format!("Failed to parse panel file {}", path.display()))?;
    Ok(model)
}
