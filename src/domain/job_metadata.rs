use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use super::{AppError, ImageReference};

/// Key the notifier adds to every submitted job.
pub const IMAGE_NAME_KEY: &str = "image_name";

const NAME_KEY: &str = "name";

/// Parsed contents of a job's metadata file.
///
/// Only `name` is interpreted. Every other field is kept as-is, in its
/// original order, so the coordinator receives exactly what the job author
/// wrote plus `image_name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JobMetadata {
    fields: Map<String, Value>,
}

impl JobMetadata {
    /// Parse metadata read from `path`.
    ///
    /// Fails when the content is not a JSON object or has no string `name`.
    pub fn parse(path: &Path, content: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(content).map_err(|e| AppError::MetadataParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let Value::Object(fields) = value else {
            return Err(AppError::MetadataParse {
                path: path.to_path_buf(),
                details: format!("expected a JSON object, found {}", json_kind(&value)),
            });
        };

        match fields.get(NAME_KEY) {
            Some(Value::String(_)) => Ok(Self { fields }),
            _ => Err(AppError::MissingJobName { path: path.to_path_buf() }),
        }
    }

    pub fn name(&self) -> &str {
        // Presence is checked in `parse`.
        self.fields.get(NAME_KEY).and_then(Value::as_str).unwrap_or_default()
    }

    /// Attach the computed image reference under `image_name`.
    ///
    /// An existing `image_name` is overwritten in place.
    pub fn with_image_name(mut self, image: &ImageReference) -> Self {
        self.fields.insert(IMAGE_NAME_KEY.to_string(), Value::String(image.to_string()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
