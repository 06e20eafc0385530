//! # Document Loading
//!
//! Turns JSON or YAML text into the untyped `serde_json::Value` consumed by
//! the validators. YAML is converted value-by-value into its JSON-compatible
//! subset; tags are dropped and only string, number, and boolean map keys
//! are accepted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Text format of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension: `.yaml`/`.yml` are YAML,
    /// anything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// A document could not be read or parsed.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The text is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The text is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The YAML uses a construct with no JSON equivalent.
    #[error("YAML-to-JSON conversion failed: {0}")]
    Conversion(String),
}

/// Read and parse a document, choosing the format from the file extension.
///
/// # Errors
///
/// Returns [`DocumentError::Read`] if the file cannot be read, or a parse
/// error from [`parse_document`].
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_document(&content, DocumentFormat::from_path(path))
}

/// Parse in-memory document text.
///
/// # Errors
///
/// Returns [`DocumentError::Json`] or [`DocumentError::Yaml`] on syntax
/// errors, and [`DocumentError::Conversion`] for YAML that cannot be
/// represented as JSON.
pub fn parse_document(text: &str, format: DocumentFormat) -> Result<Value, DocumentError> {
    match format {
        DocumentFormat::Json => Ok(serde_json::from_str(text)?),
        DocumentFormat::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(text)?;
            yaml_to_json_value(&yaml).map_err(DocumentError::Conversion)
        }
    }
}

/// Convert a YAML value into its JSON equivalent.
///
/// Tags are dropped. Scalar keys are rendered as JSON strings, so two keys
/// that collide after rendering (`1` and `"1"`) are an error rather than a
/// silent overwrite.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    use serde_yaml::Value as Yaml;

    Ok(match yaml {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(*b),
        Yaml::Number(n) => Value::Number(json_number(n)?),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Sequence(items) => Value::Array(
            items
                .iter()
                .map(yaml_to_json_value)
                .collect::<Result<_, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut object = serde_json::Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                let key = json_key(key)?;
                if object.contains_key(&key) {
                    return Err(format!("duplicate map key {key:?}"));
                }
                object.insert(key, yaml_to_json_value(value)?);
            }
            Value::Object(object)
        }
        Yaml::Tagged(tagged) => yaml_to_json_value(&tagged.value)?,
    })
}

fn json_number(n: &serde_yaml::Number) -> Result<serde_json::Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .ok_or_else(|| format!("number {n} has no JSON representation"))
}

fn json_key(key: &serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s.clone()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("map key {other:?} is not a scalar")),
    }
}
