//! Rendering of validation outcomes for stdout.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};

use recshape_schema::{CollectionError, RecordKind, ShapeError};

use crate::config::OutputFormat;

/// Print a value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// JSON body for a successful validation.
pub fn success_json<T: Serialize>(key: &str, value: &T) -> Result<Value> {
    let value = serde_json::to_value(value).context("failed to serialize record")?;
    Ok(json!({ "valid": true, key: value }))
}

/// Text lines describing a shape failure.
pub fn shape_failure_lines(kind: RecordKind, source: &str, err: &ShapeError) -> Vec<String> {
    let mut lines = vec![format!("FAIL: {source} is not a valid {kind}")];
    lines.extend(err.problems().iter().map(|p| format!("  {p}")));
    lines
}

/// Print a shape failure in the requested format.
pub fn print_shape_failure(
    format: OutputFormat,
    kind: RecordKind,
    source: &str,
    err: &ShapeError,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in shape_failure_lines(kind, source, err) {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => print_json(&json!({
            "valid": false,
            "kind": kind,
            "problems": err.problems(),
        })),
    }
}

/// Text lines describing a collection failure.
pub fn collection_failure_lines(source: &str, err: &CollectionError) -> Vec<String> {
    let mut lines = vec![format!("FAIL: {source}: {err}")];
    if let CollectionError::Invalid {
        failures,
        duplicates,
    } = err
    {
        for failure in failures {
            lines.extend(
                failure
                    .error
                    .problems()
                    .iter()
                    .map(|p| format!("  [{}] {p}", failure.index)),
            );
        }
        lines.extend(duplicates.iter().map(|d| format!("  {d}")));
    }
    lines
}

/// Print a collection failure in the requested format.
pub fn print_collection_failure(
    format: OutputFormat,
    source: &str,
    err: &CollectionError,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in collection_failure_lines(source, err) {
                println!("{line}");
            }
            Ok(())
        }
        OutputFormat::Json => {
            let mut body = serde_json::to_value(err).context("failed to serialize error")?;
            if let Value::Object(map) = &mut body {
                map.insert("valid".to_string(), Value::Bool(false));
            }
            print_json(&body)
        }
    }
}
