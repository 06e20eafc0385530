//! # Published Shape Schemas
//!
//! JSON Schema (Draft 2020-12) documents describing each record shape, for
//! consumers that validate with generic schema tooling instead of this
//! crate. They mirror the validator's rules with two exceptions that JSON
//! Schema cannot express:
//!
//! - The calendar check on `date` is only an annotation (`format`).
//! - `"type": "integer"` accepts integral floats such as `30.0`, which the
//!   validator rejects for `age`.
//!
//! So the schemas accept everything the validator accepts, and a little more.
//! Unknown properties are allowed, matching the validator.

use serde_json::{json, Value};

use crate::validate::RecordKind;

const DRAFT_2020_12: &str = "https://json-schema.org/draft/2020-12/schema";

/// Slug pattern. The class lists the Unicode `White_Space` characters, the
/// set `char::is_whitespace` rejects; ECMA-262 `\s` differs (it includes
/// U+FEFF and excludes U+0085).
const SLUG_PATTERN: &str = "^[^\\t\\n\\x0B\\f\\r \\u0085\\u00A0\\u1680\\u2000-\\u200A\\u2028\\u2029\\u202F\\u205F\\u3000]+$";

/// The JSON Schema for `kind`.
pub fn shape_schema(kind: RecordKind) -> Value {
    match kind {
        RecordKind::Post => post_schema(),
        RecordKind::Person => person_schema(),
    }
}

fn post_schema() -> Value {
    json!({
        "$schema": DRAFT_2020_12,
        "title": "PostRecord",
        "type": "object",
        "required": ["title", "slug", "date", "content", "author"],
        "properties": {
            "title": { "type": "string" },
            "slug": {
                "type": "string",
                "minLength": 1,
                "pattern": SLUG_PATTERN
            },
            "date": { "type": "string", "format": "date" },
            "content": { "type": "string" },
            "tags": {
                "type": "array",
                "items": { "type": "string" }
            },
            "author": { "type": "string" }
        }
    })
}

fn person_schema() -> Value {
    json!({
        "$schema": DRAFT_2020_12,
        "title": "PersonRecord",
        "type": "object",
        "required": ["name", "age"],
        "properties": {
            "name": { "type": "string" },
            "age": { "type": "integer", "minimum": 0 }
        }
    })
}
