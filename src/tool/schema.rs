//! Input shapes for tools.
//!
//! The advertised schema is generated from each tool's typed argument record,
//! and the same schema is what incoming argument bags are checked against.
//! Validation collects every violation instead of stopping at the first.

use jsonschema::JSONSchema;
use jsonschema::error::{ValidationError, ValidationErrorKind};
use schemars::JsonSchema;
use schemars::generate::SchemaSettings;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One field that failed validation. `field` is a dotted path such as
/// `files[1].path`; empty for the argument bag itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "arguments: {}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// JSON Schema (draft 2020-12, subschemas inlined) for an argument record.
#[must_use]
pub fn input_schema<T: JsonSchema>() -> Value {
    let generator = SchemaSettings::draft2020_12()
        .with(|s| s.inline_subschemas = true)
        .into_generator();
    let mut schema = Value::from(generator.into_root_schema_for::<T>());
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
    }
    schema
}

/// Compile an input shape once so every invocation reuses the validator.
pub fn compile(schema: &Value) -> Result<JSONSchema, String> {
    JSONSchema::compile(schema).map_err(|e| format!("path '{}': {e}", e.instance_path))
}

/// Check `value` against a compiled shape, returning every violation found.
#[must_use]
pub fn validate(validator: &JSONSchema, value: &Value) -> Vec<FieldViolation> {
    match validator.validate(value) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.map(to_violation).collect(),
    }
}

fn to_violation(error: ValidationError<'_>) -> FieldViolation {
    let path = field_path(&error.instance_path.to_string());
    match &error.kind {
        // Reported against the parent object; address the missing field instead
        ValidationErrorKind::Required { property } => {
            let name = property.as_str().map_or_else(|| property.to_string(), str::to_string);
            FieldViolation::new(join(&path, &name), "is required")
        }
        _ => FieldViolation::new(path, error.to_string()),
    }
}

/// `/files/1/path` becomes `files[1].path`.
fn field_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .fold(String::new(), |path, segment| {
            if segment.parse::<usize>().is_ok() {
                format!("{path}[{segment}]")
            } else {
                join(&path, &segment.replace("~1", "/").replace("~0", "~"))
            }
        })
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}
