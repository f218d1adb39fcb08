//! Schema registry for structured completions
//!
//! A [`Schema`] is a static description of a result shape. It serves two
//! masters: rendering the formatting directive appended to every structured
//! prompt, and validating a decoded completion before it is turned into a
//! typed value. Validation is all-or-nothing; repair belongs to the fallback
//! policy, not here.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

mod catalog;

pub use catalog::SchemaCatalog;

/// Errors raised while validating a completion against a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("No JSON object found in completion")]
    NoJson,

    #[error("Completion is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Expected a JSON object for '{0}'")]
    NotAnObject(String),

    #[error("Missing required field '{0}'")]
    MissingField(String),

    #[error("Field '{field}' has the wrong type, expected {expected}")]
    WrongType { field: String, expected: &'static str },

    #[error("Field '{field}' value {value} is outside {min}..={max}")]
    OutOfRange { field: String, value: i64, min: i64, max: i64 },

    #[error("Field '{field}' has invalid value '{value}', expected one of {allowed:?}")]
    NotInEnum {
        field: String,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Field '{field}' expects {min}-{max} items, got {got}")]
    BadArity {
        field: String,
        got: usize,
        min: usize,
        max: usize,
    },

    #[error("Failed to decode validated object: {0}")]
    Decode(serde_json::Error),
}

/// The type and constraints of one schema field
#[derive(Debug, Clone)]
pub enum FieldType {
    Text,
    Boolean,
    /// Calendar date; RFC 3339 timestamps are coerced to their date part
    Date,
    Integer { min: i64, max: i64 },
    Enum(&'static [&'static str]),
    Array {
        item: Box<Schema>,
        min_items: usize,
        max_items: usize,
    },
}

/// One field in a schema
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub description: &'static str,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self { name, ty, description, required: true }
    }

    pub fn optional(name: &'static str, ty: FieldType, description: &'static str) -> Self {
        Self { name, ty, description, required: false }
    }
}

/// A static result-shape description
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: &'static str,
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self { name, fields }
    }

    /// Render the formatting directive appended to a structured prompt
    pub fn format_instructions(&self) -> String {
        debug!(schema = %self.name, "format_instructions: called");
        let mut out = String::from("The output must be a single JSON object with these fields:\n");
        render_fields(&mut out, &self.fields, 0);
        out.push_str(
            "\nReturn ONLY the JSON object. Do not wrap it in markdown fences or add commentary.",
        );
        out
    }

    /// Validate a decoded completion against this schema, coercing where the
    /// declared type allows it (integer-valued floats, timestamp-to-date)
    ///
    /// Returns the conformed value on success so callers can decode it into a
    /// typed struct. Any violation fails the whole value.
    pub fn conform(&self, mut value: Value) -> Result<Value, SchemaError> {
        debug!(schema = %self.name, "conform: called");
        self.conform_in_place(&mut value)?;
        Ok(value)
    }

    fn conform_in_place(&self, value: &mut Value) -> Result<(), SchemaError> {
        let Some(object) = value.as_object_mut() else {
            return Err(SchemaError::NotAnObject(self.name.to_string()));
        };

        for field in &self.fields {
            match object.get_mut(field.name) {
                None | Some(Value::Null) => {
                    if field.required {
                        return Err(SchemaError::MissingField(field.name.to_string()));
                    }
                }
                Some(slot) => conform_field(field, slot)?,
            }
        }

        Ok(())
    }
}

fn conform_field(field: &FieldSpec, slot: &mut Value) -> Result<(), SchemaError> {
    match &field.ty {
        FieldType::Text => {
            if !slot.is_string() {
                return Err(SchemaError::WrongType { field: field.name.to_string(), expected: "string" });
            }
        }
        FieldType::Boolean => {
            if !slot.is_boolean() {
                return Err(SchemaError::WrongType { field: field.name.to_string(), expected: "boolean" });
            }
        }
        FieldType::Date => {
            let Some(raw) = slot.as_str() else {
                return Err(SchemaError::WrongType { field: field.name.to_string(), expected: "date string" });
            };
            let date = crate::temporal::parse_date(raw).map_err(|_| SchemaError::WrongType {
                field: field.name.to_string(),
                expected: "date string (YYYY-MM-DD)",
            })?;
            *slot = Value::String(date.format("%Y-%m-%d").to_string());
        }
        FieldType::Integer { min, max } => {
            let number = match slot.as_i64() {
                Some(n) => n,
                // Models occasionally emit integer-valued floats like 85.0
                None => match slot.as_f64() {
                    Some(f) if f.fract() == 0.0 => f as i64,
                    _ => {
                        return Err(SchemaError::WrongType {
                            field: field.name.to_string(),
                            expected: "integer",
                        });
                    }
                },
            };
            if number < *min || number > *max {
                return Err(SchemaError::OutOfRange {
                    field: field.name.to_string(),
                    value: number,
                    min: *min,
                    max: *max,
                });
            }
            *slot = Value::from(number);
        }
        FieldType::Enum(allowed) => {
            let Some(raw) = slot.as_str() else {
                return Err(SchemaError::WrongType { field: field.name.to_string(), expected: "string" });
            };
            if !allowed.contains(&raw) {
                return Err(SchemaError::NotInEnum {
                    field: field.name.to_string(),
                    value: raw.to_string(),
                    allowed,
                });
            }
        }
        FieldType::Array { item, min_items, max_items } => {
            let Some(items) = slot.as_array_mut() else {
                return Err(SchemaError::WrongType { field: field.name.to_string(), expected: "array" });
            };
            if items.len() < *min_items || items.len() > *max_items {
                return Err(SchemaError::BadArity {
                    field: field.name.to_string(),
                    got: items.len(),
                    min: *min_items,
                    max: *max_items,
                });
            }
            for element in items.iter_mut() {
                item.conform_in_place(element)?;
            }
        }
    }
    Ok(())
}

fn render_fields(out: &mut String, fields: &[FieldSpec], depth: usize) {
    let indent = "  ".repeat(depth);
    for field in fields {
        let requirement = if field.required { "required" } else { "optional, may be null" };
        match &field.ty {
            FieldType::Text => {
                out.push_str(&format!(
                    "{}- \"{}\" (string, {}): {}\n",
                    indent, field.name, requirement, field.description
                ));
            }
            FieldType::Boolean => {
                out.push_str(&format!(
                    "{}- \"{}\" (boolean, {}): {}\n",
                    indent, field.name, requirement, field.description
                ));
            }
            FieldType::Date => {
                out.push_str(&format!(
                    "{}- \"{}\" (date string YYYY-MM-DD, {}): {}\n",
                    indent, field.name, requirement, field.description
                ));
            }
            FieldType::Integer { min, max } => {
                out.push_str(&format!(
                    "{}- \"{}\" (integer {}-{}, {}): {}\n",
                    indent, field.name, min, max, requirement, field.description
                ));
            }
            FieldType::Enum(allowed) => {
                let choices = allowed
                    .iter()
                    .map(|v| format!("\"{}\"", v))
                    .collect::<Vec<_>>()
                    .join(", ");
                out.push_str(&format!(
                    "{}- \"{}\" (one of: {}, {}): {}\n",
                    indent, field.name, choices, requirement, field.description
                ));
            }
            FieldType::Array { item, min_items, max_items } => {
                out.push_str(&format!(
                    "{}- \"{}\" (array of {}-{} objects, {}): {}. Each object has:\n",
                    indent, field.name, min_items, max_items, requirement, field.description
                ));
                render_fields(out, &item.fields, depth + 1);
            }
        }
    }
}
