//! Shape-driven typed decoding of raw JSON text.

use serde_json::{Map, Value};

use crate::diagnostic::{DecodeDiagnostic, PathSegment};
use crate::shape::{ArrShape, ObjShape, Shape};

/// Decode raw text against a shape.
///
/// Parses `raw` as JSON, then walks the value against `shape` depth-first
/// in field order. The first structural problem found is returned as the
/// diagnostic; problems are not accumulated. On success the parsed value
/// is returned, structurally guaranteed to match the shape.
pub fn decode(raw: &str, shape: &Shape) -> Result<Value, DecodeDiagnostic> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| DecodeDiagnostic::data_corrupted(e.to_string()))?;
    let mut path = Vec::new();
    check(&value, shape, &mut path)?;
    Ok(value)
}

/// Human-readable name of a JSON value's type.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check(
    value: &Value,
    shape: &Shape,
    path: &mut Vec<PathSegment>,
) -> Result<(), DecodeDiagnostic> {
    match shape {
        Shape::Any => Ok(()),
        Shape::Bool => check_present(value.is_boolean(), value, shape, path),
        Shape::Num => check_present(value.is_number(), value, shape, path),
        Shape::Str => check_present(value.is_string(), value, shape, path),
        Shape::Arr(arr) => match value {
            Value::Array(items) => check_arr(items, arr, path),
            _ => check_present(false, value, shape, path),
        },
        Shape::Obj(obj) => match value {
            Value::Object(map) => check_obj(map, obj, path),
            _ => check_present(false, value, shape, path),
        },
    }
}

/// Classifies a non-matching value: `null` in a required slot is a missing
/// value, anything else is a type mismatch.
fn check_present(
    ok: bool,
    value: &Value,
    shape: &Shape,
    path: &[PathSegment],
) -> Result<(), DecodeDiagnostic> {
    if ok {
        return Ok(());
    }
    if value.is_null() {
        return Err(DecodeDiagnostic::missing_value(path.to_vec()));
    }
    Err(DecodeDiagnostic::type_mismatch(
        path.to_vec(),
        shape.kind(),
        value_kind(value),
    ))
}

fn check_arr(
    items: &[Value],
    shape: &ArrShape,
    path: &mut Vec<PathSegment>,
) -> Result<(), DecodeDiagnostic> {
    for (i, item) in items.iter().enumerate() {
        path.push(PathSegment::Index(i));
        check(item, &shape.element, path)?;
        path.pop();
    }
    Ok(())
}

fn check_obj(
    map: &Map<String, Value>,
    shape: &ObjShape,
    path: &mut Vec<PathSegment>,
) -> Result<(), DecodeDiagnostic> {
    for field in &shape.fields {
        match map.get(&field.key) {
            Some(value) => {
                if field.optional && value.is_null() {
                    continue;
                }
                path.push(PathSegment::Key(field.key.clone()));
                check(value, &field.shape, path)?;
                path.pop();
            }
            None if field.optional => {}
            None => {
                return Err(DecodeDiagnostic::missing_key(
                    path.clone(),
                    &field.key,
                    key_context(map),
                ));
            }
        }
    }
    Ok(())
}

fn key_context(map: &Map<String, Value>) -> String {
    if map.is_empty() {
        return "object has no keys".to_string();
    }
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    format!("object has keys `{}`", keys.join("`, `"))
}
