// ── Schema-driven flattening ──
//
// Turns a typed record into the generic map/list shape a schema block
// declares. The record is serialized with serde first, then walked
// alongside the block:
//
//   primitive        -> copied after a type check
//   list of prims    -> copied in order
//   single object    -> [flatten(object)]
//   list of objects  -> element-wise flatten, order kept
//   null             -> omitted
//
// A key the block does not declare, or a value of the wrong type, is an
// error naming the full attribute path.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::schema::{
    AttributeType, Block, NestingMode, Schema, SchemaError, check_primitive, join, mismatch,
};

/// Flatten `record` against the named block definition.
///
/// `path` prefixes every path in an error (e.g. `protection_sources.0`).
pub fn flatten<T: Serialize>(
    schema: &Schema,
    block: &str,
    record: &T,
    path: &str,
) -> Result<Map<String, Value>, SchemaError> {
    let value = serde_json::to_value(record).map_err(|e| SchemaError::Encode {
        message: e.to_string(),
    })?;
    let block = schema.resolve(path, block)?;
    flatten_object(schema, block, &value, path)
}

fn flatten_object(
    schema: &Schema,
    block: &Block,
    value: &Value,
    path: &str,
) -> Result<Map<String, Value>, SchemaError> {
    let Value::Object(fields) = value else {
        return Err(mismatch(path, "object".into(), value));
    };

    let mut out = Map::new();
    for (key, field) in fields {
        if field.is_null() {
            continue;
        }
        let field_path = join(path, key);
        let attr = block
            .get(key)
            .ok_or_else(|| SchemaError::UnknownAttribute {
                path: field_path.clone(),
            })?;
        out.insert(
            key.clone(),
            flatten_attribute(schema, &attr.ty, field, &field_path)?,
        );
    }
    Ok(out)
}

fn flatten_attribute(
    schema: &Schema,
    ty: &AttributeType,
    value: &Value,
    path: &str,
) -> Result<Value, SchemaError> {
    match ty {
        AttributeType::Primitive(p) => {
            check_primitive(path, *p, value)?;
            Ok(value.clone())
        }
        AttributeType::List(p) => {
            let items = value
                .as_array()
                .ok_or_else(|| mismatch(path, format!("list of {p}"), value))?;
            for (i, item) in items.iter().enumerate() {
                check_primitive(&join(path, &i.to_string()), *p, item)?;
            }
            Ok(value.clone())
        }
        AttributeType::Nested {
            block,
            nesting: NestingMode::Single,
        } => {
            let block = schema.resolve(path, block)?;
            let item = flatten_object(schema, block, value, &join(path, "0"))?;
            Ok(Value::Array(vec![Value::Object(item)]))
        }
        AttributeType::Nested {
            block,
            nesting: NestingMode::List,
        } => {
            let block = schema.resolve(path, block)?;
            let items = value
                .as_array()
                .ok_or_else(|| mismatch(path, "list of objects".into(), value))?;
            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    flatten_object(schema, block, item, &join(path, &i.to_string()))
                        .map(Value::Object)
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
    }
}
