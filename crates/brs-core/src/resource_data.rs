// ── Property bag and state document ──
//
// `ResourceConfig` is the validated, immutable argument object handed to
// a read. `ResourceState` is what a successful read produces.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::schema::{Schema, SchemaError};

// ── ResourceConfig ───────────────────────────────────────────────────

/// Arguments for one read, checked against the data source's schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceConfig {
    values: Map<String, Value>,
}

impl ResourceConfig {
    /// Validate `values` against `schema` and freeze them.
    pub fn new(schema: &Schema, values: Map<String, Value>) -> Result<Self, SchemaError> {
        schema.validate_config(&values)?;
        Ok(Self { values })
    }

    /// The value of `key`, or `None` when it is absent or `null`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// All present arguments, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_str(&self, key: &str) -> Result<Option<&str>, CoreError> {
        self.get(key)
            .map(|v| v.as_str().ok_or_else(|| invalid(key, "expected a string", v)))
            .transpose()
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, CoreError> {
        self.get(key)
            .map(|v| v.as_bool().ok_or_else(|| invalid(key, "expected a bool", v)))
            .transpose()
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>, CoreError> {
        self.get(key)
            .map(|v| v.as_i64().ok_or_else(|| invalid(key, "expected an integer", v)))
            .transpose()
    }

    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, CoreError> {
        self.get(key)
            .map(|v| v.as_f64().ok_or_else(|| invalid(key, "expected a number", v)))
            .transpose()
    }

    pub fn get_string_list(&self, key: &str) -> Result<Option<Vec<String>>, CoreError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let items = value
            .as_array()
            .ok_or_else(|| invalid(key, "expected a list of strings", value))?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| invalid(key, "expected a list of strings", value))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Parse a string argument with `FromStr` (used for closed enums).
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>, CoreError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_str(key)?
            .map(|s| {
                s.parse::<T>().map_err(|e| CoreError::InvalidArgument {
                    name: key.to_owned(),
                    message: format!("`{s}`: {e}"),
                })
            })
            .transpose()
    }

    /// Parse every element of a string-list argument with `FromStr`.
    pub fn get_parsed_list<T>(&self, key: &str) -> Result<Option<Vec<T>>, CoreError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.get_string_list(key)?
            .map(|items| {
                items
                    .iter()
                    .map(|s| {
                        s.parse::<T>().map_err(|e| CoreError::InvalidArgument {
                            name: key.to_owned(),
                            message: format!("`{s}`: {e}"),
                        })
                    })
                    .collect()
            })
            .transpose()
    }
}

fn invalid(key: &str, expected: &str, value: &Value) -> CoreError {
    CoreError::InvalidArgument {
        name: key.to_owned(),
        message: format!("{expected}, got {value}"),
    }
}

// ── ResourceState ────────────────────────────────────────────────────

/// Output of a read: a synthetic id plus schema-checked attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceState {
    id: Option<String>,
    attributes: Map<String, Value>,
}

impl ResourceState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Set a root attribute after checking it against `schema`.
    pub fn set(&mut self, schema: &Schema, key: &str, value: Value) -> Result<(), SchemaError> {
        let attr = schema
            .root()
            .get(key)
            .ok_or_else(|| SchemaError::UnknownAttribute {
                path: key.to_owned(),
            })?;
        if !value.is_null() {
            schema.check_value(key, &attr.ty, &value)?;
        }
        self.attributes.insert(key.to_owned(), value);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Copy of this state for display, with the values of sensitive
    /// attributes masked as [`SENSITIVE_VALUE`](crate::schema::SENSITIVE_VALUE).
    pub fn redacted(&self, schema: &Schema) -> Self {
        let mut shown = self.clone();
        schema.redact(schema.root(), &mut shown.attributes);
        shown
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::schema::{Attribute, AttributeType, Block, NestingMode, Primitive, SENSITIVE_VALUE};

    fn schema() -> Schema {
        Schema::new(
            Block::new()
                .attribute(
                    "tenant",
                    Attribute::required(AttributeType::Primitive(Primitive::String)),
                )
                .attribute(
                    "flag",
                    Attribute::optional(AttributeType::Primitive(Primitive::Bool)),
                )
                .attribute(
                    "count",
                    Attribute::optional(AttributeType::Primitive(Primitive::Int)),
                )
                .attribute(
                    "names",
                    Attribute::optional(AttributeType::List(Primitive::String)),
                )
                .attribute(
                    "out",
                    Attribute::computed(AttributeType::List(Primitive::Int)),
                ),
        )
    }

    fn bag(value: Value) -> ResourceConfig {
        ResourceConfig::new(&schema(), value.as_object().unwrap().clone()).unwrap()
    }

    #[test]
    fn absent_and_null_read_as_none() {
        let cfg = bag(json!({"tenant": "t1", "flag": null}));
        assert_eq!(cfg.get_bool("flag").unwrap(), None);
        assert_eq!(cfg.get_i64("count").unwrap(), None);
        assert!(!cfg.is_set("flag"));
        assert_eq!(cfg.iter().count(), 1);
    }

    #[test]
    fn explicit_false_and_zero_are_present() {
        let cfg = bag(json!({"tenant": "t1", "flag": false, "count": 0}));
        assert_eq!(cfg.get_bool("flag").unwrap(), Some(false));
        assert_eq!(cfg.get_i64("count").unwrap(), Some(0));
    }

    #[test]
    fn string_lists_are_copied_in_order() {
        let cfg = bag(json!({"tenant": "t1", "names": ["b", "a"]}));
        assert_eq!(
            cfg.get_string_list("names").unwrap(),
            Some(vec!["b".to_string(), "a".to_string()])
        );
    }

    #[test]
    fn parse_failure_is_invalid_argument() {
        let cfg = bag(json!({"tenant": "t1"}));
        let err = cfg.get_parsed::<i32>("tenant").unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { ref name, .. } if name == "tenant"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = ResourceConfig::new(&schema(), json!({"flag": true}).as_object().unwrap().clone());
        assert!(matches!(result, Err(SchemaError::MissingRequired { .. })));
    }

    #[test]
    fn state_set_is_schema_checked() {
        let schema = schema();
        let mut state = ResourceState::new();
        state.set(&schema, "out", json!([1, 2])).unwrap();
        assert_eq!(state.get("out"), Some(&json!([1, 2])));

        assert!(state.set(&schema, "out", json!(["x"])).is_err());
        assert!(state.set(&schema, "missing", json!(1)).is_err());
        assert_eq!(state.attributes().len(), 1);
    }

    #[test]
    fn redacted_masks_sensitive_values_at_any_depth() {
        let string = || AttributeType::Primitive(Primitive::String);
        let schema = Schema::new(
            Block::new()
                .attribute("key", Attribute::optional(string()).sensitive())
                .attribute("note", Attribute::optional(string()))
                .attribute(
                    "hosts",
                    Attribute::computed(AttributeType::Nested {
                        block: "host",
                        nesting: NestingMode::List,
                    }),
                ),
        )
        .define(
            "host",
            Block::new()
                .attribute("name", Attribute::computed(string()))
                .attribute("password", Attribute::computed(string()).sensitive()),
        );

        let mut state = ResourceState::new();
        state.set(&schema, "key", json!("k-123")).unwrap();
        state.set(&schema, "note", json!("visible")).unwrap();
        state
            .set(
                &schema,
                "hosts",
                json!([{"name": "h1", "password": "p-456"}, {"name": "h2", "password": null}]),
            )
            .unwrap();

        let shown = state.redacted(&schema);
        assert_eq!(shown.get("key"), Some(&json!(SENSITIVE_VALUE)));
        assert_eq!(shown.get("note"), Some(&json!("visible")));
        assert_eq!(
            shown.get("hosts"),
            Some(&json!([
                {"name": "h1", "password": SENSITIVE_VALUE},
                {"name": "h2", "password": null}
            ]))
        );
        assert_eq!(state.get("key"), Some(&json!("k-123")));
    }
}
