// ── Data-source schema model ──
//
// A schema is a root block of named attributes plus a table of named
// block definitions. Nested attributes point at a definition by name,
// which is what lets the protection source node block contain itself.

use std::collections::BTreeMap;

use serde_json::{Map, Value, json};
use thiserror::Error;

/// How many times a recursive definition is expanded by [`Schema::export`].
///
/// The export format has no references, so recursion has to stop somewhere.
pub const EXPORT_DEPTH: usize = 2;

/// Stand-in shown for the value of a sensitive attribute.
pub const SENSITIVE_VALUE: &str = "(sensitive value)";

// ── Errors ───────────────────────────────────────────────────────────

/// A value or configuration that does not match the declared schema.
///
/// `path` is dotted, with list indices as segments
/// (`protection_sources.0.nodes.3.protection_source.0.name`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("unknown attribute `{path}`")]
    UnknownAttribute { path: String },

    #[error("attribute `{path}` is computed and cannot be set in configuration")]
    ComputedAttribute { path: String },

    #[error("missing required attribute `{path}`")]
    MissingRequired { path: String },

    #[error("attribute `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: &'static str,
    },

    #[error("attribute `{path}` refers to undefined block `{block}`")]
    UndefinedBlock { path: String, block: String },

    #[error("cannot encode record: {message}")]
    Encode { message: String },
}

// ── Types ────────────────────────────────────────────────────────────

/// Leaf value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Primitive {
    String,
    Int,
    Float,
    Bool,
}

impl Primitive {
    /// Whether `value` is a valid instance of this type.
    ///
    /// Integers are accepted where a float is declared; the reverse is not.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Int => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Bool => value.is_boolean(),
        }
    }

    fn export_type(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int | Self::Float => "number",
            Self::Bool => "bool",
        }
    }
}

/// How a nested block is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NestingMode {
    /// One object, rendered as a one-element list.
    Single,
    /// Zero or more objects.
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    Primitive(Primitive),
    List(Primitive),
    /// A nested block, by definition name.
    Nested {
        block: &'static str,
        nesting: NestingMode,
    },
}

impl AttributeType {
    fn describe(&self) -> String {
        match self {
            Self::Primitive(p) => p.to_string(),
            Self::List(p) => format!("list of {p}"),
            Self::Nested { block, .. } => format!("list of `{block}` objects"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub ty: AttributeType,
    pub mode: Mode,
    pub description: &'static str,
    pub sensitive: bool,
}

impl Attribute {
    pub fn new(ty: AttributeType, mode: Mode) -> Self {
        Self {
            ty,
            mode,
            description: "",
            sensitive: false,
        }
    }

    pub fn required(ty: AttributeType) -> Self {
        Self::new(ty, Mode::Required)
    }

    pub fn optional(ty: AttributeType) -> Self {
        Self::new(ty, Mode::Optional)
    }

    pub fn computed(ty: AttributeType) -> Self {
        Self::new(ty, Mode::Computed)
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// A set of named attributes, kept in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    attributes: BTreeMap<&'static str, Attribute>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Attribute)> {
        self.attributes.iter().map(|(name, attr)| (*name, attr))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// A root block plus the named definitions nested attributes refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    root: Block,
    definitions: BTreeMap<&'static str, Block>,
}

impl Schema {
    pub fn new(root: Block) -> Self {
        Self {
            root,
            definitions: BTreeMap::new(),
        }
    }

    pub fn define(mut self, name: &'static str, block: Block) -> Self {
        self.definitions.insert(name, block);
        self
    }

    pub fn root(&self) -> &Block {
        &self.root
    }

    pub fn definition(&self, name: &str) -> Option<&Block> {
        self.definitions.get(name)
    }

    pub(crate) fn resolve(&self, path: &str, name: &str) -> Result<&Block, SchemaError> {
        self.definition(name)
            .ok_or_else(|| SchemaError::UndefinedBlock {
                path: path.to_owned(),
                block: name.to_owned(),
            })
    }

    /// Check that every nested attribute refers to a defined block.
    pub fn check_references(&self) -> Result<(), SchemaError> {
        let blocks = std::iter::once(("", &self.root))
            .chain(self.definitions.iter().map(|(name, block)| (*name, block)));
        for (owner, block) in blocks {
            for (name, attr) in block.iter() {
                if let AttributeType::Nested { block: target, .. } = attr.ty {
                    self.resolve(&join(owner, name), target)?;
                }
            }
        }
        Ok(())
    }

    // ── Configuration validation ─────────────────────────────────────

    /// Validate a configuration object against the root block.
    ///
    /// Rejects unknown keys, computed-only keys, type mismatches and
    /// missing required keys. A `null` value counts as absent.
    pub fn validate_config(&self, config: &Map<String, Value>) -> Result<(), SchemaError> {
        for (key, value) in config {
            let attr = self
                .root
                .get(key)
                .ok_or_else(|| SchemaError::UnknownAttribute { path: key.clone() })?;
            if attr.mode == Mode::Computed {
                return Err(SchemaError::ComputedAttribute { path: key.clone() });
            }
            if !value.is_null() {
                self.check_value(key, &attr.ty, value)?;
            }
        }

        for (name, attr) in self.root.iter() {
            let present = config.get(name).is_some_and(|v| !v.is_null());
            if attr.mode == Mode::Required && !present {
                return Err(SchemaError::MissingRequired {
                    path: name.to_owned(),
                });
            }
        }
        Ok(())
    }

    // ── Value checking ───────────────────────────────────────────────

    /// Check an already-flattened value against a declared type.
    ///
    /// Nested blocks must be arrays of objects (at most one for
    /// [`NestingMode::Single`]) whose keys are all declared.
    pub fn check_value(
        &self,
        path: &str,
        ty: &AttributeType,
        value: &Value,
    ) -> Result<(), SchemaError> {
        match ty {
            AttributeType::Primitive(p) => check_primitive(path, *p, value),
            AttributeType::List(p) => {
                let items = expect_array(path, ty, value)?;
                for (i, item) in items.iter().enumerate() {
                    check_primitive(&join(path, &i.to_string()), *p, item)?;
                }
                Ok(())
            }
            AttributeType::Nested { block, nesting } => {
                let items = expect_array(path, ty, value)?;
                if *nesting == NestingMode::Single && items.len() > 1 {
                    return Err(SchemaError::TypeMismatch {
                        path: path.to_owned(),
                        expected: "at most one object".into(),
                        found: "a longer list",
                    });
                }
                let block = self.resolve(path, block)?;
                for (i, item) in items.iter().enumerate() {
                    let item_path = join(path, &i.to_string());
                    let Value::Object(map) = item else {
                        return Err(mismatch(&item_path, "object".into(), item));
                    };
                    self.check_object(&item_path, block, map)?;
                }
                Ok(())
            }
        }
    }

    fn check_object(
        &self,
        path: &str,
        block: &Block,
        map: &Map<String, Value>,
    ) -> Result<(), SchemaError> {
        for (key, value) in map {
            let child = join(path, key);
            let attr = block
                .get(key)
                .ok_or_else(|| SchemaError::UnknownAttribute { path: child.clone() })?;
            if !value.is_null() {
                self.check_value(&child, &attr.ty, value)?;
            }
        }
        Ok(())
    }

    // ── Export ───────────────────────────────────────────────────────

    /// Render the schema as a `providers schema -json` style block.
    ///
    /// Recursive definitions are expanded [`EXPORT_DEPTH`] times; deeper
    /// references are dropped.
    pub fn export(&self) -> Value {
        let mut stack = Vec::new();
        json!({
            "version": 0,
            "block": self.export_block(&self.root, &mut stack),
        })
    }

    fn export_block(&self, block: &Block, stack: &mut Vec<&'static str>) -> Value {
        let mut attributes = Map::new();
        let mut block_types = Map::new();

        for (name, attr) in block.iter() {
            match &attr.ty {
                AttributeType::Primitive(p) => {
                    attributes.insert(name.into(), export_attribute(attr, json!(p.export_type())));
                }
                AttributeType::List(p) => {
                    attributes.insert(
                        name.into(),
                        export_attribute(attr, json!(["list", p.export_type()])),
                    );
                }
                AttributeType::Nested {
                    block: target,
                    nesting,
                } => {
                    let Some(nested) = self.definition(target) else {
                        continue;
                    };
                    if stack.iter().filter(|seen| *seen == target).count() >= EXPORT_DEPTH {
                        continue;
                    }
                    stack.push(*target);
                    let inner = self.export_block(nested, stack);
                    stack.pop();
                    block_types.insert(
                        name.into(),
                        json!({
                            "nesting_mode": nesting.to_string(),
                            "block": inner,
                        }),
                    );
                }
            }
        }

        let mut out = Map::new();
        if !attributes.is_empty() {
            out.insert("attributes".into(), Value::Object(attributes));
        }
        if !block_types.is_empty() {
            out.insert("block_types".into(), Value::Object(block_types));
        }
        Value::Object(out)
    }

    // ── Redaction ────────────────────────────────────────────────────

    /// Mask every non-null value of a sensitive attribute in `map`,
    /// which holds the attributes of `block`, descending into nested
    /// blocks.
    pub fn redact(&self, block: &Block, map: &mut Map<String, Value>) {
        for (key, value) in map.iter_mut() {
            let Some(attr) = block.get(key) else {
                continue;
            };
            if value.is_null() {
                continue;
            }
            if attr.sensitive {
                *value = Value::String(SENSITIVE_VALUE.into());
                continue;
            }
            if let AttributeType::Nested { block: target, .. } = attr.ty {
                let (Some(nested), Value::Array(items)) = (self.definition(target), value) else {
                    continue;
                };
                for item in items.iter_mut().filter_map(Value::as_object_mut) {
                    self.redact(nested, item);
                }
            }
        }
    }
}

// ── Helpers ──────────────────────────────────────────────────────────

fn export_attribute(attr: &Attribute, ty: Value) -> Value {
    let mut out = Map::new();
    out.insert("type".into(), ty);
    if !attr.description.is_empty() {
        out.insert("description".into(), json!(attr.description));
    }
    out.insert(attr.mode.to_string(), json!(true));
    if attr.sensitive {
        out.insert("sensitive".into(), json!(true));
    }
    Value::Object(out)
}

pub(crate) fn join(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_owned()
    } else {
        format!("{parent}.{child}")
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

pub(crate) fn mismatch(path: &str, expected: String, found: &Value) -> SchemaError {
    SchemaError::TypeMismatch {
        path: path.to_owned(),
        expected,
        found: value_kind(found),
    }
}

pub(crate) fn check_primitive(path: &str, p: Primitive, value: &Value) -> Result<(), SchemaError> {
    if p.accepts(value) {
        Ok(())
    } else {
        Err(mismatch(path, p.to_string(), value))
    }
}

fn expect_array<'v>(
    path: &str,
    ty: &AttributeType,
    value: &'v Value,
) -> Result<&'v Vec<Value>, SchemaError> {
    value
        .as_array()
        .ok_or_else(|| mismatch(path, ty.describe(), value))
}
