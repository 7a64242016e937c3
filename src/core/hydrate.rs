//! Recursive hydration of untyped payloads into typed records.
//!
//! A record type declares its fields by implementing [`Hydrate`]; the
//! [`Hydrator`] walks the JSON tree and hands each record a [`Fields`] view
//! to read its own keys from. Three shapes are supported at any level:
//!
//! - record: one JSON object into one `T`
//! - list: a JSON array into `Vec<T>`, element order preserved
//! - map: a JSON object into `IndexMap<String, T>`, key order preserved
//!
//! ## Modes
//!
//! [`Mode::Lenient`] (the default) never fails: missing fields, `null`s and
//! values of the wrong JSON type all become the field's default, and
//! undeclared keys are dropped. [`Mode::Strict`] reports the same situations
//! as [`HydrationError`] with the dotted path of the field (`result[1].arn`).
//! Explicit `null` is accepted as "default" in both modes.
//!
//! Strings found where a record, list or map is expected are parsed as JSON
//! first, so double-encoded payloads hydrate the same as structured ones.

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::warn;

use crate::core::payload::{kind, RawPayload};
use crate::error::HydrationError;

type Result<T> = std::result::Result<T, HydrationError>;

/// How shape mismatches are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Degrade to defaults.
    #[default]
    Lenient,
    /// Fail with a [`HydrationError`].
    Strict,
}

/// A record shape that can be rebuilt from a JSON object.
///
/// Implementations read every declared field from `fields` under its wire
/// name and nothing else.
///
/// ```
/// use secretbridge::core::hydrate::{hydrate, Fields, Hydrate};
/// use secretbridge::error::HydrationError;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Tag {
///     label: String,
/// }
///
/// impl Hydrate for Tag {
///     fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
///         Ok(Self {
///             label: fields.text("label")?,
///         })
///     }
/// }
///
/// let tag: Tag = hydrate(r#"{"label":"prod","extra":1}"#);
/// assert_eq!(tag.label, "prod");
/// ```
pub trait Hydrate: Default {
    /// Build the record from the fields of one JSON object.
    ///
    /// # Errors
    ///
    /// Only returns an error in strict mode, by propagating the errors of
    /// the [`Fields`] accessors.
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self>;
}

/// Read access to the keys of one JSON object during hydration.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    hydrator: Hydrator,
    path: &'a str,
}

impl<'a> Fields<'a> {
    /// String field, copied verbatim.
    pub fn text(&self, key: &str) -> Result<String> {
        match self.lookup(key)? {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => self.hydrator.mismatch(&self.child(key), "string", other),
            None => Ok(String::new()),
        }
    }

    /// Boolean field, copied verbatim.
    pub fn boolean(&self, key: &str) -> Result<bool> {
        match self.lookup(key)? {
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => self.hydrator.mismatch(&self.child(key), "boolean", other),
            None => Ok(false),
        }
    }

    /// Nested record field.
    pub fn record<T: Hydrate>(&self, key: &str) -> Result<T> {
        match self.lookup(key)? {
            Some(value) => self.hydrator.record_at(value, &self.child(key)),
            None => Ok(T::default()),
        }
    }

    /// Ordered sequence of records.
    pub fn list<T: Hydrate>(&self, key: &str) -> Result<Vec<T>> {
        match self.lookup(key)? {
            Some(value) => self.hydrator.list_at(value, &self.child(key)),
            None => Ok(Vec::new()),
        }
    }

    /// Key-preserving map of records.
    pub fn map<T: Hydrate>(&self, key: &str) -> Result<IndexMap<String, T>> {
        match self.lookup(key)? {
            Some(value) => self.hydrator.map_at(value, &self.child(key)),
            None => Ok(IndexMap::new()),
        }
    }

    /// Value under `key`, with `null` folded into "absent".
    fn lookup(&self, key: &str) -> Result<Option<&'a Value>> {
        match self.map.get(key) {
            Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(value)),
            None if self.hydrator.mode == Mode::Strict => Err(HydrationError::MissingField {
                field: self.child(key),
            }),
            None => Ok(None),
        }
    }

    fn child(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }
}

/// Entry point for hydration in a given [`Mode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Hydrator {
    mode: Mode,
}

impl Hydrator {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn lenient() -> Self {
        Self::new(Mode::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Hydrate a single record.
    ///
    /// # Errors
    ///
    /// Strict mode only: [`HydrationError`] on unparsable text or any shape
    /// mismatch.
    pub fn record<T: Hydrate>(&self, raw: impl Into<RawPayload>) -> Result<T> {
        let value = self.resolve(raw.into())?;
        self.record_at(&value, "")
    }

    /// Hydrate an ordered sequence of records.
    ///
    /// The output has one element per input element, in input order.
    ///
    /// # Errors
    ///
    /// Strict mode only, as for [`Hydrator::record`].
    pub fn list<T: Hydrate>(&self, raw: impl Into<RawPayload>) -> Result<Vec<T>> {
        let value = self.resolve(raw.into())?;
        self.list_at(&value, "")
    }

    /// Hydrate a JSON object into a map of records, keeping keys and their
    /// order unchanged.
    ///
    /// # Errors
    ///
    /// Strict mode only, as for [`Hydrator::record`].
    pub fn map<T: Hydrate>(&self, raw: impl Into<RawPayload>) -> Result<IndexMap<String, T>> {
        let value = self.resolve(raw.into())?;
        self.map_at(&value, "")
    }

    /// Explicit parse step for the `Text` arm.
    ///
    /// Unparsable text is kept as an opaque string scalar in lenient mode.
    fn resolve(&self, raw: RawPayload) -> Result<Value> {
        match raw {
            RawPayload::Structured(value) => Ok(value),
            RawPayload::Text(text) => match serde_json::from_str::<Value>(&text) {
                Ok(value) => Ok(value),
                Err(e) if self.mode == Mode::Strict => Err(HydrationError::Parse(e)),
                Err(e) => {
                    warn!(error = %e, "payload text is not JSON, treating as scalar");
                    Ok(Value::String(text))
                }
            },
        }
    }

    fn record_at<T: Hydrate>(&self, value: &Value, path: &str) -> Result<T> {
        match value {
            Value::Null => Ok(T::default()),
            Value::Object(map) => T::hydrate_fields(&Fields {
                map,
                hydrator: *self,
                path,
            }),
            Value::String(text) => match decode(text) {
                Some(inner) => self.record_at(&inner, path),
                None => self.mismatch(path, "object", value),
            },
            other => self.mismatch(path, "object", other),
        }
    }

    fn list_at<T: Hydrate>(&self, value: &Value, path: &str) -> Result<Vec<T>> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.record_at(item, &format!("{}[{}]", path, i)))
                .collect(),
            Value::String(text) => match decode(text) {
                Some(inner) => self.list_at(&inner, path),
                None => self.mismatch(path, "array", value),
            },
            other => self.mismatch(path, "array", other),
        }
    }

    fn map_at<T: Hydrate>(&self, value: &Value, path: &str) -> Result<IndexMap<String, T>> {
        match value {
            Value::Null => Ok(IndexMap::new()),
            Value::Object(entries) => entries
                .iter()
                .map(|(key, item)| {
                    let child = if path.is_empty() {
                        key.clone()
                    } else {
                        format!("{}.{}", path, key)
                    };
                    Ok((key.clone(), self.record_at(item, &child)?))
                })
                .collect(),
            Value::String(text) => match decode(text) {
                Some(inner) => self.map_at(&inner, path),
                None => self.mismatch(path, "object", value),
            },
            other => self.mismatch(path, "object", other),
        }
    }

    fn mismatch<T: Default>(&self, path: &str, expected: &'static str, found: &Value) -> Result<T> {
        let field = if path.is_empty() { "(root)" } else { path };
        match self.mode {
            Mode::Strict => Err(HydrationError::TypeMismatch {
                field: field.to_string(),
                expected,
                found: kind(found),
            }),
            Mode::Lenient => {
                warn!(field, expected, found = kind(found), "shape mismatch, using default");
                Ok(T::default())
            }
        }
    }
}

/// Parse a double-encoded string, if it holds JSON.
fn decode(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Hydrate a record leniently.
///
/// Never fails; mismatches degrade to defaults.
pub fn hydrate<T: Hydrate>(raw: impl Into<RawPayload>) -> T {
    Hydrator::lenient().record(raw).unwrap_or_default()
}

/// Hydrate a sequence of records leniently.
pub fn hydrate_list<T: Hydrate>(raw: impl Into<RawPayload>) -> Vec<T> {
    Hydrator::lenient().list(raw).unwrap_or_default()
}

/// Hydrate a key-preserving map of records leniently.
pub fn hydrate_map<T: Hydrate>(raw: impl Into<RawPayload>) -> IndexMap<String, T> {
    Hydrator::lenient().map(raw).unwrap_or_default()
}
