//! Canonical wire encoding and decoding for API objects.
//!
//! Each object describes its wire fields exactly once, in
//! [`WireObject::write_fields`]. Both encode surfaces consume that single
//! walk: [`WireObject::to_value`] routes it through a [`TreeSink`] to build
//! a `serde_json` object, and the `serde::Serialize` impls route it through
//! a map-serializer sink for direct-to-wire emission. A field added to the
//! walk therefore appears on both surfaces with the same order and the same
//! omission policy.
//!
//! Decoding goes the other way through [`FromWire`]: a buffered
//! `serde_json::Value` is picked apart with the helpers below, which
//! distinguish structurally required fields (absence is a
//! [`DecodeError::MalformedInput`]) from optional ones (absence leaves the
//! attribute unset).

use std::convert::Infallible;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Encoding half of the wire codec.
pub trait WireObject {
    /// Walk the object's fields in canonical wire order.
    ///
    /// Absent optional attributes are skipped entirely; the discriminator
    /// and mandatory fields are always emitted, whether or not the object
    /// would currently pass validation.
    fn write_fields<S: FieldSink>(&self, sink: &mut S) -> Result<(), S::Error>;

    /// Encode to a JSON value tree.
    fn to_value(&self) -> Value {
        let mut sink = TreeSink::default();
        match self.write_fields(&mut sink) {
            Ok(()) => sink.into_value(),
            Err(infallible) => match infallible {},
        }
    }
}

/// Decoding half of the wire codec.
pub trait FromWire: Sized {
    /// Decode an instance from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedInput`] if the value is not an
    /// object, or a structurally required field is missing or has the wrong
    /// JSON type.
    fn from_value(value: &Value) -> Result<Self, DecodeError>;
}

/// Receives an object's fields in canonical wire order.
///
/// Sinks decide where fields go: [`TreeSink`] builds a JSON object tree,
/// the internal serde sink streams entries straight into a serializer.
pub trait FieldSink {
    type Error;

    /// Emit a string field.
    fn string(&mut self, name: &'static str, value: &str) -> Result<(), Self::Error>;

    /// Emit a nested object field.
    fn object<T: WireObject>(&mut self, name: &'static str, value: &T) -> Result<(), Self::Error>;

    /// Emit a field holding rows of nested objects.
    fn object_rows<T: WireObject>(
        &mut self,
        name: &'static str,
        rows: &[Vec<T>],
    ) -> Result<(), Self::Error>;

    /// Emit a string field only if a value is present.
    fn optional_string(
        &mut self,
        name: &'static str,
        value: Option<&str>,
    ) -> Result<(), Self::Error> {
        match value {
            Some(value) => self.string(name, value),
            None => Ok(()),
        }
    }

    /// Emit a nested object field only if a value is present.
    fn optional_object<T: WireObject>(
        &mut self,
        name: &'static str,
        value: Option<&T>,
    ) -> Result<(), Self::Error> {
        match value {
            Some(value) => self.object(name, value),
            None => Ok(()),
        }
    }
}

/// Builds a JSON object tree from the canonical field walk.
#[derive(Debug, Default)]
pub struct TreeSink {
    map: Map<String, Value>,
}

impl TreeSink {
    /// Consume the sink and return the accumulated object.
    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl FieldSink for TreeSink {
    type Error = Infallible;

    fn string(&mut self, name: &'static str, value: &str) -> Result<(), Infallible> {
        self.map.insert(name.to_owned(), Value::String(value.to_owned()));
        Ok(())
    }

    fn object<T: WireObject>(&mut self, name: &'static str, value: &T) -> Result<(), Infallible> {
        self.map.insert(name.to_owned(), value.to_value());
        Ok(())
    }

    fn object_rows<T: WireObject>(
        &mut self,
        name: &'static str,
        rows: &[Vec<T>],
    ) -> Result<(), Infallible> {
        let rows = rows
            .iter()
            .map(|row| Value::Array(row.iter().map(WireObject::to_value).collect()))
            .collect();
        self.map.insert(name.to_owned(), Value::Array(rows));
        Ok(())
    }
}

/// Streams the canonical field walk into a serde map serializer.
struct SerdeSink<M>(M);

impl<M: SerializeMap> FieldSink for SerdeSink<M> {
    type Error = M::Error;

    fn string(&mut self, name: &'static str, value: &str) -> Result<(), M::Error> {
        self.0.serialize_entry(name, value)
    }

    fn object<T: WireObject>(&mut self, name: &'static str, value: &T) -> Result<(), M::Error> {
        self.0.serialize_entry(name, &Streamed(value))
    }

    fn object_rows<T: WireObject>(
        &mut self,
        name: &'static str,
        rows: &[Vec<T>],
    ) -> Result<(), M::Error> {
        let rows: Vec<Vec<Streamed<'_, T>>> = rows
            .iter()
            .map(|row| row.iter().map(Streamed).collect())
            .collect();
        self.0.serialize_entry(name, &rows)
    }
}

/// Serializes a [`WireObject`] through its canonical field walk.
struct Streamed<'a, T>(&'a T);

impl<T: WireObject> Serialize for Streamed<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(self.0, serializer)
    }
}

/// Streaming encode surface; concrete `Serialize` impls route here.
pub(crate) fn serialize<T, S>(object: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: WireObject,
    S: Serializer,
{
    let map = serializer.serialize_map(None)?;
    let mut sink = SerdeSink(map);
    object.write_fields(&mut sink)?;
    sink.0.end()
}

/// Streaming decode surface; concrete `Deserialize` impls route here.
///
/// Buffers a `Value` first so decoding can dispatch on the discriminator
/// before reading the remaining fields.
pub(crate) fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: FromWire,
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    T::from_value(&value).map_err(de::Error::custom)
}

pub(crate) fn as_object<'a>(
    value: &'a Value,
    object: &'static str,
) -> Result<&'a Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| DecodeError::MalformedInput {
        object,
        reason: "payload must be a JSON object".to_owned(),
    })
}

pub(crate) fn require_str(
    map: &Map<String, Value>,
    object: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    let value = map.get(field).ok_or_else(|| DecodeError::MalformedInput {
        object,
        reason: format!("missing required field '{field}'"),
    })?;
    str_field(value, object, field)
}

pub(crate) fn optional_str(
    map: &Map<String, Value>,
    object: &'static str,
    field: &'static str,
) -> Result<Option<String>, DecodeError> {
    match map.get(field) {
        Some(value) => Ok(Some(str_field(value, object, field)?)),
        None => Ok(None),
    }
}

pub(crate) fn optional_nested<T: FromWire>(
    map: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, DecodeError> {
    match map.get(field) {
        Some(value) => Ok(Some(T::from_value(value)?)),
        None => Ok(None),
    }
}

pub(crate) fn require_rows<T: FromWire>(
    map: &Map<String, Value>,
    object: &'static str,
    field: &'static str,
) -> Result<Vec<Vec<T>>, DecodeError> {
    let value = map.get(field).ok_or_else(|| DecodeError::MalformedInput {
        object,
        reason: format!("missing required field '{field}'"),
    })?;
    let rows = value.as_array().ok_or_else(|| DecodeError::MalformedInput {
        object,
        reason: format!("field '{field}' must be an array"),
    })?;
    rows.iter()
        .map(|row| {
            let row = row.as_array().ok_or_else(|| DecodeError::MalformedInput {
                object,
                reason: format!("field '{field}' must be an array of arrays"),
            })?;
            row.iter().map(T::from_value).collect()
        })
        .collect()
}

fn str_field(
    value: &Value,
    object: &'static str,
    field: &'static str,
) -> Result<String, DecodeError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DecodeError::MalformedInput {
            object,
            reason: format!("field '{field}' must be a string"),
        })
}
