//! Callback game descriptor.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, FieldSink, FromWire, WireObject};
use crate::error::{DecodeError, ValidationError};
use crate::validate::Validate;

const NAME: &str = "CallbackGame";

/// Description of the game launched when the user presses a button.
///
/// The upstream API defines no fields for this object; the game itself is
/// configured out of band. It encodes to an empty JSON object and accepts
/// any JSON object on decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallbackGame;

impl CallbackGame {
    pub fn new() -> Self {
        Self
    }
}

impl WireObject for CallbackGame {
    fn write_fields<S: FieldSink>(&self, _sink: &mut S) -> Result<(), S::Error> {
        Ok(())
    }
}

impl FromWire for CallbackGame {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        codec::as_object(value, NAME)?;
        Ok(Self)
    }
}

impl Validate for CallbackGame {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

impl Serialize for CallbackGame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for CallbackGame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize(deserializer)
    }
}
