//! Inline keyboard markup.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, FieldSink, FromWire, WireObject};
use crate::error::{DecodeError, ValidationError};
use crate::types::InlineKeyboardButton;
use crate::validate::Validate;

const NAME: &str = "InlineKeyboardMarkup";

const INLINE_KEYBOARD: &str = "inline_keyboard";

/// An inline keyboard attached to a message or inline query result.
///
/// The button grid is row-major; validation cascades into every button and
/// stops at the first one with an unfilled mandatory field.
///
/// # Example
///
/// ```
/// use tgkit_model::{InlineKeyboardButton, InlineKeyboardMarkup, Validate};
///
/// let keyboard = InlineKeyboardMarkup::default()
///     .add_row(vec![InlineKeyboardButton::new("Play").with_callback_data("play")]);
/// assert!(keyboard.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineKeyboardMarkup {
    inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    /// Create a keyboard from rows of buttons.
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    /// Append a row of buttons.
    pub fn add_row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row);
        self
    }

    /// The button grid, row-major.
    pub fn rows(&self) -> &[Vec<InlineKeyboardButton>] {
        &self.inline_keyboard
    }
}

impl WireObject for InlineKeyboardMarkup {
    fn write_fields<S: FieldSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.object_rows(INLINE_KEYBOARD, &self.inline_keyboard)
    }
}

impl FromWire for InlineKeyboardMarkup {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let map = codec::as_object(value, NAME)?;
        Ok(Self {
            inline_keyboard: codec::require_rows(map, NAME, INLINE_KEYBOARD)?,
        })
    }
}

impl Validate for InlineKeyboardMarkup {
    fn validate(&self) -> Result<(), ValidationError> {
        for row in &self.inline_keyboard {
            for button in row {
                button.validate()?;
            }
        }
        Ok(())
    }
}

impl Serialize for InlineKeyboardMarkup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for InlineKeyboardMarkup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_keyboard_still_emits_the_grid() {
        let value = InlineKeyboardMarkup::default().to_value();
        assert_eq!(value, json!({"inline_keyboard": []}));
    }

    #[test]
    fn encodes_rows_in_order() {
        let keyboard = InlineKeyboardMarkup::default()
            .add_row(vec![
                InlineKeyboardButton::new("a"),
                InlineKeyboardButton::new("b"),
            ])
            .add_row(vec![InlineKeyboardButton::new("c")]);
        assert_eq!(
            keyboard.to_value(),
            json!({"inline_keyboard": [[{"text": "a"}, {"text": "b"}], [{"text": "c"}]]})
        );
    }

    #[test]
    fn round_trips() {
        let keyboard = InlineKeyboardMarkup::default().add_row(vec![
            InlineKeyboardButton::new("open").with_url("https://example.org"),
        ]);
        let decoded = InlineKeyboardMarkup::from_value(&keyboard.to_value()).unwrap();
        assert_eq!(decoded, keyboard);
    }

    #[test]
    fn missing_grid_is_malformed() {
        let err = InlineKeyboardMarkup::from_value(&json!({})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedInput {
                object: "InlineKeyboardMarkup",
                ..
            }
        ));
    }

    #[test]
    fn validation_names_the_first_bad_button() {
        let keyboard = InlineKeyboardMarkup::default()
            .add_row(vec![InlineKeyboardButton::new("fine")])
            .add_row(vec![InlineKeyboardButton::new("")]);
        let err = keyboard.validate().unwrap_err();
        assert_eq!(err.object, "InlineKeyboardButton");
        assert_eq!(err.field, "text");
    }

    #[test]
    fn streaming_surface_matches_tree_surface() {
        let keyboard = InlineKeyboardMarkup::default()
            .add_row(vec![InlineKeyboardButton::new("x").with_callback_data("y")]);
        assert_eq!(serde_json::to_value(&keyboard).unwrap(), keyboard.to_value());
    }
}
