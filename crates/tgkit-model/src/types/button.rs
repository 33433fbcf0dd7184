//! Inline keyboard button.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::codec::{self, FieldSink, FromWire, WireObject};
use crate::error::{DecodeError, ValidationError};
use crate::types::CallbackGame;
use crate::validate::{self, Validate};

const NAME: &str = "InlineKeyboardButton";

const TEXT: &str = "text";
const URL: &str = "url";
const CALLBACK_DATA: &str = "callback_data";
const CALLBACK_GAME: &str = "callback_game";
const SWITCH_INLINE_QUERY: &str = "switch_inline_query";
const SWITCH_INLINE_QUERY_CURRENT_CHAT: &str = "switch_inline_query_current_chat";

/// One button of an inline keyboard.
///
/// The label text is mandatory; the remaining attributes are the actions
/// the upstream API can associate with a press. The API documentation says
/// to use exactly one of the actions, but that exclusivity is not checked
/// here: the remote side rejects buttons with conflicting actions itself.
///
/// # Example
///
/// ```
/// use tgkit_model::{InlineKeyboardButton, Validate, WireObject};
///
/// let button = InlineKeyboardButton::new("Open").with_url("https://example.org");
/// assert!(button.validate().is_ok());
/// assert_eq!(button.to_value()["text"], "Open");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineKeyboardButton {
    text: String,
    url: Option<String>,
    callback_data: Option<String>,
    callback_game: Option<CallbackGame>,
    switch_inline_query: Option<String>,
    switch_inline_query_current_chat: Option<String>,
}

impl InlineKeyboardButton {
    /// Create a button with the given label text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            callback_game: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
        }
    }

    /// HTTP URL to be opened when the button is pressed.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Data to be sent in a callback query when the button is pressed.
    pub fn with_callback_data(mut self, data: impl Into<String>) -> Self {
        self.callback_data = Some(data.into());
        self
    }

    /// Game to be launched when the button is pressed.
    pub fn with_callback_game(mut self, game: CallbackGame) -> Self {
        self.callback_game = Some(game);
        self
    }

    /// Inline query to insert after prompting the user to select a chat.
    ///
    /// May be empty, in which case just the bot's username is inserted.
    pub fn with_switch_inline_query(mut self, query: impl Into<String>) -> Self {
        self.switch_inline_query = Some(query.into());
        self
    }

    /// Inline query to insert in the current chat's input field.
    ///
    /// May be empty, in which case just the bot's username is inserted.
    pub fn with_switch_inline_query_current_chat(mut self, query: impl Into<String>) -> Self {
        self.switch_inline_query_current_chat = Some(query.into());
        self
    }

    /// The label text on the button.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn callback_data(&self) -> Option<&str> {
        self.callback_data.as_deref()
    }

    pub fn callback_game(&self) -> Option<&CallbackGame> {
        self.callback_game.as_ref()
    }

    pub fn switch_inline_query(&self) -> Option<&str> {
        self.switch_inline_query.as_deref()
    }

    pub fn switch_inline_query_current_chat(&self) -> Option<&str> {
        self.switch_inline_query_current_chat.as_deref()
    }
}

impl WireObject for InlineKeyboardButton {
    fn write_fields<S: FieldSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.string(TEXT, &self.text)?;
        sink.optional_string(URL, self.url.as_deref())?;
        sink.optional_string(CALLBACK_DATA, self.callback_data.as_deref())?;
        sink.optional_string(SWITCH_INLINE_QUERY, self.switch_inline_query.as_deref())?;
        sink.optional_string(
            SWITCH_INLINE_QUERY_CURRENT_CHAT,
            self.switch_inline_query_current_chat.as_deref(),
        )?;
        sink.optional_object(CALLBACK_GAME, self.callback_game.as_ref())
    }
}

impl FromWire for InlineKeyboardButton {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let map = codec::as_object(value, NAME)?;
        Ok(Self {
            text: codec::require_str(map, NAME, TEXT)?,
            url: codec::optional_str(map, NAME, URL)?,
            callback_data: codec::optional_str(map, NAME, CALLBACK_DATA)?,
            callback_game: codec::optional_nested(map, CALLBACK_GAME)?,
            switch_inline_query: codec::optional_str(map, NAME, SWITCH_INLINE_QUERY)?,
            switch_inline_query_current_chat: codec::optional_str(
                map,
                NAME,
                SWITCH_INLINE_QUERY_CURRENT_CHAT,
            )?,
        })
    }
}

impl Validate for InlineKeyboardButton {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty(NAME, TEXT, &self.text)?;
        if let Some(game) = &self.callback_game {
            game.validate()?;
        }
        Ok(())
    }
}

impl Serialize for InlineKeyboardButton {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for InlineKeyboardButton {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_only_button_validates_and_encodes_minimal() {
        let button = InlineKeyboardButton::new("Open");
        assert!(button.validate().is_ok());
        assert_eq!(button.to_value(), json!({"text": "Open"}));
    }

    #[test]
    fn empty_text_fails_validation_naming_text() {
        let button = InlineKeyboardButton::new("").with_url("https://example.org");
        let err = button.validate().unwrap_err();
        assert_eq!(err.object, "InlineKeyboardButton");
        assert_eq!(err.field, "text");
    }

    #[test]
    fn absent_actions_are_omitted() {
        let value = InlineKeyboardButton::new("go")
            .with_callback_data("payload")
            .to_value();
        assert_eq!(value, json!({"text": "go", "callback_data": "payload"}));
        assert!(value.get("url").is_none());
    }

    #[test]
    fn round_trips_with_all_actions_set() {
        let button = InlineKeyboardButton::new("play")
            .with_url("https://example.org/game")
            .with_callback_data("start")
            .with_callback_game(CallbackGame::new())
            .with_switch_inline_query("query")
            .with_switch_inline_query_current_chat("");
        let decoded = InlineKeyboardButton::from_value(&button.to_value()).unwrap();
        assert_eq!(decoded, button);
    }

    #[test]
    fn missing_text_on_the_wire_is_malformed() {
        let err =
            InlineKeyboardButton::from_value(&json!({"url": "https://example.org"})).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::MalformedInput {
                object: "InlineKeyboardButton",
                ..
            }
        ));
    }

    #[test]
    fn streaming_surface_matches_tree_surface() {
        let button = InlineKeyboardButton::new("Open")
            .with_switch_inline_query("q")
            .with_url("https://example.org");
        assert_eq!(serde_json::to_value(&button).unwrap(), button.to_value());
    }

    #[test]
    fn deserializes_from_wire_json() {
        let button: InlineKeyboardButton =
            serde_json::from_str(r#"{"text":"hi","switch_inline_query":""}"#).unwrap();
        assert_eq!(button.text(), "hi");
        assert_eq!(button.switch_inline_query(), Some(""));
        assert_eq!(button.callback_data(), None);
    }
}
