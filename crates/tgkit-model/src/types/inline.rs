//! Inline query result family.
//!
//! Results share one wire shape selector: the `type` discriminator field.
//! Each member writes its own fixed literal on encode, and the family
//! decoder dispatches on the literal before reading any member field, since
//! members have disjoint optional field sets.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::trace;

use crate::codec::{self, FieldSink, FromWire, WireObject};
use crate::error::{DecodeError, ValidationError};
use crate::types::InlineKeyboardMarkup;
use crate::validate::{self, Validate};

const FAMILY: &str = "InlineQueryResult";
const GAME: &str = "InlineQueryResultGame";
const ARTICLE: &str = "InlineQueryResultArticle";

const TYPE: &str = "type";
const ID: &str = "id";
const GAME_SHORT_NAME: &str = "game_short_name";
const TITLE: &str = "title";
const URL: &str = "url";
const DESCRIPTION: &str = "description";
const THUMB_URL: &str = "thumb_url";
const REPLY_MARKUP: &str = "reply_markup";

/// One result offered in response to an inline query.
///
/// Heterogeneous result lists are `Vec<InlineQueryResult>`; the transport
/// layer can encode and validate them without knowing the concrete shapes.
///
/// # Example
///
/// ```
/// use tgkit_model::{FromWire, InlineQueryResult};
/// use serde_json::json;
///
/// let result = InlineQueryResult::from_value(&json!({
///     "type": "game",
///     "id": "g1",
///     "game_short_name": "chess",
/// }))?;
/// assert_eq!(result.result_type(), "game");
/// # Ok::<(), tgkit_model::DecodeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineQueryResult {
    /// A game, `type = "game"`.
    Game(InlineQueryResultGame),
    /// A link to an article or web page, `type = "article"`.
    Article(InlineQueryResultArticle),
}

impl InlineQueryResult {
    /// The discriminator literal of the concrete shape.
    pub fn result_type(&self) -> &'static str {
        match self {
            Self::Game(_) => InlineQueryResultGame::TYPE,
            Self::Article(_) => InlineQueryResultArticle::TYPE,
        }
    }

    /// Unique identifier of this result.
    pub fn id(&self) -> &str {
        match self {
            Self::Game(game) => game.id(),
            Self::Article(article) => article.id(),
        }
    }
}

impl WireObject for InlineQueryResult {
    fn write_fields<S: FieldSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        match self {
            Self::Game(game) => game.write_fields(sink),
            Self::Article(article) => article.write_fields(sink),
        }
    }
}

impl FromWire for InlineQueryResult {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let map = codec::as_object(value, FAMILY)?;
        // Dispatch before decoding anything else.
        let result_type = codec::require_str(map, FAMILY, TYPE)?;
        trace!(%result_type, "dispatching inline query result");
        match result_type.as_str() {
            InlineQueryResultGame::TYPE => {
                Ok(Self::Game(InlineQueryResultGame::from_value(value)?))
            }
            InlineQueryResultArticle::TYPE => {
                Ok(Self::Article(InlineQueryResultArticle::from_value(value)?))
            }
            _ => Err(DecodeError::UnknownVariant {
                family: FAMILY,
                value: result_type,
            }),
        }
    }
}

impl Validate for InlineQueryResult {
    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Self::Game(game) => game.validate(),
            Self::Article(article) => article.validate(),
        }
    }
}

impl Serialize for InlineQueryResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for InlineQueryResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize(deserializer)
    }
}

impl From<InlineQueryResultGame> for InlineQueryResult {
    fn from(result: InlineQueryResultGame) -> Self {
        Self::Game(result)
    }
}

impl From<InlineQueryResultArticle> for InlineQueryResult {
    fn from(result: InlineQueryResultArticle) -> Self {
        Self::Article(result)
    }
}

/// Decode the attachment fields shared by every family member.
///
/// Applied after variant dispatch; the fields are read identically
/// regardless of the concrete shape.
fn shared_reply_markup(
    map: &Map<String, Value>,
) -> Result<Option<InlineKeyboardMarkup>, DecodeError> {
    codec::optional_nested(map, REPLY_MARKUP)
}

/// Check that a directly decoded member carries its own discriminator.
fn expect_discriminator(
    map: &Map<String, Value>,
    object: &'static str,
    expected: &'static str,
) -> Result<(), DecodeError> {
    let found = codec::require_str(map, object, TYPE)?;
    if found != expected {
        return Err(DecodeError::MalformedInput {
            object,
            reason: format!("field 'type' must be '{expected}', got '{found}'"),
        });
    }
    Ok(())
}

/// Represents a game offered as an inline query result.
///
/// # Example
///
/// ```
/// use tgkit_model::{InlineQueryResultGame, Validate, WireObject};
///
/// let result = InlineQueryResultGame::new("g1", "chess");
/// assert!(result.validate().is_ok());
/// assert_eq!(result.to_value()["type"], "game");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineQueryResultGame {
    id: String,
    game_short_name: String,
    reply_markup: Option<InlineKeyboardMarkup>,
}

impl InlineQueryResultGame {
    /// Discriminator literal written into the `type` field.
    pub const TYPE: &'static str = "game";

    /// Create a game result from its unique identifier and the short name
    /// of the game resource.
    ///
    /// The identifier is opaque to this layer; the upstream API allows
    /// 1-64 bytes and enforces the length itself.
    pub fn new(id: impl Into<String>, game_short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            game_short_name: game_short_name.into(),
            reply_markup: None,
        }
    }

    /// Attach an inline keyboard to the result.
    pub fn with_reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }

    /// Unique identifier of this result.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Short name of the game.
    pub fn game_short_name(&self) -> &str {
        &self.game_short_name
    }

    pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
        self.reply_markup.as_ref()
    }
}

impl WireObject for InlineQueryResultGame {
    fn write_fields<S: FieldSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.string(TYPE, Self::TYPE)?;
        sink.string(ID, &self.id)?;
        sink.string(GAME_SHORT_NAME, &self.game_short_name)?;
        sink.optional_object(REPLY_MARKUP, self.reply_markup.as_ref())
    }
}

impl FromWire for InlineQueryResultGame {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let map = codec::as_object(value, GAME)?;
        expect_discriminator(map, GAME, Self::TYPE)?;
        Ok(Self {
            id: codec::require_str(map, GAME, ID)?,
            game_short_name: codec::require_str(map, GAME, GAME_SHORT_NAME)?,
            reply_markup: shared_reply_markup(map)?,
        })
    }
}

impl Validate for InlineQueryResultGame {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty(GAME, ID, &self.id)?;
        validate::non_empty(GAME, GAME_SHORT_NAME, &self.game_short_name)?;
        if let Some(markup) = &self.reply_markup {
            markup.validate()?;
        }
        Ok(())
    }
}

impl Serialize for InlineQueryResultGame {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for InlineQueryResultGame {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize(deserializer)
    }
}

/// Represents a link to an article or web page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineQueryResultArticle {
    id: String,
    title: String,
    url: Option<String>,
    description: Option<String>,
    thumb_url: Option<String>,
    reply_markup: Option<InlineKeyboardMarkup>,
}

impl InlineQueryResultArticle {
    /// Discriminator literal written into the `type` field.
    pub const TYPE: &'static str = "article";

    /// Create an article result from its unique identifier and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: None,
            description: None,
            thumb_url: None,
            reply_markup: None,
        }
    }

    /// URL of the result.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Short description of the result.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// URL of the result's thumbnail.
    pub fn with_thumb_url(mut self, thumb_url: impl Into<String>) -> Self {
        self.thumb_url = Some(thumb_url.into());
        self
    }

    /// Attach an inline keyboard to the result.
    pub fn with_reply_markup(mut self, markup: InlineKeyboardMarkup) -> Self {
        self.reply_markup = Some(markup);
        self
    }

    /// Unique identifier of this result.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title of the result.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn thumb_url(&self) -> Option<&str> {
        self.thumb_url.as_deref()
    }

    pub fn reply_markup(&self) -> Option<&InlineKeyboardMarkup> {
        self.reply_markup.as_ref()
    }
}

impl WireObject for InlineQueryResultArticle {
    fn write_fields<S: FieldSink>(&self, sink: &mut S) -> Result<(), S::Error> {
        sink.string(TYPE, Self::TYPE)?;
        sink.string(ID, &self.id)?;
        sink.string(TITLE, &self.title)?;
        sink.optional_string(URL, self.url.as_deref())?;
        sink.optional_string(DESCRIPTION, self.description.as_deref())?;
        sink.optional_string(THUMB_URL, self.thumb_url.as_deref())?;
        sink.optional_object(REPLY_MARKUP, self.reply_markup.as_ref())
    }
}

impl FromWire for InlineQueryResultArticle {
    fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let map = codec::as_object(value, ARTICLE)?;
        expect_discriminator(map, ARTICLE, Self::TYPE)?;
        Ok(Self {
            id: codec::require_str(map, ARTICLE, ID)?,
            title: codec::require_str(map, ARTICLE, TITLE)?,
            url: codec::optional_str(map, ARTICLE, URL)?,
            description: codec::optional_str(map, ARTICLE, DESCRIPTION)?,
            thumb_url: codec::optional_str(map, ARTICLE, THUMB_URL)?,
            reply_markup: shared_reply_markup(map)?,
        })
    }
}

impl Validate for InlineQueryResultArticle {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::non_empty(ARTICLE, ID, &self.id)?;
        validate::non_empty(ARTICLE, TITLE, &self.title)?;
        if let Some(markup) = &self.reply_markup {
            markup.validate()?;
        }
        Ok(())
    }
}

impl Serialize for InlineQueryResultArticle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for InlineQueryResultArticle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize(deserializer)
    }
}
