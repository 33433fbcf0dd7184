//! tgkit-model - Telegram Bot API object model.
//!
//! This crate provides the validated value objects exchanged with the
//! Telegram Bot API: keyboards, buttons, and inline query results. Every
//! object checks its own mandatory fields through [`Validate`] before being
//! sent, and maps to the documented JSON wire format through [`WireObject`]
//! (tree encoding) plus `serde` (streaming encoding and decoding).
//! Polymorphic result families are sum types whose decoder dispatches on
//! the wire `type` discriminator.
//!
//! # Example
//!
//! ```
//! use tgkit_model::{
//!     InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult,
//!     InlineQueryResultGame, Validate,
//! };
//!
//! # fn example() -> Result<(), tgkit_model::Error> {
//! let keyboard = InlineKeyboardMarkup::default()
//!     .add_row(vec![InlineKeyboardButton::new("Play").with_callback_data("play")]);
//! let result = InlineQueryResult::from(
//!     InlineQueryResultGame::new("g1", "chess").with_reply_markup(keyboard),
//! );
//! result.validate()?;
//! let wire = serde_json::to_string(&result).expect("serializable");
//! assert!(wire.starts_with(r#"{"type":"game""#));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod codec;
pub mod error;
pub mod types;
pub mod validate;

// Re-export primary types at crate root for convenience
pub use codec::{FieldSink, FromWire, TreeSink, WireObject};
pub use error::{DecodeError, Error, ValidationError};
pub use types::{
    CallbackGame, InlineKeyboardButton, InlineKeyboardMarkup, InlineQueryResult,
    InlineQueryResultArticle, InlineQueryResultGame,
};
pub use validate::Validate;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
