//! The API object catalog.
//!
//! One file per object shape, with field names matching the upstream API
//! schema. Every object implements [`WireObject`](crate::WireObject),
//! [`FromWire`](crate::FromWire), and [`Validate`](crate::Validate).

mod button;
mod game;
mod inline;
mod markup;

pub use button::InlineKeyboardButton;
pub use game::CallbackGame;
pub use inline::{InlineQueryResult, InlineQueryResultArticle, InlineQueryResultGame};
pub use markup::InlineKeyboardMarkup;
