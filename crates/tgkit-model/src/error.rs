//! Error types for the tgkit object model.
//!
//! Validation failures and wire-decoding failures are separate kinds: a
//! [`ValidationError`] means the caller has not filled a mandatory attribute
//! yet, while a [`DecodeError`] means the input JSON does not match the wire
//! schema at all. Neither is ever produced by the other path.

use thiserror::Error;

/// The unified error type for object-model operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A mandatory attribute is missing or empty.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input JSON does not match the wire schema.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

/// A mandatory attribute was empty at validation time.
///
/// Recoverable: fill the named field and validate again. Only returned from
/// [`Validate::validate`](crate::Validate::validate), never from encode or
/// decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{object}: {field} parameter can't be empty")]
pub struct ValidationError {
    /// Name of the object that failed validation.
    pub object: &'static str,
    /// The mandatory field that was missing or empty.
    pub field: &'static str,
}

/// Wire-level decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The discriminator value matched no member of the family.
    ///
    /// This is a protocol-compatibility failure: the remote side sent a
    /// shape this catalog does not know about.
    #[error("unknown {family} type '{value}'")]
    UnknownVariant {
        /// The polymorphic family being decoded.
        family: &'static str,
        /// The unrecognized discriminator value.
        value: String,
    },

    /// The input violates the wire schema for the object.
    #[error("malformed {object}: {reason}")]
    MalformedInput {
        /// Name of the object being decoded.
        object: &'static str,
        /// What was wrong with the input.
        reason: String,
    },
}
