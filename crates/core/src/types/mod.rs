//! Core types for Brandhub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod channel;
pub mod email;
pub mod id;
pub mod price;
pub mod scope;
pub mod status;

pub use channel::*;
pub use email::{Email, EmailError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use scope::{ALL_SCOPE, Scope};
pub use status::*;

/// A string did not name any variant of an enumerated type.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    /// Create an error for `value` failing to parse as `kind`.
    #[must_use]
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Name of the type that failed to parse.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
