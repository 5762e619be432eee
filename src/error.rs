//! Errors surfaced to whoever drives a [`Session`][crate::session::Session] or the feed.
//!
//! Empty structures are never an error here: dequeueing, popping or deleting from something
//! empty is a no-op that shows up as `None` or an unchanged rendering.

use std::num::ParseIntError;

use thiserror::Error;

/// A boxed failure from a [`PostStore`][crate::feed::PostStore] implementation.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for [`PostStore`][crate::feed::PostStore] methods.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// A required value was missing or only whitespace.
    #[error("a value is required")]
    Blank,

    /// A numeric operation got something that isn't an integer.
    #[error("{input:?} is not an integer")]
    NotAnInteger {
        /// The rejected input, as received.
        input: String,
        /// Why it failed to parse.
        #[source]
        source: ParseIntError,
    },

    /// The post store failed. Passed through untouched.
    #[error("post store failed: {0}")]
    Store(#[from] StoreError),

    /// A configuration file couldn't be parsed.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file couldn't be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is the caller's fault (bad input) rather than a collaborator failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Blank | Self::NotAnInteger { .. })
    }
}

/// Result alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors() {
        let parse = "abc".parse::<i64>().unwrap_err();
        let err = Error::NotAnInteger {
            input: "abc".to_string(),
            source: parse,
        };

        assert!(err.is_validation());
        assert!(Error::Blank.is_validation());
        assert_eq!(err.to_string(), "\"abc\" is not an integer");
    }

    #[test]
    fn store_errors_keep_their_message() {
        let err = Error::from(StoreError::from("disk on fire"));

        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "post store failed: disk on fire");
    }
}
