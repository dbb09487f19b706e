//! Error types for the sortstep core.
//!
//! The stepping path has no recoverable errors: a bad cursor is a bug in a
//! state machine and panics. The only fallible core operation is decoding
//! user input into a [`Command`](crate::Command).

use std::error::Error;
use std::fmt;

/// Failure to decode a [`Command`](crate::Command) from text or a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseCommandError {
    /// The command name is not recognised.
    UnknownName {
        /// The rejected input, trimmed.
        name: String,
    },
    /// The key is not bound in the control scheme.
    UnboundKey {
        /// The rejected key.
        key: char,
    },
}

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownName { name } => write!(f, "unknown command '{name}'"),
            Self::UnboundKey { key } => write!(f, "key {key:?} is not bound to a command"),
        }
    }
}

impl Error for ParseCommandError {}
