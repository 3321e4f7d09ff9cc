//! Error types for protocol input handling
//!
//! Everything the bot receives comes over the wire, so every failure
//! mode here is some form of malformed input. Illegal moves are not
//! represented: feeding one to the core is a caller bug, caught by
//! debug assertions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("{context} payload: expected {expected} values, got {actual}")]
    ValueCount {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("malformed integer token '{token}'")]
    MalformedInt { token: String },

    #[error("cell value {value} is not 0, 1 or 2")]
    InvalidCell { value: i8 },

    #[error("macroboard value {value} is not a known sentinel")]
    InvalidMacro { value: i8 },

    #[error("player id {value} is not 1 or 2")]
    InvalidPlayer { value: i8 },

    #[error("move requested before 'settings your_botid'")]
    MissingBotId,

    #[error("unrecognized command: '{line}'")]
    UnknownCommand { line: String },
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
