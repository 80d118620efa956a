//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support parsing
    NotSupported(String),
    /// A JSON block carried a `type` the adapter does not recognize.
    /// Unrecognized blocks are rejected instead of silently dropped so a
    /// round-trip can never lose content without telling the caller.
    UnknownBlockType(String),
    /// FAQ region contained differing numbers of question and answer spans
    QuestionAnswerMismatch { questions: usize, answers: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            ConvertError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            ConvertError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            ConvertError::UnknownBlockType(kind) => {
                write!(f, "Unknown block type '{kind}'")
            }
            ConvertError::QuestionAnswerMismatch { questions, answers } => {
                write!(
                    f,
                    "FAQ region has {questions} question(s) but {answers} answer(s)"
                )
            }
        }
    }
}

impl std::error::Error for ConvertError {}
