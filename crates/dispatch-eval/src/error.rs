//! Error types for command evaluation.

use thiserror::Error;

/// Errors that can occur while evaluating a command against a context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Referenced name is not bound in the context.
    #[error("unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// A binding was used arithmetically but is not an integer.
    #[error("binding `{name}` is not an integer")]
    TypeMismatch { name: String },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Arithmetic overflow.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type alias for evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;
