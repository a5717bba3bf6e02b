//! Error types for queue operations.

use dispatch_eval::EvalError;
use thiserror::Error;

/// Errors that can occur during queue operations.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Enqueued record is not a well-formed work item.
    #[error("invalid work item: {0}")]
    Validation(String),

    /// Dequeue attempted on an empty queue.
    #[error("queue is empty")]
    Empty,

    /// A payload failed to evaluate during a drain.
    #[error("evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

/// Result type alias for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
