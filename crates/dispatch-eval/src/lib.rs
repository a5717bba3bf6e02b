//! Command evaluator for the work dispatcher.
//!
//! The queue hands each dequeued payload to an [`Evaluator`] together with
//! the caller's [`Context`](dispatch_models::Context) of bindings. The queue
//! itself never interprets payloads; this crate is the collaborator that
//! does.

pub mod error;
pub mod evaluator;

pub use error::{EvalError, Result};
pub use evaluator::{Evaluator, ExprEvaluator};
