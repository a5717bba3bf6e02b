//! Core data models for the work dispatcher.
//!
//! This crate provides the fundamental data types shared by the queue and
//! the evaluator: work items, priority levels, the closed command payload
//! abstraction, and the evaluation context.

pub mod command;
pub mod context;
pub mod work;

// Re-export main types
pub use command::{BinOp, Command, Expr};
pub use context::{Context, Value};
pub use work::{Priority, WorkItem};
