//! Stable priority work queue with lazy drain execution.
//!
//! This crate provides the `WorkQueue`:
//! - Stable ordering using `BinaryHeap` with custom `Ord` on
//!   `(priority, arrival sequence)` - FIFO within a priority band
//! - Loose-record enqueue (`serde_json::Value`) with optional validation,
//!   plus a typed enqueue for Rust-native callers
//! - Lazy `execute_all` drain that routes each payload to an injected
//!   [`Evaluator`](dispatch_eval::Evaluator)
//!
//! # Example
//!
//! ```
//! use dispatch_models::{Command, Context, Expr, Value, WorkItem};
//! use dispatch_eval::ExprEvaluator;
//! use dispatch_queue::WorkQueue;
//!
//! let mut queue = WorkQueue::new();
//! queue.put_item(WorkItem::with_priority(
//!     Command::expr(Expr::mul(Expr::var("x"), Expr::lit(4))),
//!     3,
//! ));
//! queue.put_item(WorkItem::with_priority(Command::action("greet"), 7));
//!
//! let context = Context::new()
//!     .with_binding("x", 2)
//!     .with_binding("greet", "hello");
//! let evaluator = ExprEvaluator::new();
//!
//! let results: Vec<Value> = queue
//!     .execute_all(&evaluator, &context)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(results, vec![Value::Int(8), Value::Str("hello".into())]);
//! ```

pub mod drain;
pub mod error;
pub mod queue;

pub use drain::Drain;
pub use error::{QueueError, Result};
pub use queue::WorkQueue;
