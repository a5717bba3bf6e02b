//! Lazy drain iterator over a work queue.

use dispatch_eval::Evaluator;
use dispatch_models::{Context, Value};

use crate::error::Result;
use crate::queue::WorkQueue;

/// Lazy, finite, non-restartable drain of a [`WorkQueue`].
///
/// Each `next()` call dequeues exactly one payload, evaluates it against
/// the context, and yields the result - nothing is buffered. The iterator
/// finishes when the queue is empty.
///
/// Dropping the iterator mid-drain is the cancellation mechanism: items
/// not yet dequeued stay in the queue, and a later drain picks them up.
/// An evaluation failure is yielded as an `Err` at the faulting item;
/// results already yielded are not rolled back and later items remain
/// queued until pulled.
pub struct Drain<'a, E> {
    queue: &'a mut WorkQueue,
    evaluator: &'a E,
    context: &'a Context,
}

impl<'a, E: Evaluator> Drain<'a, E> {
    pub(crate) fn new(queue: &'a mut WorkQueue, evaluator: &'a E, context: &'a Context) -> Self {
        Self {
            queue,
            evaluator,
            context,
        }
    }
}

impl<'a, E: Evaluator> Iterator for Drain<'a, E> {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.queue.is_empty() {
            return None;
        }

        // Non-empty, so the dequeue cannot fail.
        let command = self.queue.get().ok()?;
        Some(
            self.evaluator
                .evaluate(&command, self.context)
                .map_err(Into::into),
        )
    }
}
