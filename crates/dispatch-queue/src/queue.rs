//! WorkQueue - stable priority queue over work items.
//!
//! Ordering is imposed by a `BinaryHeap` with a custom `Ord`: priority
//! first, arrival sequence as tiebreak. The sequence is an explicit
//! secondary key, so heap instability can never reorder a priority band.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use dispatch_eval::Evaluator;
use dispatch_models::{Command, Context, Priority, WorkItem};
use tracing::debug;

use crate::drain::Drain;
use crate::error::{QueueError, Result};

/// Wrapper for WorkItem that implements custom ordering for BinaryHeap.
///
/// # Ordering Rules
///
/// 1. Lower priority value comes first (0 is the most urgent band)
/// 2. For same priority, lower sequence (earlier arrival) comes first
///
/// Both comparisons are inverted because BinaryHeap is a max-heap but we
/// want the minimum `(priority, sequence)` on top.
#[derive(Debug, Clone)]
struct SequencedWork {
    priority: Priority,
    sequence: u64,
    item: WorkItem,
}

impl PartialEq for SequencedWork {
    fn eq(&self, other: &Self) -> bool {
        // Sequence numbers are unique within a queue.
        self.sequence == other.sequence
    }
}

impl Eq for SequencedWork {}

impl PartialOrd for SequencedWork {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SequencedWork {
    fn cmp(&self, other: &Self) -> Ordering {
        match other.priority.cmp(&self.priority) {
            // Same band: earlier arrival first, reversed for the max-heap
            Ordering::Equal => other.sequence.cmp(&self.sequence),
            ord => ord,
        }
    }
}

/// Stable priority queue of work items.
///
/// Single-threaded and in-memory: all mutation goes through `&mut self`,
/// so exclusive access is enforced at compile time. Wrap the queue in a
/// lock externally if it must be shared across threads.
///
/// # Validation
///
/// Two construction modes collapse the validating and non-validating
/// variants of this design:
/// - [`WorkQueue::new`] checks each loose record's shape before decoding
///   and assigns the default priority (10, the lowest band) to items that
///   omit one.
/// - [`WorkQueue::permissive`] skips the shape check and assumes callers
///   supply well-formed records with an explicit priority. Records that
///   fail to decode still surface a [`QueueError::Validation`].
pub struct WorkQueue {
    /// Pending items ordered by `(priority, sequence)`.
    heap: BinaryHeap<SequencedWork>,
    /// Next arrival sequence number. Monotonic for the queue's lifetime,
    /// never reset on drain - only relative order matters.
    next_sequence: u64,
    /// Whether `put` validates record shape and assigns default priority.
    validate: bool,
}

impl WorkQueue {
    /// Creates an empty queue with validation enabled.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
            validate: true,
        }
    }

    /// Creates an empty queue that skips item validation and default
    /// priority assignment.
    pub fn permissive() -> Self {
        Self {
            validate: false,
            ..Self::new()
        }
    }

    /// Returns true if no items remain.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pending items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Enqueues one loose record.
    ///
    /// Validates the record (unless the queue is permissive), decodes it
    /// into a [`WorkItem`], fills in the default priority when absent, and
    /// appends it to the store. A rejected record never mutates the queue.
    pub fn put(&mut self, value: serde_json::Value) -> Result<()> {
        if self.validate {
            Self::validate_item(&value)?;
        }

        let mut item: WorkItem =
            serde_json::from_value(value).map_err(|e| QueueError::Validation(e.to_string()))?;

        if self.validate && item.priority.is_none() {
            item.priority = Some(Priority::default());
        }

        self.push(item);
        Ok(())
    }

    /// Enqueues one typed work item.
    ///
    /// The shape is statically valid, so this cannot fail; an absent
    /// priority still lands in the default (lowest) band.
    pub fn put_item(&mut self, item: WorkItem) {
        self.push(item);
    }

    /// Enqueues each record of an ordered batch, in order.
    ///
    /// Fails fast on the first invalid record; records enqueued before it
    /// remain in the queue (a simple loop, not a transaction).
    pub fn add_items(&mut self, values: impl IntoIterator<Item = serde_json::Value>) -> Result<()> {
        for value in values {
            self.put(value)?;
        }
        Ok(())
    }

    /// Removes and returns the payload of the minimum `(priority, sequence)`
    /// item.
    ///
    /// # Errors
    ///
    /// [`QueueError::Empty`] if the queue has no items.
    pub fn get(&mut self) -> Result<Command> {
        let work = self.heap.pop().ok_or(QueueError::Empty)?;
        debug!(
            sequence = work.sequence,
            priority = %work.priority,
            "dequeued work item"
        );
        Ok(work.item.command)
    }

    /// Checks that a loose record is a well-formed work item: a JSON
    /// object carrying a `command` field.
    ///
    /// # Errors
    ///
    /// [`QueueError::Validation`] when either check fails.
    pub fn validate_item(value: &serde_json::Value) -> Result<()> {
        let record = value
            .as_object()
            .ok_or_else(|| QueueError::Validation("item is not a record".to_string()))?;

        if !record.contains_key("command") {
            return Err(QueueError::Validation(
                "item does not have a command".to_string(),
            ));
        }

        Ok(())
    }

    /// Drains the queue lazily, evaluating each dequeued payload against
    /// `context`.
    ///
    /// The returned iterator dequeues and evaluates exactly one item per
    /// `next()` call and finishes when the queue is empty. The caller may
    /// stop pulling at any point; unexecuted items stay in the queue.
    pub fn execute_all<'a, E: Evaluator>(
        &'a mut self,
        evaluator: &'a E,
        context: &'a Context,
    ) -> Drain<'a, E> {
        Drain::new(self, evaluator, context)
    }

    fn push(&mut self, item: WorkItem) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let priority = item.priority.unwrap_or_default();
        debug!(sequence, priority = %priority, "enqueued work item");

        self.heap.push(SequencedWork {
            priority,
            sequence,
            item,
        });
    }
}

impl Default for WorkQueue {
    fn default() -> Self {
        Self::new()
    }
}
