//! Work item types for the dispatcher.
//!
//! A work item pairs an executable command payload with a priority level.
//! Items are queued, then drained in `(priority, arrival)` order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::Command;

/// Priority level of a work item.
///
/// Lower numeric value = higher precedence: an item at priority 0 dequeues
/// before an item at priority 10. The documented range is `[0, 10]`; values
/// above 10 are accepted and simply sort at their numeric position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u8);

impl Priority {
    /// Highest precedence (0) - dequeued first.
    pub const HIGHEST: Priority = Priority(0);

    /// Lowest precedence (10) - the default band for items that omit a
    /// priority.
    pub const LOWEST: Priority = Priority(10);

    /// Returns the numeric value of this priority.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::LOWEST
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Priority {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// A unit of work submitted to the dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// The command payload to execute when the item is dequeued.
    pub command: Command,

    /// Priority level. `None` means the producer omitted it; the queue
    /// assigns [`Priority::LOWEST`] at enqueue time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,

    /// When the work item was created. Metadata only - dequeue order is
    /// decided by the arrival sequence the queue assigns, never the clock.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl WorkItem {
    /// Creates a new work item with no explicit priority.
    pub fn new(command: Command) -> Self {
        Self {
            command,
            priority: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a new work item with the specified priority.
    pub fn with_priority(command: Command, priority: impl Into<Priority>) -> Self {
        let mut item = Self::new(command);
        item.priority = Some(priority.into());
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Expr;

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::HIGHEST < Priority::LOWEST);
        assert!(Priority(3) < Priority(7));
        assert_eq!(Priority::default(), Priority::LOWEST);
    }

    #[test]
    fn test_priority_out_of_range_sorts_numerically() {
        // Values above 10 are passed through, not clamped.
        assert!(Priority::LOWEST < Priority(11));
        assert_eq!(Priority(42).value(), 42);
    }

    #[test]
    fn test_new_has_no_priority() {
        let item = WorkItem::new(Command::action("foo"));
        assert!(item.priority.is_none());
    }

    #[test]
    fn test_with_priority() {
        let item = WorkItem::with_priority(Command::action("foo"), 3);
        assert_eq!(item.priority, Some(Priority(3)));
    }

    #[test]
    fn test_item_json_shape() {
        let item = WorkItem::with_priority(Command::expr(Expr::var("x")), 5);
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["priority"], 5);
        assert!(value["command"].is_object());

        let back: WorkItem = serde_json::from_value(value).unwrap();
        assert_eq!(back.command, item.command);
        assert_eq!(back.priority, item.priority);
    }

    #[test]
    fn test_created_at_defaults_on_decode() {
        // A record from the wire need not carry a timestamp.
        let value = serde_json::json!({ "command": { "action": "foo" } });
        let item: WorkItem = serde_json::from_value(value).unwrap();
        assert_eq!(item.command, Command::action("foo"));
    }
}
