//! Task model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A unique identifier for a task, assigned by the remote service.
///
/// `TaskId::PLACEHOLDER` (zero) is reserved for the transient row shown
/// while a create request is outstanding; it never reaches the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Reserved id for the not-yet-persisted placeholder row.
    pub const PLACEHOLDER: Self = Self(0);

    /// Wrap a raw server-assigned id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value of this id.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Whether this id is the reserved placeholder id.
    #[must_use]
    pub const fn is_placeholder(self) -> bool {
        self.0 == Self::PLACEHOLDER.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A task in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, server-assigned (zero only for the placeholder)
    pub id: TaskId,
    /// Trimmed, non-empty title
    pub title: String,
    /// Completion flag
    pub completed: bool,
    /// Owner this task belongs to, constant for the session
    pub owner_id: i64,
}

impl Task {
    /// Build the transient placeholder row shown while a create request
    /// is outstanding.
    #[must_use]
    pub fn placeholder(title: impl Into<String>, owner_id: i64) -> Self {
        Self {
            id: TaskId::PLACEHOLDER,
            title: title.into(),
            completed: false,
            owner_id,
        }
    }

    /// Copy of this task with the completion flag flipped.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Copy of this task with a different title.
    #[must_use]
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Payload for creating a task; the server assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub completed: bool,
    pub owner_id: i64,
}

impl NewTask {
    /// New, not-yet-completed task payload.
    #[must_use]
    pub fn new(title: impl Into<String>, owner_id: i64) -> Self {
        Self {
            title: title.into(),
            completed: false,
            owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn task_id_parse_round_trip() {
        let id: TaskId = " 42 ".parse().unwrap();
        assert_eq!(id, TaskId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn placeholder_row_has_reserved_id() {
        let task = Task::placeholder("buy milk", 7);
        assert!(task.id.is_placeholder());
        assert_eq!(task.title, "buy milk");
        assert!(!task.completed);
        assert_eq!(task.owner_id, 7);
    }

    #[test]
    fn toggled_flips_only_completion() {
        let task = Task {
            id: TaskId::new(3),
            title: "a".to_string(),
            completed: false,
            owner_id: 7,
        };
        let flipped = task.toggled();
        assert!(flipped.completed);
        assert_eq!(flipped.id, task.id);
        assert_eq!(flipped.title, task.title);
        assert!(!flipped.toggled().completed);
    }

    #[test]
    fn task_serializes_with_camel_case_keys() {
        let task = Task {
            id: TaskId::new(1),
            title: "a".to_string(),
            completed: true,
            owner_id: 7,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "title": "a", "completed": true, "ownerId": 7})
        );
    }

    #[test]
    fn new_task_payload_has_no_id() {
        let payload = NewTask::new("buy milk", 7);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "buy milk", "completed": false, "ownerId": 7})
        );
    }

    #[test]
    fn task_deserializes_from_server_representation() {
        let task: Task = serde_json::from_str(
            r#"{"id": 42, "title": "buy milk", "completed": false, "ownerId": 7}"#,
        )
        .unwrap();
        assert_eq!(task.id, TaskId::new(42));
        assert_eq!(task.title, "buy milk");
    }
}
