//! The Task record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Priority, TaskId};

/// A single to-do item
///
/// Field names on the wire follow the persisted format (`task`, `date`), so a
/// list saved by the dashboard loads unchanged. Records saved before ids
/// existed get a fresh id on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier, assigned at creation
    #[serde(default)]
    pub id: TaskId,

    /// What needs doing (never empty)
    #[serde(rename = "task")]
    pub description: String,

    /// Due date
    #[serde(rename = "date")]
    pub due_date: NaiveDate,

    /// Priority chosen at creation
    #[serde(default)]
    pub priority: Priority,

    /// Marked as important (starred)
    #[serde(default)]
    pub important: bool,

    /// Marked as done
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new pending, non-important task
    pub fn new(description: impl Into<String>, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            id: TaskId::generate(),
            description: description.into(),
            due_date,
            priority,
            important: false,
            completed: false,
        }
    }

    /// Primary line shown in a list: `"Buy milk (High)"`
    pub fn title(&self) -> String {
        format!("{} ({})", self.description, self.priority)
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title(), self.due_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk", date("2024-01-01"), Priority::High);
        assert_eq!(task.description, "Buy milk");
        assert!(!task.completed);
        assert!(!task.important);
        assert_eq!(task.priority, Priority::High);
    }

    #[test]
    fn test_title_and_display() {
        let task = Task::new("Buy milk", date("2024-01-01"), Priority::High);
        assert_eq!(task.title(), "Buy milk (High)");
        assert_eq!(task.to_string(), "Buy milk (High) - 2024-01-01");
    }

    #[test]
    fn test_wire_field_names() {
        let mut task = Task::new("Buy milk", date("2024-01-01"), Priority::High);
        task.id = TaskId::from("t1");
        task.important = true;

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "t1",
                "task": "Buy milk",
                "date": "2024-01-01",
                "priority": "High",
                "important": true,
                "completed": false
            })
        );
    }

    #[test]
    fn test_legacy_record_without_id() {
        let json = r#"{"task":"Water plants","date":"2024-03-05","important":false,"completed":true,"priority":"Medium"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "Water plants");
        assert_eq!(task.due_date, date("2024-03-05"));
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.completed);
        assert!(!task.id.as_str().is_empty());
    }
}
