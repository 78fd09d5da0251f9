//! Filter mode for the visible task projection

use std::fmt;
use std::str::FromStr;

use crate::models::Task;

/// View-only partition of the task list. Never persisted remotely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// Whether a task belongs to this partition.
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(format!(
                "unknown filter '{other}' (expected all, active, or completed)"
            )),
        }
    }
}

/// Pure projection of the visible subset, preserving list order.
#[must_use]
pub fn visible_tasks(tasks: &[Task], mode: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|task| mode.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::TaskId;

    fn sample() -> Vec<Task> {
        vec![
            Task {
                id: TaskId::new(1),
                title: "a".to_string(),
                completed: false,
                owner_id: 7,
            },
            Task {
                id: TaskId::new(2),
                title: "b".to_string(),
                completed: true,
                owner_id: 7,
            },
            Task {
                id: TaskId::new(3),
                title: "c".to_string(),
                completed: false,
                owner_id: 7,
            },
        ]
    }

    #[test]
    fn all_keeps_order_unchanged() {
        let tasks = sample();
        let visible = visible_tasks(&tasks, FilterMode::All);
        let ids: Vec<_> = visible.iter().map(|task| task.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn active_keeps_only_uncompleted() {
        let tasks = sample();
        let visible = visible_tasks(&tasks, FilterMode::Active);
        let ids: Vec<_> = visible.iter().map(|task| task.id.as_i64()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn completed_keeps_only_completed() {
        let tasks = sample();
        let visible = visible_tasks(&tasks, FilterMode::Completed);
        let ids: Vec<_> = visible.iter().map(|task| task.id.as_i64()).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn parse_accepts_known_names() {
        assert_eq!(" Active ".parse::<FilterMode>().unwrap(), FilterMode::Active);
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert!("done".parse::<FilterMode>().is_err());
    }
}
