use shared_types::{Task, TaskPriority};

use crate::error::ValidationError;

/// Ordering weight of a priority. A task without a recognised priority
/// ranks with the low ones, even though new tasks default to medium.
pub fn priority_weight(priority: Option<TaskPriority>) -> u8 {
    match priority {
        Some(TaskPriority::High) => 3,
        Some(TaskPriority::Medium) => 2,
        Some(TaskPriority::Low) | None => 1,
    }
}

/// Higher priority first, then most recently created first.
/// Remaining ties keep their input order.
pub fn rank(tasks: &[Task]) -> Vec<Task> {
    let mut ranked = tasks.to_vec();
    ranked.sort_by(|a, b| {
        priority_weight(b.priority)
            .cmp(&priority_weight(a.priority))
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
    ranked
}

pub fn pending_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Returns the text trimmed, or an error if nothing is left
pub fn validate_task_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTaskText);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, Utc};

    fn base() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn task(id: &str, priority: Option<TaskPriority>, minutes: i64) -> Task {
        Task {
            id: id.to_string(),
            text: format!("task {id}"),
            completed: false,
            created_at: base() + Duration::minutes(minutes),
            priority,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_high_priority_beats_recency() {
        let tasks = vec![
            task("A", Some(TaskPriority::Low), 10),
            task("B", Some(TaskPriority::High), 0),
        ];
        assert_eq!(ids(&rank(&tasks)), vec!["B", "A"]);
    }

    #[test]
    fn test_ties_broken_by_most_recent() {
        let tasks = vec![
            task("old", Some(TaskPriority::Medium), 0),
            task("new", Some(TaskPriority::Medium), 30),
            task("mid", Some(TaskPriority::Medium), 15),
        ];
        assert_eq!(ids(&rank(&tasks)), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_priority_bands() {
        let tasks = vec![
            task("l1", Some(TaskPriority::Low), 50),
            task("u1", None, 60),
            task("m1", Some(TaskPriority::Medium), 5),
            task("h1", Some(TaskPriority::High), 1),
            task("m2", Some(TaskPriority::Medium), 40),
            task("h2", Some(TaskPriority::High), 2),
        ];
        let ranked = rank(&tasks);

        let weights: Vec<u8> = ranked.iter().map(|t| priority_weight(t.priority)).collect();
        let mut sorted = weights.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(weights, sorted);
        assert_eq!(ids(&ranked), vec!["h2", "h1", "m2", "m1", "u1", "l1"]);
    }

    #[test]
    fn test_unset_priority_ranks_as_low() {
        assert_eq!(priority_weight(None), priority_weight(Some(TaskPriority::Low)));

        let tasks = vec![
            task("unset", None, 10),
            task("medium", Some(TaskPriority::Medium), 0),
        ];
        assert_eq!(ids(&rank(&tasks)), vec!["medium", "unset"]);
    }

    #[test]
    fn test_rank_is_stable() {
        let tasks = vec![
            task("first", Some(TaskPriority::High), 0),
            task("second", Some(TaskPriority::High), 0),
            task("third", Some(TaskPriority::High), 0),
        ];
        assert_eq!(ids(&rank(&tasks)), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_pending_count() {
        let mut tasks = vec![task("a", None, 0), task("b", None, 1), task("c", None, 2)];
        tasks[1].completed = true;
        assert_eq!(pending_count(&tasks), 2);
    }

    #[test]
    fn test_validate_task_text() {
        assert_eq!(validate_task_text("  buy milk "), Ok("buy milk"));
        assert_eq!(validate_task_text(" \t "), Err(ValidationError::EmptyTaskText));
    }
}
