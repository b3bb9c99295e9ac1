use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Task priority. Older documents carry the Portuguese labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    #[serde(alias = "baixa")]
    Low,
    #[default]
    #[serde(alias = "media", alias = "média")]
    Medium,
    #[serde(alias = "alta")]
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Task entity for the to-do list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    /// `None` when the stored document has no priority or one we do not recognise
    pub priority: Option<TaskPriority>,
}

/// Request to create a new task
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateTaskRequest {
    pub text: String,
    pub priority: Option<TaskPriority>,
}

/// Request to update a task
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateTaskRequest {
    pub text: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<TaskPriority>,
}

/// Response containing a list of tasks
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}
