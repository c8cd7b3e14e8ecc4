use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// New task submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub name: String,
    pub full_name: String,
    pub description: String,
}

/// Task as reported back by the task relation gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: Uuid,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub submitted_by: Uuid,
}
