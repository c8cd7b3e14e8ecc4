/// Task relation gateway
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{TaskDraft, TaskSummary};

pub mod memory;

// Re-export commonly used types
pub use memory::MemoryTaskDirectory;

/// Contract owned by the task service
///
/// The account service reads through `tasks_followed_by`; `submit` and
/// `subscribe` are the write half of the relation so fixtures and
/// embedders can drive it end to end.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRelationGateway: Send + Sync {
    /// Create a task on behalf of a user
    async fn submit(&self, user_id: Uuid, draft: TaskDraft) -> Result<TaskSummary>;

    /// Register a follow relation between a task and a user
    async fn subscribe(&self, task_id: Uuid, user_id: Uuid) -> Result<()>;

    /// Tasks the user follows, in submission order
    async fn tasks_followed_by(&self, user_id: Uuid) -> Result<Vec<TaskSummary>>;
}
