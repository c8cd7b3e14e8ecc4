//! In-process task directory
//!
//! Minimal gateway implementation for tests and embedded use. Each task
//! keeps its follower set with it, so subscribe mutates a single map entry.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::error::{AccountError, Result};
use crate::models::{TaskDraft, TaskSummary};
use crate::tasks::TaskRelationGateway;

#[derive(Debug, Default)]
pub struct MemoryTaskDirectory {
    tasks: DashMap<Uuid, TaskEntry>,
    submit_seq: AtomicU64,
}

#[derive(Debug)]
struct TaskEntry {
    summary: TaskSummary,
    followers: HashSet<Uuid>,
    seq: u64,
}

impl MemoryTaskDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRelationGateway for MemoryTaskDirectory {
    async fn submit(&self, user_id: Uuid, draft: TaskDraft) -> Result<TaskSummary> {
        let summary = TaskSummary {
            id: Uuid::new_v4(),
            name: draft.name,
            full_name: draft.full_name,
            description: draft.description,
            submitted_by: user_id,
        };

        let seq = self.submit_seq.fetch_add(1, Ordering::Relaxed);
        self.tasks.insert(
            summary.id,
            TaskEntry {
                summary: summary.clone(),
                followers: HashSet::new(),
                seq,
            },
        );

        Ok(summary)
    }

    async fn subscribe(&self, task_id: Uuid, user_id: Uuid) -> Result<()> {
        let mut entry = self
            .tasks
            .get_mut(&task_id)
            .ok_or(AccountError::TaskNotFound)?;
        entry.followers.insert(user_id);
        Ok(())
    }

    async fn tasks_followed_by(&self, user_id: Uuid) -> Result<Vec<TaskSummary>> {
        let mut followed: Vec<(u64, TaskSummary)> = self
            .tasks
            .iter()
            .filter(|entry| entry.value().followers.contains(&user_id))
            .map(|entry| (entry.value().seq, entry.value().summary.clone()))
            .collect();

        followed.sort_by_key(|(seq, _)| *seq);

        Ok(followed.into_iter().map(|(_, summary)| summary).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> TaskDraft {
        TaskDraft {
            name: name.to_string(),
            full_name: format!("{} full", name),
            description: "a task".to_string(),
        }
    }

    #[tokio::test]
    async fn submit_then_subscribe_then_list() {
        let directory = MemoryTaskDirectory::new();
        let user_id = Uuid::new_v4();

        let task = directory.submit(user_id, draft("bench")).await.unwrap();
        assert_eq!(task.submitted_by, user_id);

        // Submitting alone does not follow the task
        assert!(directory.tasks_followed_by(user_id).await.unwrap().is_empty());

        directory.subscribe(task.id, user_id).await.unwrap();
        let followed = directory.tasks_followed_by(user_id).await.unwrap();
        assert_eq!(followed.len(), 1);
        assert_eq!(followed[0].id, task.id);
        assert_eq!(followed[0].name, "bench");
    }

    #[tokio::test]
    async fn subscribe_unknown_task_fails() {
        let directory = MemoryTaskDirectory::new();
        let result = directory.subscribe(Uuid::new_v4(), Uuid::new_v4()).await;
        assert!(matches!(result, Err(AccountError::TaskNotFound)));
    }

    #[tokio::test]
    async fn subscription_is_idempotent() {
        let directory = MemoryTaskDirectory::new();
        let user_id = Uuid::new_v4();
        let task = directory.submit(user_id, draft("bench")).await.unwrap();

        directory.subscribe(task.id, user_id).await.unwrap();
        directory.subscribe(task.id, user_id).await.unwrap();

        assert_eq!(directory.tasks_followed_by(user_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn follows_are_per_user() {
        let directory = MemoryTaskDirectory::new();
        let submitter = Uuid::new_v4();
        let watcher = Uuid::new_v4();
        let task = directory.submit(submitter, draft("bench")).await.unwrap();

        directory.subscribe(task.id, watcher).await.unwrap();

        assert!(directory
            .tasks_followed_by(submitter)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(directory.tasks_followed_by(watcher).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn listing_preserves_submission_order() {
        let directory = MemoryTaskDirectory::new();
        let user_id = Uuid::new_v4();

        let first = directory.submit(user_id, draft("first")).await.unwrap();
        let second = directory.submit(user_id, draft("second")).await.unwrap();
        let third = directory.submit(user_id, draft("third")).await.unwrap();

        // Subscribe out of order
        directory.subscribe(third.id, user_id).await.unwrap();
        directory.subscribe(first.id, user_id).await.unwrap();
        directory.subscribe(second.id, user_id).await.unwrap();

        let followed = directory.tasks_followed_by(user_id).await.unwrap();
        let names: Vec<&str> = followed.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
