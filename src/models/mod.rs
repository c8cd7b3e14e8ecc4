/// Data models for accounts and task relations
pub mod account;
pub mod task;

pub use account::{Account, AuthenticatedUser, LoginRequest, RecoveryChangeRequest, RegisterRequest};
pub use task::{TaskDraft, TaskSummary};
