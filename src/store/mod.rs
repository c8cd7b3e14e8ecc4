/// Account persistence boundary
use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::Account;

pub mod memory;

// Re-export commonly used types
pub use memory::MemoryAccountStore;

/// Input for creating an account record
///
/// The store assigns the id, timestamps, and initial revision.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Account record CRUD
///
/// Implementations enforce username/email uniqueness at `insert`, with
/// email compared case-insensitively. Username and email are fixed at
/// insert. `update` is conditional: the incoming record's `revision` must
/// match the stored one or the write is rejected with `StaleRecord`.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Create a record, enforcing uniqueness constraints
    async fn insert(&self, new_account: NewAccount) -> Result<Account>;

    /// Fetch by id
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>>;

    /// Fetch by username (exact match)
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Revision-checked write of a previously loaded record
    async fn update(&self, account: Account) -> Result<Account>;

    /// Remove a record; `false` when the id does not exist
    async fn delete(&self, id: Uuid) -> Result<bool>;
}
