//! In-memory account store
//!
//! Backs tests and embedded use. All state lives behind one `RwLock`;
//! uniqueness checks and writes happen under the same write guard, so an
//! insert can never race past the index checks.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AccountError, Result};
use crate::models::Account;
use crate::store::{AccountStore, NewAccount};

#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<Uuid, Account>,
    username_index: HashMap<String, Uuid>,
    email_index: HashMap<String, Uuid>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, new_account: NewAccount) -> Result<Account> {
        let mut inner = self.inner.write().await;
        let email = new_account.email.to_lowercase();

        if inner.username_index.contains_key(&new_account.username) {
            return Err(AccountError::UsernameAlreadyExists);
        }
        if inner.email_index.contains_key(&email) {
            return Err(AccountError::EmailAlreadyExists);
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            username: new_account.username,
            email,
            password_hash: new_account.password_hash,
            client_token: None,
            recovery_token: None,
            recovery_expires_at: None,
            created_at: now,
            updated_at: now,
            revision: 0,
        };

        inner
            .username_index
            .insert(account.username.clone(), account.id);
        inner.email_index.insert(account.email.clone(), account.id);
        inner.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner
            .username_index
            .get(username)
            .and_then(|id| inner.accounts.get(id))
            .cloned())
    }

    async fn update(&self, account: Account) -> Result<Account> {
        let mut inner = self.inner.write().await;
        let current = inner
            .accounts
            .get(&account.id)
            .ok_or(AccountError::AccountNotFound)?;

        if current.revision != account.revision {
            return Err(AccountError::StaleRecord);
        }
        if current.username != account.username || current.email != account.email {
            return Err(AccountError::Internal(
                "username and email are fixed at insert".to_string(),
            ));
        }

        let mut stored = account;
        stored.revision += 1;
        stored.updated_at = Utc::now();
        inner.accounts.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut inner = self.inner.write().await;
        match inner.accounts.remove(&id) {
            Some(account) => {
                inner.username_index.remove(&account.username);
                inner.email_index.remove(&account.email);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(username: &str, email: &str) -> NewAccount {
        NewAccount {
            username: username.to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_and_find() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(created.revision, 0);
        assert_eq!(created.created_at, created.updated_at);

        let by_id = store.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = store.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let store = MemoryAccountStore::new();
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(store.find_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_username() {
        let store = MemoryAccountStore::new();
        store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        let result = store.insert(new_account("alice", "other@example.com")).await;
        assert!(matches!(result, Err(AccountError::UsernameAlreadyExists)));
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email_case_insensitively() {
        let store = MemoryAccountStore::new();
        store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        let result = store.insert(new_account("bob", "Alice@Example.COM")).await;
        assert!(matches!(result, Err(AccountError::EmailAlreadyExists)));
    }

    #[tokio::test]
    async fn insert_normalizes_email() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("dora", "Dora@Example.COM"))
            .await
            .unwrap();
        assert_eq!(created.email, "dora@example.com");
    }

    #[tokio::test]
    async fn update_bumps_revision() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        let mut loaded = store.find_by_id(created.id).await.unwrap().unwrap();
        loaded.client_token = Some("token".to_string());
        let updated = store.update(loaded).await.unwrap();

        assert_eq!(updated.revision, 1);
        assert_eq!(updated.client_token.as_deref(), Some("token"));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_rejects_stale_revision() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        // Two writers load the same revision; the second write loses
        let first = store.find_by_id(created.id).await.unwrap().unwrap();
        let second = store.find_by_id(created.id).await.unwrap().unwrap();

        store.update(first).await.unwrap();
        let result = store.update(second).await;
        assert!(matches!(result, Err(AccountError::StaleRecord)));
    }

    #[tokio::test]
    async fn update_rejects_missing_account() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();
        store.delete(created.id).await.unwrap();

        let result = store.update(created).await;
        assert!(matches!(result, Err(AccountError::AccountNotFound)));
    }

    #[tokio::test]
    async fn update_rejects_identity_changes() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        let mut renamed = created.clone();
        renamed.username = "malice".to_string();
        let result = store.update(renamed).await;
        assert!(matches!(result, Err(AccountError::Internal(_))));
    }

    #[tokio::test]
    async fn delete_is_final_and_frees_the_username() {
        let store = MemoryAccountStore::new();
        let created = store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();

        assert!(store.delete(created.id).await.unwrap());
        assert!(!store.delete(created.id).await.unwrap());
        assert!(store.find_by_username("alice").await.unwrap().is_none());

        // Username and email can be registered again
        store
            .insert(new_account("alice", "alice@example.com"))
            .await
            .unwrap();
    }
}
