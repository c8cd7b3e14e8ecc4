/// User account service
///
/// Orchestrates registration, login, sanitized reads, deletion, password
/// recovery, client token issuance, and followed-task lookups. Expected
/// failures come back as typed `AccountError` values; callers branch on
/// the `Result`, nothing here panics on bad input.
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::config::Settings;
use crate::error::{AccountError, Result};
use crate::models::{
    Account, AuthenticatedUser, LoginRequest, RecoveryChangeRequest, RegisterRequest, TaskSummary,
};
use crate::recovery;
use crate::sanitize::sanitize;
use crate::security::token;
use crate::security::{hash_password, verify_password};
use crate::store::{AccountStore, NewAccount};
use crate::tasks::TaskRelationGateway;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    tasks: Arc<dyn TaskRelationGateway>,
    settings: Settings,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        tasks: Arc<dyn TaskRelationGateway>,
        settings: Settings,
    ) -> Self {
        Self {
            store,
            tasks,
            settings,
        }
    }

    /// Register a new account
    ///
    /// Returns the created record, unsanitized; callers that expose it
    /// externally pass it through [`sanitize`] first. Nothing is persisted
    /// when any validation or uniqueness check fails.
    pub async fn register(&self, request: RegisterRequest) -> Result<Account> {
        if !crate::validators::validate_username(&request.username) {
            return Err(AccountError::InvalidUsername(
                "Username must be 3-32 characters, alphanumeric with - and _".to_string(),
            ));
        }

        request.validate()?;

        if request.password != request.password_confirm {
            return Err(AccountError::PasswordMismatch);
        }

        // Hash password (strength policy enforced inside)
        let password_hash = hash_password(&request.password)?;

        // Create account; the store enforces username/email uniqueness
        let account = self
            .store
            .insert(NewAccount {
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(
            user_id = %account.id,
            username = %account.username,
            email = %Self::mask_email(&account.email),
            "Account registered"
        );

        Ok(account)
    }

    /// Authenticate by username and password
    ///
    /// Unknown usernames and wrong passwords return the same
    /// `InvalidCredentials` value; the distinction exists only in debug
    /// logs.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthenticatedUser> {
        let account = match self.store.find_by_username(&request.username).await? {
            Some(account) => account,
            None => {
                debug!(username = %request.username, "Login failed: unknown username");
                return Err(AccountError::InvalidCredentials);
            }
        };

        if !verify_password(&request.password, &account.password_hash)? {
            debug!(user_id = %account.id, "Login failed: password mismatch");
            return Err(AccountError::InvalidCredentials);
        }

        info!(user_id = %account.id, username = %account.username, "Login succeeded");

        Ok(AuthenticatedUser {
            id: account.id,
            username: account.username,
        })
    }

    /// Fetch the raw account record
    pub async fn get(&self, id: Uuid) -> Result<Account> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(AccountError::AccountNotFound)
    }

    /// Fetch the account with secret fields masked for external exposure
    pub async fn get_sanitized(&self, id: Uuid) -> Result<Account> {
        Ok(sanitize(self.get(id).await?))
    }

    /// Delete the account
    ///
    /// Only the first delete of an id succeeds; repeats and ids that never
    /// existed fail with `AccountNotFound` and have no effect.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(AccountError::AccountNotFound);
        }

        info!(user_id = %id, "Account deleted");

        Ok(())
    }

    /// Attach a fresh recovery token to the account and persist it
    ///
    /// Returns the updated record; the raw token rides on it for the
    /// caller to deliver out of band. Re-issuing replaces any pending
    /// token, which invalidates it.
    pub async fn generate_recovery(&self, id: Uuid) -> Result<Account> {
        let account = self.get(id).await?;
        let issued = recovery::issue(account, self.settings.recovery.token_ttl_secs);
        let saved = self.store.update(issued).await?;

        info!(user_id = %saved.id, "Recovery token issued");

        Ok(saved)
    }

    /// Change the password by redeeming a recovery token
    ///
    /// The presented `uuid` must equal the pending token exactly; empty,
    /// stale, expired, and already-consumed tokens all fail the same way.
    /// On success the password is re-hashed and the token cleared in one
    /// conditional write, so a token redeems at most once even under
    /// concurrent attempts. Any failure leaves the record untouched.
    pub async fn try_password_recovery_change(
        &self,
        request: RecoveryChangeRequest,
    ) -> Result<()> {
        request.validate()?;

        if request.password != request.password_confirm {
            return Err(AccountError::PasswordMismatch);
        }

        let account = self
            .store
            .find_by_username(&request.username)
            .await?
            .ok_or(AccountError::AccountNotFound)?;

        if !recovery::token_matches(&account, &request.uuid)
            || recovery::token_expired(&account, Utc::now())
        {
            warn!(
                user_id = %account.id,
                "Recovery change rejected: token missing, mismatched, or expired"
            );
            return Err(AccountError::InvalidRecoveryToken);
        }

        let password_hash = hash_password(&request.password)?;
        let redeemed = recovery::redeem(account, password_hash);

        // Losing the revision check means a concurrent redemption already
        // consumed the token.
        match self.store.update(redeemed).await {
            Ok(saved) => {
                info!(user_id = %saved.id, "Password changed via recovery token");
                Ok(())
            }
            Err(AccountError::StaleRecord) => Err(AccountError::InvalidRecoveryToken),
            Err(err) => Err(err),
        }
    }

    /// Generate and persist a fresh opaque client token for the account
    pub async fn save_client_token_for_user_id(&self, id: Uuid) -> Result<()> {
        let mut account = self.get(id).await?;
        account.client_token = Some(token::client_token());
        self.store.update(account).await?;

        info!(user_id = %id, "Client token saved");

        Ok(())
    }

    /// Tasks the account follows, via the task relation gateway
    ///
    /// The account must exist; the gateway is not consulted otherwise.
    pub async fn get_followed_tasks(&self, id: Uuid) -> Result<Vec<TaskSummary>> {
        let account = self.get(id).await?;
        self.tasks.tasks_followed_by(account.id).await
    }

    // ========== Helper Methods ==========

    /// Mask email for logging
    fn mask_email(email: &str) -> String {
        if let Some(at_pos) = email.find('@') {
            let local = &email[..at_pos];
            let domain = &email[at_pos..];
            if local.len() <= 2 {
                format!("**{}", domain)
            } else {
                format!("{}***{}", &local[..1], domain)
            }
        } else {
            "***@***".to_string()
        }
    }
}
