use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Account record - core identity entity
///
/// Wire field names are camelCase (`passwordHash`, `clientToken`, ...).
/// `revision` is a persistence bookkeeping counter and never leaves the
/// process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub client_token: Option<String>,
    pub recovery_token: Option<String>,
    pub recovery_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub revision: u64,
}

impl Account {
    /// Check if a recovery flow is pending on this record
    pub fn has_pending_recovery(&self) -> bool {
        self.recovery_token.is_some()
    }
}

/// Account registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(
        length(min = 3, max = 32),
        custom(function = "crate::validators::validate_username_shape_validator")
    )]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub password_confirm: String,
}

/// Account login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Password change via recovery token
///
/// `uuid` carries the recovery token exactly as issued.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryChangeRequest {
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub password_confirm: String,
    pub uuid: String,
}

/// Minimal identity returned by a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub username: String,
}
