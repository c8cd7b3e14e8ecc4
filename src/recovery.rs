/// Recovery token record commands
///
/// Pure transforms over an [`Account`] record. The service layer loads a
/// record, applies a command, and persists the result through the store;
/// persistence conflicts surface there, not here.
use chrono::{DateTime, Duration, Utc};

use crate::models::Account;
use crate::security::token;

/// Attach a fresh recovery token to the record
///
/// Any previously issued token is overwritten, which invalidates it.
pub fn issue(mut account: Account, ttl_secs: i64) -> Account {
    account.recovery_token = Some(token::recovery_token());
    account.recovery_expires_at = Some(Utc::now() + Duration::seconds(ttl_secs));
    account
}

/// Check a presented token against the record
///
/// Exact string match only. An empty presented token never matches,
/// including against a record with no pending recovery.
pub fn token_matches(account: &Account, uuid: &str) -> bool {
    if uuid.is_empty() {
        return false;
    }
    match &account.recovery_token {
        Some(stored) => stored == uuid,
        None => false,
    }
}

/// Check whether the pending token has expired
pub fn token_expired(account: &Account, now: DateTime<Utc>) -> bool {
    match account.recovery_expires_at {
        Some(expires_at) => expires_at <= now,
        None => false,
    }
}

/// Consume the pending token: swap in the new password hash and clear
/// the token so it can never be redeemed again
pub fn redeem(mut account: Account, new_password_hash: String) -> Account {
    account.password_hash = new_password_hash;
    account.recovery_token = None;
    account.recovery_expires_at = None;
    account
}
