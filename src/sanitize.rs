use crate::models::Account;

/// Replacement marker written over redacted fields
pub const REDACTED: &str = "[REDACTED]";

/// Project an account record to its safe external view
///
/// `password_hash` and `client_token` are replaced with the literal
/// [`REDACTED`] marker. The fields stay present in the serialized form;
/// masking is by replacement, not omission. Replacement is unconditional;
/// a client token that was never issued is masked the same as a real one.
/// All other fields pass through unchanged.
pub fn sanitize(mut account: Account) -> Account {
    account.password_hash = REDACTED.to_string();
    account.client_token = Some(REDACTED.to_string());
    account
}
