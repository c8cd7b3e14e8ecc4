/// Opaque token generation
use rand::{distributions::Alphanumeric, Rng};
use uuid::Uuid;

/// Client token length
const CLIENT_TOKEN_LENGTH: usize = 32;

/// Generate a secure random client token
pub fn client_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(CLIENT_TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

/// Generate a recovery token
///
/// Recovery tokens travel in the `uuid` field of the recovery change
/// request, so they keep the UUID string form.
pub fn recovery_token() -> String {
    Uuid::new_v4().to_string()
}
