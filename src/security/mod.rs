/// Security primitives for the account service
///
/// - Password hashing and verification (Argon2id)
/// - Opaque token generation (client tokens, recovery tokens)
pub mod password;
pub mod token;

pub use password::{hash_password, verify_password};
