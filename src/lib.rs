/// Account Service Library
///
/// User account lifecycle for the task platform backend: registration,
/// login, sanitized profile reads, deletion, one-shot password recovery,
/// client token issuance, and followed-task lookups.
///
/// Every operation returns `Result<T, AccountError>`; expected failures
/// (not found, duplicates, bad credentials, bad tokens, validation) are
/// typed error values, never panics. `AccountError::body()` is the
/// serializable failure payload for the HTTP edge.
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `error`: Error types
/// - `models`: Data models
/// - `recovery`: Recovery token record commands
/// - `sanitize`: Secret field redaction
/// - `security`: Password hashing, opaque token generation
/// - `service`: Business logic
/// - `store`: Account persistence boundary (+ in-memory store)
/// - `tasks`: Task relation gateway (+ in-process directory)
/// - `validators`: Input validation
pub mod config;
pub mod error;
pub mod models;
pub mod recovery;
pub mod sanitize;
pub mod security;
pub mod service;
pub mod store;
pub mod tasks;
pub mod validators;

// Re-export commonly used types
pub use error::{AccountError, Result};
pub use models::{Account, AuthenticatedUser, LoginRequest, RecoveryChangeRequest, RegisterRequest};
pub use models::{TaskDraft, TaskSummary};
pub use sanitize::{sanitize, REDACTED};
pub use service::AccountService;
pub use store::{AccountStore, MemoryAccountStore, NewAccount};
pub use tasks::{MemoryTaskDirectory, TaskRelationGateway};
