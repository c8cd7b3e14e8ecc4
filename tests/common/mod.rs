//! Shared fixtures for the end-to-end suites
//!
//! Each test builds its own in-memory collaborators, so suites never share
//! state and cleanup happens by dropping the fixtures on every exit path.

use std::sync::Arc;

use account_service::config::Settings;
use account_service::{AccountService, MemoryAccountStore, MemoryTaskDirectory, RegisterRequest};

/// Strong password accepted by the registration policy
pub const PASSWORD: &str = "CorrectHorse9!";

/// Fresh service over isolated in-memory collaborators
pub fn setup_service() -> (AccountService, Arc<MemoryTaskDirectory>) {
    setup_service_with(Settings::default())
}

/// Fresh service with explicit settings (for tests that tune the recovery TTL)
pub fn setup_service_with(settings: Settings) -> (AccountService, Arc<MemoryTaskDirectory>) {
    init_tracing();
    let store = Arc::new(MemoryAccountStore::new());
    let tasks = Arc::new(MemoryTaskDirectory::new());
    let service = AccountService::new(store, tasks.clone(), settings);
    (service, tasks)
}

pub fn registration(username: &str, email: &str) -> RegisterRequest {
    RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        password_confirm: PASSWORD.to_string(),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
