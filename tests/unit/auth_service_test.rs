//! Unit tests for the admin authentication service.

use std::sync::Arc;

use linkhub::database::Database;
use linkhub::services::auth_service::{AuthService, AuthServiceTrait};
use linkhub::storage::{KeyValueStorage, MemoryStorage, SqliteStorage, AUTH_KEY};

fn setup() -> AuthService {
    AuthService::new(Box::new(MemoryStorage::new()), None)
}

#[test]
fn test_starts_unauthenticated() {
    let auth = setup();
    assert!(!auth.is_authenticated().unwrap());
}

#[test]
fn test_login_with_correct_password() {
    let mut auth = setup();
    assert!(auth.login("admin123").unwrap());
    assert!(auth.is_authenticated().unwrap());
}

#[test]
fn test_login_with_wrong_password_returns_false() {
    let mut auth = setup();
    // A wrong password is a normal outcome, not an error
    assert!(!auth.login("admin1234").unwrap());
    assert!(!auth.login("").unwrap());
    assert!(!auth.is_authenticated().unwrap());
}

#[test]
fn test_password_is_case_sensitive() {
    let mut auth = setup();
    assert!(!auth.login("ADMIN123").unwrap());
}

#[test]
fn test_logout_clears_the_flag() {
    let mut auth = setup();
    auth.login("admin123").unwrap();
    auth.logout().unwrap();
    assert!(!auth.is_authenticated().unwrap());
}

#[test]
fn test_logout_when_not_logged_in_is_ok() {
    let mut auth = setup();
    assert!(auth.logout().is_ok());
}

#[test]
fn test_password_override_replaces_default() {
    let mut auth = AuthService::new(
        Box::new(MemoryStorage::new()),
        Some("hunter2".to_string()),
    );
    assert!(!auth.login("admin123").unwrap());
    assert!(auth.login("hunter2").unwrap());
}

#[test]
fn test_flag_survives_a_new_service_over_the_same_db() {
    let db = Arc::new(Database::open_in_memory().unwrap());

    let mut auth = AuthService::new(Box::new(SqliteStorage::new(db.clone())), None);
    auth.login("admin123").unwrap();

    // A fresh service over the same database sees the persisted flag
    let auth2 = AuthService::new(Box::new(SqliteStorage::new(db.clone())), None);
    assert!(auth2.is_authenticated().unwrap());

    // Only the literal "true" counts as authenticated
    let mut raw = SqliteStorage::new(db);
    raw.set(AUTH_KEY, "TRUE").unwrap();
    assert!(!auth2.is_authenticated().unwrap());
}
