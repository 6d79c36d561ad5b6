use linkhub::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_display_variants() {
    assert_eq!(
        StorageError::DatabaseError("disk full".to_string()).to_string(),
        "Storage database error: disk full"
    );
    assert_eq!(
        StorageError::SerializationError("invalid json".to_string()).to_string(),
        "Storage serialization error: invalid json"
    );
}

#[test]
fn storage_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(StorageError::DatabaseError("locked".to_string()));
    assert!(err.source().is_none());
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Validation("title is empty".to_string()).to_string(),
        "Validation failed: title is empty"
    );
    assert_eq!(
        StoreError::Storage(StorageError::DatabaseError("corrupt".to_string())).to_string(),
        "Store persistence error: Storage database error: corrupt"
    );
}

#[test]
fn store_error_from_storage_error() {
    let err: StoreError = StorageError::SerializationError("bad value".to_string()).into();
    assert!(matches!(err, StoreError::Storage(_)));
}

// === AuthError Tests ===

#[test]
fn auth_error_display() {
    assert_eq!(
        AuthError::Storage("write failed".to_string()).to_string(),
        "Auth storage error: write failed"
    );
}

// === ExtractError Tests ===

#[test]
fn extract_error_display_variants() {
    assert_eq!(
        ExtractError::InvalidUrl("relative URL without a base".to_string()).to_string(),
        "Invalid URL: relative URL without a base"
    );
    assert_eq!(ExtractError::NoSlug.to_string(), "URL has no product slug");
}

// === Cross-cutting: all errors implement std::error::Error ===

#[test]
fn all_errors_implement_std_error() {
    // Verify each error type can be used as a trait object
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(StorageError::DatabaseError("msg".to_string())),
        Box::new(StoreError::Validation("msg".to_string())),
        Box::new(AuthError::Storage("msg".to_string())),
        Box::new(ExtractError::NoSlug),
    ];

    assert_eq!(errors.len(), 4);

    // Each error should have a non-empty display string
    for err in &errors {
        assert!(!err.to_string().is_empty());
    }
}

// === Debug trait verification ===

#[test]
fn all_errors_implement_debug() {
    let debug_str = format!("{:?}", StorageError::DatabaseError("test".to_string()));
    assert!(debug_str.contains("DatabaseError"));

    let debug_str = format!("{:?}", StoreError::Validation("test".to_string()));
    assert!(debug_str.contains("Validation"));

    let debug_str = format!("{:?}", ExtractError::NoSlug);
    assert!(debug_str.contains("NoSlug"));
}
