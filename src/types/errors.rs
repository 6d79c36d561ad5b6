use std::fmt;

// === StorageError ===

/// Errors related to the durable key-value storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// Underlying database operation failed.
    DatabaseError(String),
    /// Persisted value could not be serialized or deserialized.
    SerializationError(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StorageError {}

// === StoreError ===

/// Errors related to link/category store operations.
#[derive(Debug)]
pub enum StoreError {
    /// A required field was empty or otherwise invalid.
    Validation(String),
    /// Persisting the collections failed.
    Storage(StorageError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            StoreError::Storage(err) => write!(f, "Store persistence error: {}", err),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        StoreError::Storage(err)
    }
}

// === AuthError ===

/// Errors related to the admin authentication flag.
#[derive(Debug)]
pub enum AuthError {
    /// Reading or writing the auth flag record failed.
    Storage(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::Storage(msg) => write!(f, "Auth storage error: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

// === ExtractError ===

/// Errors from the URL metadata extractor. Always non-fatal: the caller
/// leaves the form untouched and continues.
#[derive(Debug)]
pub enum ExtractError {
    /// The input string is not a parseable URL.
    InvalidUrl(String),
    /// The URL has no usable path segment to derive a slug from.
    NoSlug,
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ExtractError::NoSlug => write!(f, "URL has no product slug"),
        }
    }
}

impl std::error::Error for ExtractError {}
