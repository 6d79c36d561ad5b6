//! Durable key-value storage for LinkHub.
//!
//! The store persists everything through the [`KeyValueStorage`] trait:
//! three fixed keys hold the serialized link collection, the serialized
//! category collection, and the admin auth flag. Production code uses
//! [`SqliteStorage`] (a `kv_store` table); tests substitute
//! [`MemoryStorage`].

pub mod memory;
pub mod repository;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use repository::LinkRepository;
pub use sqlite::SqliteStorage;

use crate::types::errors::StorageError;

/// Storage key for the serialized link collection.
pub const LINKS_KEY: &str = "linkhub_links";
/// Storage key for the serialized category collection.
pub const CATEGORIES_KEY: &str = "linkhub_categories";
/// Storage key for the admin authentication flag.
pub const AUTH_KEY: &str = "linkhub_authenticated";

/// Trait defining the durable key-value storage contract.
///
/// Writes are synchronous and assumed to succeed; a mutation either fully
/// completes or did not run. There is no transaction concept on top.
pub trait KeyValueStorage {
    /// Returns the value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}
