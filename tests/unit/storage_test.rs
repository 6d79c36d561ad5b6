//! Unit tests for the storage layer: the key-value contract over SQLite
//! and the collection repository on top of it.

use std::sync::Arc;

use linkhub::database::Database;
use linkhub::storage::{
    KeyValueStorage, LinkRepository, MemoryStorage, SqliteStorage, AUTH_KEY, CATEGORIES_KEY,
    LINKS_KEY,
};
use linkhub::types::link::{AffiliateLink, Category};

/// Helper: SqliteStorage over a fresh in-memory database.
fn sqlite_storage() -> SqliteStorage {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    SqliteStorage::new(db)
}

fn sample_link(id: &str, category: &str, order: i64) -> AffiliateLink {
    AffiliateLink {
        id: id.to_string(),
        title: format!("Link {}", id),
        url: format!("https://example.com/{}", id),
        category: category.to_string(),
        image_url: None,
        description: Some("A sample product".to_string()),
        created_at: 1700000000,
        updated_at: 1700000000,
        order,
    }
}

// ─── KeyValueStorage contract (SQLite) ───

#[test]
fn test_get_missing_key_returns_none() {
    let storage = sqlite_storage();
    assert_eq!(storage.get("nope").unwrap(), None);
}

#[test]
fn test_set_then_get() {
    let mut storage = sqlite_storage();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
}

#[test]
fn test_set_overwrites_existing_value() {
    let mut storage = sqlite_storage();
    storage.set("k", "first").unwrap();
    storage.set("k", "second").unwrap();
    assert_eq!(storage.get("k").unwrap(), Some("second".to_string()));
}

#[test]
fn test_remove_deletes_key() {
    let mut storage = sqlite_storage();
    storage.set("k", "v").unwrap();
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

#[test]
fn test_remove_absent_key_is_not_an_error() {
    let mut storage = sqlite_storage();
    assert!(storage.remove("never-set").is_ok());
}

#[test]
fn test_keys_are_independent() {
    let mut storage = sqlite_storage();
    storage.set(LINKS_KEY, "[1]").unwrap();
    storage.set(CATEGORIES_KEY, "[2]").unwrap();
    storage.set(AUTH_KEY, "true").unwrap();

    storage.remove(AUTH_KEY).unwrap();

    assert_eq!(storage.get(LINKS_KEY).unwrap(), Some("[1]".to_string()));
    assert_eq!(storage.get(CATEGORIES_KEY).unwrap(), Some("[2]".to_string()));
    assert_eq!(storage.get(AUTH_KEY).unwrap(), None);
}

#[test]
fn test_persists_across_storage_handles_on_same_db() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut first = SqliteStorage::new(db.clone());
    first.set("shared", "value").unwrap();

    let second = SqliteStorage::new(db);
    assert_eq!(second.get("shared").unwrap(), Some("value".to_string()));
}

// ─── Repository ───

#[test]
fn test_load_links_absent_key_is_none() {
    let repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    assert!(repo.load_links().unwrap().is_none());
    assert!(repo.load_categories().unwrap().is_none());
}

#[test]
fn test_save_then_load_links() {
    let mut repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    let links = vec![sample_link("a", "Mobiles", 1), sample_link("b", "Fashion", 1)];
    repo.save_links(&links).unwrap();

    let loaded = repo.load_links().unwrap().unwrap();
    assert_eq!(loaded, links);
}

#[test]
fn test_save_then_load_categories() {
    let mut repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    let categories = vec![Category {
        id: "1".to_string(),
        name: "Mobiles".to_string(),
        created_at: 1700000000,
    }];
    repo.save_categories(&categories).unwrap();

    let loaded = repo.load_categories().unwrap().unwrap();
    assert_eq!(loaded, categories);
}

#[test]
fn test_save_empty_collection_is_not_absent() {
    // An explicitly saved empty list must load as Some(vec![]), not None —
    // otherwise a user who deleted everything would get reseeded.
    let mut repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    repo.save_links(&[]).unwrap();
    assert_eq!(repo.load_links().unwrap(), Some(vec![]));
}

#[test]
fn test_corrupt_value_is_a_serialization_error() {
    let mut storage = MemoryStorage::new();
    storage.set(LINKS_KEY, "not json").unwrap();
    let repo = LinkRepository::new(Box::new(storage));

    let err = repo.load_links().unwrap_err();
    assert!(err.to_string().contains("serialization"));
}

// ─── Wire format ───

#[test]
fn test_link_serializes_with_camel_case_fields() {
    let link = sample_link("a", "Mobiles", 1);
    let json = serde_json::to_value(&link).unwrap();

    assert_eq!(json["createdAt"], 1700000000);
    assert_eq!(json["updatedAt"], 1700000000);
    assert!(json.get("created_at").is_none());
    // Absent optional fields are omitted entirely
    assert!(json.get("imageUrl").is_none());
}
