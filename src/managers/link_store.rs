//! Link/Category store for LinkHub.
//!
//! Implements `LinkStoreTrait` — CRUD operations for affiliate links and
//! categories plus derived read views, backed by an injected
//! [`LinkRepository`]. Every mutation synchronously persists the full
//! collections, so in-memory state and storage always match.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::storage::LinkRepository;
use crate::types::errors::StoreError;
use crate::types::link::{AffiliateLink, Category, LinkDraft, LinkPatch};

/// Trait defining link/category store operations.
pub trait LinkStoreTrait {
    /// Adds a new link. Returns the generated link ID.
    fn add_link(&mut self, draft: LinkDraft) -> Result<String, StoreError>;
    /// Applies a partial update. Silent no-op when `id` is unknown.
    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<(), StoreError>;
    /// Removes a link. Silent no-op when `id` is unknown.
    fn delete_link(&mut self, id: &str) -> Result<(), StoreError>;
    /// Adds a category. Duplicate detection is the caller's pre-check
    /// (`category_exists`); the store appends unconditionally.
    fn add_category(&mut self, name: &str) -> Result<String, StoreError>;
    /// Case-insensitive membership check on category names.
    fn category_exists(&self, name: &str) -> bool;
    /// Deletes every link in the category (exact name match), then the
    /// category itself. Destructive and irreversible — the calling UI
    /// must confirm with the user first, reporting the link count.
    fn delete_category(&mut self, name: &str) -> Result<(), StoreError>;
    /// Replaces the category's links with the supplied ordered list,
    /// leaving all other links untouched.
    fn reorder_links(
        &mut self,
        category: &str,
        ordered: Vec<AffiliateLink>,
    ) -> Result<(), StoreError>;

    fn links(&self) -> &[AffiliateLink];
    fn categories(&self) -> &[Category];
    /// Links in one category (exact name match), sorted by `order`.
    fn links_in_category(&self, name: &str) -> Vec<AffiliateLink>;
    /// Link count per category name.
    fn link_counts(&self) -> HashMap<String, usize>;
    /// Free-text filter: case-insensitive substring match against title
    /// and description, optionally restricted to one category.
    fn filter_links(&self, query: &str, category: Option<&str>) -> Vec<AffiliateLink>;
}

/// Link store with an injected repository. Loaded once at startup; seeds
/// the fixed default dataset when storage is empty.
pub struct LinkStore {
    repo: LinkRepository,
    links: Vec<AffiliateLink>,
    categories: Vec<Category>,
}

impl LinkStore {
    /// Loads the store from the repository. Absent collections are
    /// initialized from the seed dataset and written back immediately.
    pub fn load(repo: LinkRepository) -> Result<Self, StoreError> {
        let mut store = Self {
            repo,
            links: Vec::new(),
            categories: Vec::new(),
        };

        match store.repo.load_categories()? {
            Some(categories) => store.categories = categories,
            None => {
                store.categories = seed_categories();
                store.repo.save_categories(&store.categories)?;
            }
        }

        match store.repo.load_links()? {
            Some(links) => store.links = links,
            None => {
                store.links = seed_links();
                store.repo.save_links(&store.links)?;
            }
        }

        Ok(store)
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }
}

impl LinkStoreTrait for LinkStore {
    fn add_link(&mut self, draft: LinkDraft) -> Result<String, StoreError> {
        let now = Self::now();
        // Order is count+1 at creation time; gaps after deletion stay.
        let order = self
            .links
            .iter()
            .filter(|l| l.category == draft.category)
            .count() as i64
            + 1;

        let id = Uuid::new_v4().to_string();
        self.links.push(AffiliateLink {
            id: id.clone(),
            title: draft.title,
            url: draft.url,
            category: draft.category,
            image_url: draft.image_url,
            description: draft.description,
            created_at: now,
            updated_at: now,
            order,
        });

        self.repo.save_links(&self.links)?;
        Ok(id)
    }

    fn update_link(&mut self, id: &str, patch: LinkPatch) -> Result<(), StoreError> {
        if let Some(link) = self.links.iter_mut().find(|l| l.id == id) {
            if let Some(title) = patch.title {
                link.title = title;
            }
            if let Some(url) = patch.url {
                link.url = url;
            }
            if let Some(category) = patch.category {
                link.category = category;
            }
            if let Some(image_url) = patch.image_url {
                link.image_url = image_url;
            }
            if let Some(description) = patch.description {
                link.description = description;
            }
            link.updated_at = Self::now();
            self.repo.save_links(&self.links)?;
        }
        Ok(())
    }

    fn delete_link(&mut self, id: &str) -> Result<(), StoreError> {
        let before = self.links.len();
        self.links.retain(|l| l.id != id);
        if self.links.len() != before {
            self.repo.save_links(&self.links)?;
        }
        Ok(())
    }

    fn add_category(&mut self, name: &str) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.categories.push(Category {
            id: id.clone(),
            name: name.to_string(),
            created_at: Self::now(),
        });
        self.repo.save_categories(&self.categories)?;
        Ok(id)
    }

    fn category_exists(&self, name: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
    }

    fn delete_category(&mut self, name: &str) -> Result<(), StoreError> {
        // Cascade: links referencing the category go first.
        self.links.retain(|l| l.category != name);
        self.repo.save_links(&self.links)?;

        self.categories.retain(|c| c.name != name);
        self.repo.save_categories(&self.categories)?;
        Ok(())
    }

    fn reorder_links(
        &mut self,
        category: &str,
        ordered: Vec<AffiliateLink>,
    ) -> Result<(), StoreError> {
        let mut updated: Vec<AffiliateLink> = self
            .links
            .iter()
            .filter(|l| l.category != category)
            .cloned()
            .collect();
        updated.extend(ordered);
        self.links = updated;
        self.repo.save_links(&self.links)?;
        Ok(())
    }

    fn links(&self) -> &[AffiliateLink] {
        &self.links
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn links_in_category(&self, name: &str) -> Vec<AffiliateLink> {
        let mut links: Vec<AffiliateLink> = self
            .links
            .iter()
            .filter(|l| l.category == name)
            .cloned()
            .collect();
        links.sort_by_key(|l| l.order);
        links
    }

    fn link_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for link in &self.links {
            *counts.entry(link.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn filter_links(&self, query: &str, category: Option<&str>) -> Vec<AffiliateLink> {
        let needle = query.to_lowercase();
        self.links
            .iter()
            .filter(|l| category.map_or(true, |c| l.category == c))
            .filter(|l| {
                needle.is_empty()
                    || l.title.to_lowercase().contains(&needle)
                    || l.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }
}

/// Default categories written on first startup.
fn seed_categories() -> Vec<Category> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    ["Mobiles", "Fashion", "Electronics"]
        .iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: (i + 1).to_string(),
            name: name.to_string(),
            created_at: now,
        })
        .collect()
}

/// Default links written on first startup.
fn seed_links() -> Vec<AffiliateLink> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;
    vec![
        AffiliateLink {
            id: "1".to_string(),
            title: "iPhone 15 Pro".to_string(),
            url: "https://example.com/iphone15".to_string(),
            category: "Mobiles".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=300&h=200&fit=crop"
                    .to_string(),
            ),
            description: Some("Latest iPhone with amazing features".to_string()),
            created_at: now,
            updated_at: now,
            order: 1,
        },
        AffiliateLink {
            id: "2".to_string(),
            title: "Nike Air Max".to_string(),
            url: "https://example.com/nike-air-max".to_string(),
            category: "Fashion".to_string(),
            image_url: Some(
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=300&h=200&fit=crop"
                    .to_string(),
            ),
            description: Some("Comfortable and stylish sneakers".to_string()),
            created_at: now,
            updated_at: now,
            order: 1,
        },
    ]
}
