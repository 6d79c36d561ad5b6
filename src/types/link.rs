use serde::{Deserialize, Serialize};

/// A single affiliate product reference with presentation metadata.
///
/// Field names serialize in camelCase to stay compatible with the
/// persisted record layout (`linkhub_links`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffiliateLink {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Name of the category this link belongs to.
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// UNIX timestamp (seconds).
    pub created_at: i64,
    /// UNIX timestamp (seconds).
    pub updated_at: i64,
    /// Display position within the category. Assigned at creation,
    /// never renumbered — gaps after deletion are permitted.
    pub order: i64,
}

/// A named grouping for links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

/// Caller-supplied fields for a new link. Identity, timestamps and order
/// are assigned by the store.
#[derive(Debug, Clone, Default)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub category: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Partial update for an existing link. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<Option<String>>,
    pub description: Option<Option<String>>,
}
