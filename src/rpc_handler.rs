//! RPC method handler for the LinkHub JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The `handle_method` function dispatches JSON-RPC method calls to the
//! link store and services via the `App` struct.
//!
//! Validation (empty required fields, unknown category, duplicate
//! category name) happens here, before any store mutation runs; the
//! store itself stays permissive.

use std::sync::Mutex;

use crate::app::App;
use crate::managers::link_store::LinkStoreTrait;
use crate::services::auth_service::AuthServiceTrait;
use crate::services::url_metadata;
use crate::types::link::{LinkDraft, LinkPatch};

use serde_json::{json, Value};

/// Reads an optional string-or-null parameter for partial updates:
/// absent key → `None` (leave untouched), `null` → `Some(None)` (clear),
/// string → `Some(Some(value))`.
fn patch_field(params: &Value, key: &str) -> Option<Option<String>> {
    match params.get(key) {
        None => None,
        Some(Value::Null) => Some(None),
        Some(v) => Some(v.as_str().map(|s| s.to_string())),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        // ─── Links ───
        "link.add" => {
            let title = params.get("title").and_then(|v| v.as_str()).ok_or("missing title")?;
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let category = params.get("category").and_then(|v| v.as_str()).ok_or("missing category")?;
            if title.trim().is_empty() {
                return Err("title must not be empty".to_string());
            }
            if url.trim().is_empty() {
                return Err("url must not be empty".to_string());
            }
            let image_url = params.get("imageUrl").and_then(|v| v.as_str()).map(String::from);
            let description = params.get("description").and_then(|v| v.as_str()).map(String::from);

            let mut a = app.lock().map_err(|e| e.to_string())?;
            if !a.store.categories().iter().any(|c| c.name == category) {
                return Err(format!("unknown category: {}", category));
            }
            let id = a
                .store
                .add_link(LinkDraft {
                    title: title.to_string(),
                    url: url.to_string(),
                    category: category.to_string(),
                    image_url,
                    description,
                })
                .map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "title": title, "category": category}))
        }
        "link.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let links = match params.get("category").and_then(|v| v.as_str()) {
                Some(name) => a.store.links_in_category(name),
                None => a.store.links().to_vec(),
            };
            serde_json::to_value(links).map_err(|e| e.to_string())
        }
        "link.search" => {
            let query = params.get("query").and_then(|v| v.as_str()).ok_or("missing query")?;
            let category = params.get("category").and_then(|v| v.as_str());
            let a = app.lock().map_err(|e| e.to_string())?;
            let links = a.store.filter_links(query, category);
            serde_json::to_value(links).map_err(|e| e.to_string())
        }
        "link.update" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            if let Some(Value::String(title)) = params.get("title") {
                if title.trim().is_empty() {
                    return Err("title must not be empty".to_string());
                }
            }
            let patch = LinkPatch {
                title: params.get("title").and_then(|v| v.as_str()).map(String::from),
                url: params.get("url").and_then(|v| v.as_str()).map(String::from),
                category: params.get("category").and_then(|v| v.as_str()).map(String::from),
                image_url: patch_field(params, "imageUrl"),
                description: patch_field(params, "description"),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            if let Some(category) = &patch.category {
                if !a.store.categories().iter().any(|c| &c.name == category) {
                    return Err(format!("unknown category: {}", category));
                }
            }
            // Unknown id is a silent no-op by contract
            a.store.update_link(id, patch).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "link.delete" => {
            let id = params.get("id").and_then(|v| v.as_str()).ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.store.delete_link(id).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "link.reorder" => {
            let category = params.get("category").and_then(|v| v.as_str()).ok_or("missing category")?;
            let ids: Vec<&str> = params
                .get("ids")
                .and_then(|v| v.as_array())
                .ok_or("missing ids")?
                .iter()
                .filter_map(|v| v.as_str())
                .collect();

            let mut a = app.lock().map_err(|e| e.to_string())?;
            let current = a.store.links_in_category(category);
            if ids.len() != current.len() {
                return Err(format!(
                    "ids must be a permutation of the category's links ({} expected, {} given)",
                    current.len(),
                    ids.len()
                ));
            }
            let mut reordered = Vec::with_capacity(ids.len());
            for (pos, id) in ids.iter().enumerate() {
                let mut link = current
                    .iter()
                    .find(|l| l.id == *id)
                    .cloned()
                    .ok_or_else(|| format!("link not in category: {}", id))?;
                link.order = pos as i64 + 1;
                reordered.push(link);
            }
            a.store
                .reorder_links(category, reordered)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }

        // ─── Categories ───
        "category.add" => {
            let name = params.get("name").and_then(|v| v.as_str()).ok_or("missing name")?;
            let name = name.trim();
            if name.is_empty() {
                return Err("name must not be empty".to_string());
            }
            let mut a = app.lock().map_err(|e| e.to_string())?;
            // Case-insensitive duplicate pre-check; the store itself does
            // not reject duplicates.
            if a.store.category_exists(name) {
                return Err(format!("category already exists: {}", name));
            }
            let id = a.store.add_category(name).map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "name": name}))
        }
        "category.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let counts = a.store.link_counts();
            let arr: Vec<Value> = a
                .store
                .categories()
                .iter()
                .map(|c| {
                    json!({
                        "id": c.id,
                        "name": c.name,
                        "createdAt": c.created_at,
                        "linkCount": counts.get(&c.name).copied().unwrap_or(0),
                    })
                })
                .collect();
            Ok(json!(arr))
        }
        "category.delete" => {
            let name = params.get("name").and_then(|v| v.as_str()).ok_or("missing name")?;
            let confirmed = params.get("confirm").and_then(|v| v.as_bool()).unwrap_or(false);
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let cascade = a.store.links_in_category(name).len();
            if !confirmed {
                return Err(format!(
                    "confirmation required: deleting \"{}\" removes {} link(s)",
                    name, cascade
                ));
            }
            a.store.delete_category(name).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "deletedLinks": cascade}))
        }

        // ─── Auth ───
        "auth.login" => {
            let password = params.get("password").and_then(|v| v.as_str()).ok_or("missing password")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let ok = a.auth.login(password).map_err(|e| e.to_string())?;
            Ok(json!({"ok": ok}))
        }
        "auth.logout" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.auth.logout().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "auth.status" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let authenticated = a.auth.is_authenticated().map_err(|e| e.to_string())?;
            Ok(json!({"authenticated": authenticated}))
        }

        // ─── URL metadata (advisory; the caller ignores errors) ───
        "metadata.extract" => {
            let url = params.get("url").and_then(|v| v.as_str()).ok_or("missing url")?;
            let meta = url_metadata::extract(url).map_err(|e| e.to_string())?;
            Ok(json!({"slug": meta.slug, "description": meta.description}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(format!("unknown method: {}", method)),
    }
}
