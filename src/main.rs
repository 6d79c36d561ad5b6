//! LinkHub — an affiliate link directory with a GitHub-style UI.
//!
//! Entry point: opens the webview application window.
//! When built without the `gui` feature, runs an interactive console demo.

#[cfg(feature = "gui")]
fn main() {
    linkhub::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               LinkHub v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║      Affiliate link directory with GitHub-style UI         ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_storage();
    demo_link_store();
    demo_views();
    demo_url_metadata();
    demo_auth();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 7 components demonstrated successfully!");
    println!("  LinkHub is ready for webview UI integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_database() {
    use linkhub::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_storage() {
    use std::sync::Arc;
    use linkhub::database::connection::Database;
    use linkhub::storage::{KeyValueStorage, SqliteStorage};
    section("Key-Value Storage");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = SqliteStorage::new(db);

    println!("  Missing key: {:?}", storage.get("demo_key").unwrap());
    storage.set("demo_key", "hello").unwrap();
    println!("  After set: {:?}", storage.get("demo_key").unwrap());
    storage.set("demo_key", "world").unwrap();
    println!("  After overwrite: {:?}", storage.get("demo_key").unwrap());
    storage.remove("demo_key").unwrap();
    println!("  After remove: {:?}", storage.get("demo_key").unwrap());
    println!("  ✓ SqliteStorage OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_link_store() {
    use linkhub::managers::link_store::{LinkStore, LinkStoreTrait};
    use linkhub::storage::{LinkRepository, MemoryStorage};
    use linkhub::types::link::{LinkDraft, LinkPatch};
    section("Link Store");

    let repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    let mut store = LinkStore::load(repo).unwrap();
    println!(
        "  Seeded: {} categories, {} links",
        store.categories().len(),
        store.links().len()
    );

    let id = store
        .add_link(LinkDraft {
            title: "Galaxy S24".to_string(),
            url: "https://example.com/galaxy-s24/p".to_string(),
            category: "Mobiles".to_string(),
            image_url: None,
            description: Some("Flagship Android phone".to_string()),
        })
        .unwrap();
    println!("  Added link ({}), Mobiles now has {} link(s)", &id[..8],
        store.links_in_category("Mobiles").len());

    store
        .update_link(
            &id,
            LinkPatch {
                title: Some("Galaxy S24 Ultra".to_string()),
                url: None,
                category: None,
                image_url: None,
                description: None,
            },
        )
        .unwrap();
    let updated = store.links().iter().find(|l| l.id == id).unwrap();
    println!("  Updated title: {}", updated.title);

    store.add_category("Books").unwrap();
    println!("  Added category, exists('books') = {}", store.category_exists("books"));

    store.delete_category("Books").unwrap();
    store.delete_link(&id).unwrap();
    println!("  Cleaned up, back to {} link(s)", store.links().len());
    println!("  ✓ LinkStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_views() {
    use linkhub::managers::link_store::{LinkStore, LinkStoreTrait};
    use linkhub::storage::{LinkRepository, MemoryStorage};
    section("Derived Views");

    let repo = LinkRepository::new(Box::new(MemoryStorage::new()));
    let store = LinkStore::load(repo).unwrap();

    let counts = store.link_counts();
    for category in store.categories() {
        println!("  {} — {} link(s)", category.name, counts.get(&category.name).copied().unwrap_or(0));
    }

    let hits = store.filter_links("iphone", None);
    println!("  Search 'iphone': {} hit(s)", hits.len());

    let scoped = store.filter_links("", Some("Fashion"));
    println!("  All in Fashion: {} link(s)", scoped.len());
    println!("  ✓ Derived views OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_url_metadata() {
    use linkhub::services::url_metadata;
    section("URL Metadata Extractor");

    let meta = url_metadata::extract("https://shop.example.com/apple-iphone-15-pro/p").unwrap();
    println!("  Slug: {}", meta.slug);
    println!("  Description: {}", meta.description);

    let meta2 = url_metadata::extract("https://example.com/products/wireless-mouse").unwrap();
    println!("  Last-segment fallback: {}", meta2.description);

    let bad = url_metadata::extract("not a url");
    println!("  Invalid input rejected: {}", bad.is_err());
    println!("  ✓ URL metadata OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_auth() {
    use linkhub::services::auth_service::{AuthService, AuthServiceTrait};
    use linkhub::storage::MemoryStorage;
    section("Auth Service");

    let mut auth = AuthService::new(Box::new(MemoryStorage::new()), None);
    println!("  Initially authenticated: {}", auth.is_authenticated().unwrap());

    let wrong = auth.login("letmein").unwrap();
    println!("  Wrong password accepted: {}", wrong);

    let ok = auth.login("admin123").unwrap();
    println!("  Correct password accepted: {}", ok);
    println!("  Authenticated: {}", auth.is_authenticated().unwrap());

    auth.logout().unwrap();
    println!("  After logout: {}", auth.is_authenticated().unwrap());
    println!("  ✓ AuthService OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use linkhub::app::App;
    use linkhub::managers::link_store::LinkStoreTrait;
    section("App Core (full lifecycle)");

    let app = App::new(":memory:").unwrap();
    println!(
        "  Initialized App: {} categories, {} links seeded",
        app.store.categories().len(),
        app.store.links().len()
    );
    println!("  ✓ App Core OK");
}
