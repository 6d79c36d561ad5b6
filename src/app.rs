//! App Core for LinkHub.
//!
//! Central struct holding the database, the link store and the auth
//! service, instantiated once per process and passed by reference to
//! consumers (the RPC handler and the webview UI).

use std::sync::Arc;

use crate::database::Database;
use crate::managers::link_store::LinkStore;
use crate::services::auth_service::AuthService;
use crate::storage::{LinkRepository, SqliteStorage};

/// Central application struct. The store and the auth service each hold
/// their own `SqliteStorage` handle over the shared database.
pub struct App {
    pub db: Arc<Database>,
    pub store: LinkStore,
    pub auth: AuthService,
}

impl App {
    /// Creates a new App: opens the database, loads (or seeds) the store
    /// and wires up the auth service.
    ///
    /// The admin password can be overridden via `LINKHUB_ADMIN_PASSWORD`.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let repo = LinkRepository::new(Box::new(SqliteStorage::new(db.clone())));
        let store = LinkStore::load(repo).map_err(|e| format!("LinkStore init failed: {}", e))?;

        let auth = AuthService::new(
            Box::new(SqliteStorage::new(db.clone())),
            std::env::var("LINKHUB_ADMIN_PASSWORD").ok(),
        );

        Ok(Self { db, store, auth })
    }
}
