//! LinkHub database layer.
//!
//! Provides SQLite connection management and schema migrations. The schema
//! is deliberately tiny: one `kv_store` table acting as durable key-value
//! storage for the serialized link/category collections and the auth flag.
//!
//! # Usage
//!
//! ```no_run
//! use linkhub::database::Database;
//!
//! // Open a persistent database
//! let db = Database::open("linkhub.db").expect("failed to open database");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//!
//! // Access the underlying connection for queries
//! let conn = db.connection();
//! ```

pub mod connection;
pub mod migrations;

pub use connection::Database;
