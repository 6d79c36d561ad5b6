// LinkHub services
// Services provide functionality around the store: URL metadata extraction
// and the admin authentication flag.

pub mod auth_service;
pub mod url_metadata;
