// LinkHub state managers
// The link store owns the authoritative link and category collections.

pub mod link_store;
