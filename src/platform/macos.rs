// LinkHub platform paths for macOS
// Config and data both live in ~/Library/Application Support/LinkHub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LinkHub on macOS.
pub fn get_config_dir() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
    PathBuf::from(home)
        .join("Library")
        .join("Application Support")
        .join("LinkHub")
}

/// Returns the data directory for LinkHub on macOS.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
