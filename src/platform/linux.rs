// LinkHub platform paths for Linux
// Config: ~/.config/linkhub
// Data:   ~/.local/share/linkhub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LinkHub on Linux.
/// Uses `$XDG_CONFIG_HOME/linkhub` if set, otherwise `~/.config/linkhub`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("linkhub")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("linkhub")
    }
}

/// Returns the data directory for LinkHub on Linux.
/// Uses `$XDG_DATA_HOME/linkhub` if set, otherwise `~/.local/share/linkhub`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("linkhub")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("linkhub")
    }
}
