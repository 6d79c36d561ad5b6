// LinkHub platform paths for Windows
// Config and data both live in %APPDATA%/LinkHub

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for LinkHub on Windows.
pub fn get_config_dir() -> PathBuf {
    let appdata = env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Temp"));
    PathBuf::from(appdata).join("LinkHub")
}

/// Returns the data directory for LinkHub on Windows.
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}
