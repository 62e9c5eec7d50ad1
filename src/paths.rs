// src/paths.rs

//! On-disk locations used by the application.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.json";
const EXPORT_DIR: &str = "exports";

/// Where logs, exports and settings live.
///
/// Resolved once at startup from the platform directories; tests root both
/// directories in a temporary folder instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl AppPaths {
    /// Platform data and config directories, or `./.data` and `./.config`
    /// when no home directory can be determined.
    pub fn discover() -> Self {
        match ProjectDirs::from("com", "header-inspector", env!("CARGO_PKG_NAME")) {
            Some(dirs) => Self {
                data_dir: dirs.data_local_dir().to_path_buf(),
                config_dir: dirs.config_dir().to_path_buf(),
            },
            None => Self::rooted_at(Path::new(".")),
        }
    }

    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data_dir: root.join(".data"),
            config_dir: root.join(".config"),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(format!("{}.log", env!("CARGO_PKG_NAME")))
    }

    pub fn export_dir(&self) -> PathBuf {
        self.data_dir.join(EXPORT_DIR)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_sit_under_their_directories() {
        let paths = AppPaths::rooted_at(Path::new("/tmp/inspector"));
        assert_eq!(paths.settings_file(), Path::new("/tmp/inspector/.config/settings.json"));
        assert_eq!(paths.export_dir(), Path::new("/tmp/inspector/.data/exports"));
        assert_eq!(paths.log_file(), Path::new("/tmp/inspector/.data/header-inspector.log"));
    }
}
