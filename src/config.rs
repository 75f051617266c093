//! Runtime configuration: where the library and log files live, and which
//! decorative banner document to fetch. Everything has a default under the
//! user's home directory; environment variables override individual values.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".personal-library-manager";
/// JSON file holding the book collection.
const LIBRARY_FILE_NAME: &str = "library.json";
/// Plain-text log file. The terminal belongs to the TUI, so logs go here.
const LOG_FILE_NAME: &str = "library.log";

/// Animation document shown as the header banner when nothing else is set.
pub const DEFAULT_BANNER_URL: &str = "https://assets9.lottiefiles.com/temp/1f20_aKAfIn.json";

pub const LIBRARY_FILE_VAR: &str = "LIBRARY_MANAGER_FILE";
pub const LOG_FILE_VAR: &str = "LIBRARY_MANAGER_LOG";
/// Set to an empty string to skip the banner fetch entirely.
pub const BANNER_URL_VAR: &str = "LIBRARY_MANAGER_BANNER_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub library_path: PathBuf,
    pub log_path: PathBuf,
    pub banner_url: Option<String>,
}

impl Config {
    /// Resolve the configuration from the real home directory and process
    /// environment.
    pub fn load() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::from_lookup(base_dirs.home_dir(), |key| env::var(key).ok()))
    }

    /// Build the configuration from an explicit home directory and variable
    /// lookup.
    pub fn from_lookup<F>(home: &Path, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = home.join(DATA_DIR_NAME);

        let library_path = lookup(LIBRARY_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LIBRARY_FILE_NAME));

        let log_path = lookup(LOG_FILE_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(LOG_FILE_NAME));

        let banner_url = match lookup(BANNER_URL_VAR) {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value.trim().to_string()),
            None => Some(DEFAULT_BANNER_URL.to_string()),
        };

        Self {
            library_path,
            log_path,
            banner_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_live_under_home_data_dir() {
        let config = Config::from_lookup(Path::new("/home/reader"), lookup_from(&[]));
        assert_eq!(
            config.library_path,
            PathBuf::from("/home/reader/.personal-library-manager/library.json")
        );
        assert_eq!(
            config.log_path,
            PathBuf::from("/home/reader/.personal-library-manager/library.log")
        );
        assert_eq!(config.banner_url.as_deref(), Some(DEFAULT_BANNER_URL));
    }

    #[test]
    fn environment_overrides_paths() {
        let config = Config::from_lookup(
            Path::new("/home/reader"),
            lookup_from(&[
                (LIBRARY_FILE_VAR, "/tmp/books.json"),
                (LOG_FILE_VAR, "/tmp/books.log"),
                (BANNER_URL_VAR, " http://localhost/banner.json "),
            ]),
        );
        assert_eq!(config.library_path, PathBuf::from("/tmp/books.json"));
        assert_eq!(config.log_path, PathBuf::from("/tmp/books.log"));
        assert_eq!(
            config.banner_url.as_deref(),
            Some("http://localhost/banner.json")
        );
    }

    #[test]
    fn empty_banner_url_disables_fetch() {
        let config = Config::from_lookup(
            Path::new("/home/reader"),
            lookup_from(&[(BANNER_URL_VAR, "")]),
        );
        assert_eq!(config.banner_url, None);
    }

    #[test]
    fn blank_path_override_falls_back_to_default() {
        let config = Config::from_lookup(
            Path::new("/home/reader"),
            lookup_from(&[(LIBRARY_FILE_VAR, "  ")]),
        );
        assert!(config.library_path.ends_with("library.json"));
        assert!(config.library_path.starts_with("/home/reader"));
    }
}
