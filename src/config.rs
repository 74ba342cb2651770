//! Application configuration.

use crate::consts::cli_consts::{BACKEND_URL_ENV, DEFAULT_BACKEND_URL, polling};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{fs, io};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base address of the queue backend.
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Status poll interval in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    polling::POLL_INTERVAL_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Loads the file if there is one, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, io::Error> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), io::Error> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    /// Picks the backend URL: explicit flag, then environment, then this file.
    pub fn resolve_backend_url(&self, flag: Option<String>) -> String {
        self.pick_backend_url(flag, std::env::var(BACKEND_URL_ENV).ok())
    }

    /// Blank values count as unset at every step.
    fn pick_backend_url(&self, flag: Option<String>, env: Option<String>) -> String {
        let non_blank = |url: &String| !url.trim().is_empty();
        flag.filter(non_blank)
            .or_else(|| env.filter(non_blank))
            .unwrap_or_else(|| self.backend_url.clone())
    }
}

/// `~/.mailq/config.json`
pub fn get_config_path() -> Result<PathBuf, io::Error> {
    let home = home::home_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Home directory not found"))?;
    Ok(home.join(".mailq").join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    // Loading a saved configuration file should return the same configuration.
    fn test_load_recovers_saved_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config {
            backend_url: "http://mail.internal:8080".to_string(),
            poll_interval_ms: 500,
        };
        config.save(&path).unwrap();

        let loaded_config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, loaded_config);
    }

    #[test]
    // Saving a configuration should create directories if they don't exist.
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nonexistent_dir").join("config.json");

        let config = Config::default();
        let result = config.save(&path);

        assert!(result.is_ok(), "Failed to save config");
        assert!(
            path.parent().unwrap().exists(),
            "Parent directory does not exist"
        );
    }

    #[test]
    // Loading an invalid JSON file should return an error.
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("invalid_config.json");

        let mut file = File::create(&path).unwrap();
        writeln!(file, "invalid json").unwrap();

        let result = Config::load_from_file(&path);
        assert!(result.is_err());
    }

    #[test]
    // Missing fields fall back to defaults, so an empty object is a valid config.
    fn test_load_fills_missing_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.poll_interval_ms, 2_000);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_clear_tolerates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(Config::clear(&path).is_ok());

        Config::default().save(&path).unwrap();
        Config::clear(&path).unwrap();
        assert!(!path.exists());
    }

    fn file_config() -> Config {
        Config {
            backend_url: "http://from-file:8080".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_flag_wins_over_file() {
        assert_eq!(
            file_config().resolve_backend_url(Some("http://from-flag:9000".to_string())),
            "http://from-flag:9000"
        );
    }

    #[test]
    fn test_env_wins_over_file() {
        assert_eq!(
            file_config().pick_backend_url(None, Some("http://from-env:1".to_string())),
            "http://from-env:1"
        );
    }

    #[test]
    fn test_blank_flag_falls_through_to_env() {
        let config = file_config();
        assert_eq!(
            config.pick_backend_url(Some(String::new()), Some("http://from-env:1".to_string())),
            "http://from-env:1"
        );
        assert_eq!(
            config.pick_backend_url(Some("  ".to_string()), Some(String::new())),
            "http://from-file:8080"
        );
    }
}
