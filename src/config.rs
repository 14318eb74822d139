//! Configuration management for colabino
//!
//! Stores settings in ~/.config/colabino/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name shown on messages and comments authored in this session
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Route slug opened at startup when no --route flag is given
    pub default_route: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
            default_route: None,
        }
    }
}

fn default_display_name() -> String {
    "You".to_string()
}

impl Config {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("colabino"))
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load config from disk, or return default
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(err) => {
                    preserve_corrupt_config(path, &content);
                    eprintln!(
                        "  Warning: Config file was corrupted ({}). A backup was saved and defaults were loaded.",
                        err
                    );
                }
            }
        }
        Self::default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let dir = Self::config_dir()
            .ok_or_else(|| "Could not determine config directory".to_string())?;
        self.save_to_dir(&dir)
    }

    fn save_to_dir(&self, dir: &Path) -> Result<(), String> {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        let path = dir.join("config.json");
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        #[cfg(unix)]
        {
            write_config_atomic(&path, &content)
                .map_err(|e| format!("Failed to write config: {}", e))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&path, content)
                .map_err(|e| format!("Failed to write config: {}", e))?;
        }

        Ok(())
    }

    /// Get the config file location for display
    pub fn config_location() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.config/colabino/config.json".to_string())
    }
}

fn preserve_corrupt_config(path: &Path, content: &str) {
    let corrupt_path = path.with_extension("json.corrupt");
    if fs::rename(path, &corrupt_path).is_err() {
        let _ = fs::write(&corrupt_path, content);
    }
}

#[cfg(unix)]
fn write_config_atomic(path: &Path, content: &str) -> Result<(), String> {
    use std::fs::OpenOptions;

    let tmp_path = path.with_extension("tmp");
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)
        .map_err(|e| e.to_string())?;

    file.write_all(content.as_bytes())
        .map_err(|e| e.to_string())?;

    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.display_name, "You");
        assert!(config.default_route.is_none());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            display_name: "Rina Lopez".to_string(),
            default_route: Some("drive".to_string()),
        };
        config.save_to_dir(dir.path()).unwrap();

        let loaded = Config::load_from(&dir.path().join("config.json"));
        assert_eq!(loaded.display_name, "Rina Lopez");
        assert_eq!(loaded.default_route.as_deref(), Some("drive"));
    }

    #[test]
    fn test_corrupt_config_backed_up_and_defaults_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = Config::load_from(&path);
        assert_eq!(loaded.display_name, "You");
        assert!(dir.path().join("config.json.corrupt").exists());
    }
}
