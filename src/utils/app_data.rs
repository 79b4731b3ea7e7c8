use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "patrie";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Colorize terminal output
    #[serde(default = "default_color")]
    pub color: bool,

    /// Print completions in alphabetical order instead of trie order
    #[serde(default = "default_sort_results")]
    pub sort_results: bool,

    /// Maximum completions to print per prefix (0 means no limit)
    #[serde(default)]
    pub max_results: usize,

    /// Word list used when `--words` is not given
    #[serde(default)]
    pub default_words: Option<PathBuf>,
}

fn default_color() -> bool {
    true
}

fn default_sort_results() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            sort_results: default_sort_results(),
            max_results: 0,
            default_words: None,
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: AppConfig = serde_json::from_str(&content)
                .context("Failed to parse config file")?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the app data directory
    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;
        let content = serde_json::to_string_pretty(self)
            .context("Failed to serialize config")?;
        fs::write(&config_path, content)
            .context("Failed to write config file")?;
        Ok(())
    }

    /// Effective result limit (`None` means unlimited)
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then_some(self.max_results)
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default() {
        let config = AppConfig::default();
        assert!(config.color);
        assert!(config.sort_results);
        assert_eq!(config.max_results, 0);
        assert!(config.default_words.is_none());
    }

    #[test]
    fn test_result_limit() {
        let mut config = AppConfig::default();
        assert_eq!(config.result_limit(), None);

        config.max_results = 5;
        assert_eq!(config.result_limit(), Some(5));
    }

    #[test]
    fn test_app_config_serialization() {
        let config = AppConfig {
            color: false,
            sort_results: false,
            max_results: 20,
            default_words: Some(PathBuf::from("/usr/share/dict/words")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_app_config_partial_json() {
        // Should use defaults for missing fields
        let json = r#"{"max_results": 3}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.max_results, 3);
        assert!(config.color);
        assert!(config.sort_results);
    }

    #[test]
    fn test_app_config_empty_json() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
