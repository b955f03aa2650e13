//! Engine configuration persistence
//!
//! Stores user preferences in `~/.config/spangrid/config.yaml`

use serde::{Deserialize, Serialize};

/// Engine configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether page titles are drawn above single-page tables
    #[serde(default = "default_true")]
    pub show_titles: bool,
    /// Whether cells carry their `column;row` address label
    #[serde(default)]
    pub show_indices: bool,
    /// Master switch; when off every mutation message is ignored
    #[serde(default = "default_true")]
    pub enable_editing: bool,
}

fn default_true() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            show_titles: true,
            show_indices: false,
            enable_editing: true,
        }
    }
}

impl EngineConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content, &path),
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn from_yaml(content: &str, path: &std::path::Path) -> Self {
        match serde_yaml::from_str(content) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.show_titles);
        assert!(!config.show_indices);
        assert!(config.enable_editing);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let path = std::path::Path::new("config.yaml");
        let config = EngineConfig::from_yaml("show_indices: true\n", path);
        assert!(config.show_indices);
        assert!(config.show_titles);
        assert!(config.enable_editing);
    }

    #[test]
    fn test_malformed_yaml_falls_back_to_defaults() {
        let path = std::path::Path::new("config.yaml");
        let config = EngineConfig::from_yaml("show_titles: [oops", path);
        assert!(config.show_titles);
        assert!(!config.show_indices);
    }

    #[test]
    fn test_roundtrip() {
        let mut config = EngineConfig::default();
        config.show_indices = true;
        config.enable_editing = false;

        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: EngineConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(back.show_indices);
        assert!(!back.enable_editing);
        assert!(back.show_titles);
    }
}
