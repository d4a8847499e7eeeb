//! Configuration file handling for saving and loading setup configs.
//!
//! The defaults match the project checkout layout; a config file is only
//! needed when a checkout deviates from it (different venv name, SDK moved,
//! alternative entry point).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Setup configuration that can be saved/loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Interpreter override; discovered from PATH when unset
    pub python: Option<PathBuf>,

    /// Virtual environment directory, relative to the project root
    pub venv_dir: PathBuf,

    /// Local SDK package directory, relative to the project root
    pub sdk_dir: PathBuf,

    /// Requirements file, relative to the project root
    pub requirements: PathBuf,

    /// Streamlit entry point named in the completion message
    pub app_entry: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            python: None,
            venv_dir: PathBuf::from(".venv"),
            sdk_dir: PathBuf::from("glueco-sdk"),
            requirements: PathBuf::from("requirements.txt"),
            app_entry: "app.py".to_string(),
        }
    }
}

impl SetupConfig {
    /// Create a new configuration with the default checkout layout
    #[allow(dead_code)] // API: Constructor for external consumers
    pub fn new() -> Self {
        Self::default()
    }

    /// Save configuration to a JSON file
    #[allow(dead_code)] // API: Used to seed a config for non-standard checkouts
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.venv_dir.as_os_str().is_empty() {
            anyhow::bail!("Virtual environment directory must be specified");
        }
        if self.venv_dir.is_absolute() {
            anyhow::bail!("Virtual environment directory must be relative to the project root");
        }

        if self.sdk_dir.as_os_str().is_empty() {
            anyhow::bail!("SDK directory must be specified");
        }

        if self.requirements.as_os_str().is_empty() {
            anyhow::bail!("Requirements file must be specified");
        }

        if self.app_entry.trim().is_empty() {
            anyhow::bail!("App entry point must be specified");
        }

        if let Some(python) = &self.python {
            if python.as_os_str().is_empty() {
                anyhow::bail!("Interpreter override must not be empty");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SetupConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.venv_dir, PathBuf::from(".venv"));
        assert_eq!(config.sdk_dir, PathBuf::from("glueco-sdk"));
        assert_eq!(config.requirements, PathBuf::from("requirements.txt"));
        assert_eq!(config.app_entry, "app.py");
        assert!(config.python.is_none());
    }

    #[test]
    fn test_validate_rejects_empty_venv_dir() {
        let config = SetupConfig {
            venv_dir: PathBuf::new(),
            ..SetupConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_absolute_venv_dir() {
        let config = SetupConfig {
            venv_dir: PathBuf::from("/opt/venv"),
            ..SetupConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("relative"));
    }

    #[test]
    fn test_validate_rejects_empty_app_entry() {
        let config = SetupConfig {
            app_entry: "   ".to_string(),
            ..SetupConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: SetupConfig =
            serde_json::from_str(r#"{ "venv_dir": "env" }"#).expect("Should parse");
        assert_eq!(config.venv_dir, PathBuf::from("env"));
        assert_eq!(config.requirements, PathBuf::from("requirements.txt"));
    }
}
