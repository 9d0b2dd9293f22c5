use crate::clamp::model::{
    Configuration, OutputUnit, DEFAULT_MAX_FONT_SIZE, DEFAULT_MAX_WIDTH, DEFAULT_MIN_FONT_SIZE,
    DEFAULT_MIN_WIDTH, ROOT_FONT_SIZE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Startup values, read from a TOML file. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "default_min_width")]
    pub min_width: String,
    #[serde(default = "default_max_width")]
    pub max_width: String,
    #[serde(default = "default_min_font_size")]
    pub min_font_size: String,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: String,
    #[serde(default = "default_root")]
    pub root: u32,
    // Output unit for the result
    #[serde(default)]
    pub unit: OutputUnit,
}

fn default_min_width() -> String {
    DEFAULT_MIN_WIDTH.to_string()
}

fn default_max_width() -> String {
    DEFAULT_MAX_WIDTH.to_string()
}

fn default_min_font_size() -> String {
    DEFAULT_MIN_FONT_SIZE.to_string()
}

fn default_max_font_size() -> String {
    DEFAULT_MAX_FONT_SIZE.to_string()
}

fn default_root() -> u32 {
    ROOT_FONT_SIZE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_width: default_min_width(),
            max_width: default_max_width(),
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            root: default_root(),
            unit: OutputUnit::default(),
        }
    }
}

impl Settings {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::new(
            self.min_width.clone(),
            self.max_width.clone(),
            self.min_font_size.clone(),
            self.max_font_size.clone(),
            self.root,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::load_from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.configuration(), Configuration::default());
    }

    #[test]
    fn test_partial_config() {
        let settings = Settings::load_from_str(
            r#"
max_width = "1440px"
unit = "px"
"#,
        )
        .unwrap();
        assert_eq!(settings.min_width, "320px");
        assert_eq!(settings.max_width, "1440px");
        assert_eq!(settings.root, 16);
        assert_eq!(settings.unit, OutputUnit::Px);
    }

    #[test]
    fn test_invalid_config() {
        let result = Settings::load_from_str("unit = \"em\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));

        let result = Settings::load_from_str("root = \"sixteen\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "min_font_size = \"1rem\"").unwrap();
        writeln!(file, "max_font_size = \"3rem\"").unwrap();
        writeln!(file, "root = 10").unwrap();

        let settings = Settings::load_from_file(file.path()).unwrap();
        let config = settings.configuration();
        assert_eq!(config.min_font_size, "1rem");
        assert_eq!(config.max_font_size, "3rem");
        assert_eq!(config.root, 10);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
