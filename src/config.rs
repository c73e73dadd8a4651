use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for topline
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToplineConfig {
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Display configuration options
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Decimal places used when printing scores (default: shortest form)
    #[serde(default)]
    pub precision: Option<usize>,

    /// Whether colored output is enabled by default (default: true)
    #[serde(default = "default_true")]
    pub use_color: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: None,
            use_color: true,
        }
    }
}

impl ToplineConfig {
    /// Load config from custom path or default XDG location
    pub fn load(custom_path: Option<&PathBuf>) -> Result<Self, ConfigError> {
        let path = if let Some(p) = custom_path {
            p.clone()
        } else {
            match Self::default_config_path() {
                Ok(p) => p,
                Err(_) => return Ok(Self::default()),
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(path.clone(), e))?;

        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.clone(), e))
    }

    /// Get default config path: ~/.config/topline/config.toml
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;

        Ok(config_dir.join("topline").join("config.toml"))
    }
}

impl Default for ToplineConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    NoConfigDir,
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoConfigDir => write!(f, "Could not determine config directory"),
            ConfigError::Io(path, e) => {
                write!(f, "Failed to read config at {}: {}", path.display(), e)
            }
            ConfigError::Parse(path, e) => {
                write!(f, "Failed to parse config at {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = PathBuf::from("/nonexistent/topline/config.toml");
        let config = ToplineConfig::load(Some(&path)).unwrap();

        assert_eq!(config.display.precision, None);
        assert!(config.display.use_color);
    }

    #[test]
    fn test_loads_display_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]").unwrap();
        writeln!(file, "precision = 3").unwrap();
        writeln!(file, "use_color = false").unwrap();
        file.flush().unwrap();

        let path = file.path().to_path_buf();
        let config = ToplineConfig::load(Some(&path)).unwrap();

        assert_eq!(config.display.precision, Some(3));
        assert!(!config.display.use_color);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display = \"not a table\"").unwrap();
        file.flush().unwrap();

        let path = file.path().to_path_buf();
        assert!(ToplineConfig::load(Some(&path)).is_err());
    }
}
