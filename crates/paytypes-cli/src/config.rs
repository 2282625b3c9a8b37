//! CLI configuration management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Output format for reports.
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Count warnings as failures.
    #[serde(default)]
    pub strict: bool,
    /// Log level used when neither `RUST_LOG` nor `--verbose` is given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Default target of `export`.
    #[serde(default = "default_schema_dir")]
    pub schema_dir: PathBuf,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_schema_dir() -> PathBuf {
    PathBuf::from("schemas")
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            strict: false,
            log_level: default_log_level(),
            schema_dir: default_schema_dir(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl CliConfig {
    /// Load configuration from the default file. Defaults apply when there
    /// is no config directory or no file; a file that does not parse is an
    /// error.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)
            .map_err(|e| format!("{}: invalid config: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save configuration to the default file.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the configuration file path.
    pub fn config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let dirs = directories::ProjectDirs::from("dev", "paytypes", "paytypes")
            .ok_or("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Set a configuration value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "output_format" => {
                self.output_format = match value {
                    "table" => OutputFormat::Table,
                    "json" => OutputFormat::Json,
                    "yaml" => OutputFormat::Yaml,
                    _ => return Err(format!("Invalid output format: {}", value)),
                };
            }
            "strict" => {
                self.strict = value
                    .parse()
                    .map_err(|_| format!("Invalid boolean: {}", value))?;
            }
            "log_level" => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(format!("Invalid log level: {}", value));
                }
                self.log_level = level;
            }
            "schema_dir" => self.schema_dir = PathBuf::from(value),
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_set_known_keys() {
        let mut config = CliConfig::default();
        config.set("output_format", "json").unwrap();
        config.set("strict", "true").unwrap();
        config.set("log_level", "DEBUG").unwrap();
        config.set("schema_dir", "out/schemas").unwrap();

        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.strict);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.schema_dir, PathBuf::from("out/schemas"));
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut config = CliConfig::default();
        assert_eq!(
            config.set("token", "x").unwrap_err(),
            "Unknown config key: token"
        );
        assert!(config.set("output_format", "xml").is_err());
        assert!(config.set("strict", "maybe").is_err());
        assert!(config.set("log_level", "loud").is_err());
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        assert_eq!(CliConfig::load_from(&path).unwrap(), CliConfig::default());

        let mut config = CliConfig::default();
        config.set("output_format", "yaml").unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(CliConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "strict: true\noutput_format: xml\n").unwrap();

        let err = CliConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("invalid config"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CliConfig = serde_yaml::from_str("strict: true\n").unwrap();
        assert!(config.strict);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output_format, OutputFormat::Table);
    }
}
