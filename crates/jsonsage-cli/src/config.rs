//! Configuration file (`jsonsage.toml`).
//!
//! Every field has a default, so a partial or missing file is fine.
//! Command-line flags override file values.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `[database] path`.
pub const DATABASE_ENV: &str = "JSONSAGE_DATABASE";

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "jsonsage.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum request body size in bytes
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            body_limit: jsonsage_web::state::DEFAULT_BODY_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("jsonsage.db"),
        }
    }
}

impl Config {
    /// Load the config.
    ///
    /// An explicitly given path must exist and parse. The default file is
    /// optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from(path)?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(path) = std::env::var(DATABASE_ENV) {
            if !path.is_empty() {
                config.database.path = PathBuf::from(path);
            }
        }

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.body_limit, 1024 * 1024);
        assert_eq!(config.database.path, PathBuf::from("jsonsage.db"));
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
[server]
port = 8080
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1"); // default
        assert_eq!(config.database.path, PathBuf::from("jsonsage.db")); // default
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 9000
body_limit = 4096

[database]
path = "/var/lib/jsonsage/ledger.db"
"#;
        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.body_limit, 4096);
        assert_eq!(config.database.path, PathBuf::from("/var/lib/jsonsage/ledger.db"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \"custom.db\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.database.path, PathBuf::from("custom.db"));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"not a number\"").unwrap();

        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        assert!(Config::load(Some(Path::new("/nonexistent/jsonsage.toml"))).is_err());
    }
}
