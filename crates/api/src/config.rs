//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// File name of the model artifact shipped next to the binary.
pub const MODEL_FILE: &str = "heart_risk_model.json";

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `5000`)
/// - `RUST_LOG`: tracing filter directive (default: `"debug"`)
/// - `MODEL_PATH`: model artifact (default: [`MODEL_FILE`] beside the executable)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub model_path: PathBuf,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            model_path: std::env::var_os("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "debug".to_string(),
            model_path: default_model_path(),
        }
    }
}

/// Resolves [`MODEL_FILE`] relative to the running executable's directory.
pub fn default_model_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(MODEL_FILE)))
        .unwrap_or_else(|| PathBuf::from(MODEL_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "debug");
        assert!(config.model_path.ends_with(MODEL_FILE));
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            model_path: PathBuf::from("/srv/models/heart_risk_model.json"),
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_addr_default() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_model_path_next_to_executable() {
        let path = default_model_path();
        let exe_dir = std::env::current_exe().unwrap();
        assert_eq!(path.parent(), exe_dir.parent());
    }
}
