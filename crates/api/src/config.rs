/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (local development).
    Pretty,
    /// One JSON object per event (log shippers).
    Json,
}

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{key} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub key: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Log output format (default: `pretty`).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `LOG_FORMAT`           | `pretty` (or `json`)       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the raw value of a
    /// variable if it is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");

        let port = var("PORT", "3000");
        let port: u16 = port.trim().parse().map_err(|_| ConfigError {
            key: "PORT",
            expected: "a valid u16",
            value: port.clone(),
        })?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let timeout = var("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs: u64 = timeout.trim().parse().map_err(|_| ConfigError {
            key: "REQUEST_TIMEOUT_SECS",
            expected: "a valid u64",
            value: timeout.clone(),
        })?;

        let shutdown = var("SHUTDOWN_TIMEOUT_SECS", "30");
        let shutdown_timeout_secs: u64 = shutdown.trim().parse().map_err(|_| ConfigError {
            key: "SHUTDOWN_TIMEOUT_SECS",
            expected: "a valid u64",
            value: shutdown.clone(),
        })?;

        let format = var("LOG_FORMAT", "pretty");
        let log_format = match format.trim().to_ascii_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => {
                return Err(ConfigError {
                    key: "LOG_FORMAT",
                    expected: "'pretty' or 'json'",
                    value: format,
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.shutdown_timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn overrides_are_applied() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://admin.example.com, http://localhost:3001,"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SHUTDOWN_TIMEOUT_SECS", "10"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://admin.example.com", "http://localhost:3001"]
        );
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.shutdown_timeout_secs, 10);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = load(&[("PORT", "70000")]).unwrap_err();
        assert_eq!(err.key, "PORT");
        assert_eq!(err.to_string(), "PORT must be a valid u16, got '70000'");
    }

    #[test]
    fn bad_log_format_is_an_error() {
        let err = load(&[("LOG_FORMAT", "xml")]).unwrap_err();
        assert_eq!(err.key, "LOG_FORMAT");
    }
}
