use axum::http::HeaderValue;

/// Errors raised while reading configuration at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),

    #[error("DATABASE_URL must be set when TRACK_STORE=postgres")]
    MissingDatabaseUrl,
}

/// Deployment environment. Only production hides error traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// Where track records live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL have defaults suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub environment: Environment,
    pub store: StoreBackend,
    /// Insert the sample catalogue into an empty store at startup.
    pub seed_sample_data: bool,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3001`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `APP_ENV`              | `development`              |
    /// | `TRACK_STORE`          | `postgres`                 |
    /// | `DATABASE_URL`         | required for `postgres`    |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `SEED_SAMPLE_DATA`     | `false`                    |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port: u16 = parse("PORT", "u16", var("PORT", "3001"))?;
        let request_timeout_secs: u64 =
            parse("REQUEST_TIMEOUT_SECS", "u64", var("REQUEST_TIMEOUT_SECS", "30"))?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ConfigError::InvalidCorsOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let environment = match var("APP_ENV", "development").to_ascii_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let store = match var("TRACK_STORE", "postgres").to_ascii_lowercase().as_str() {
            "memory" => StoreBackend::Memory,
            "postgres" => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                max_connections: parse(
                    "DB_MAX_CONNECTIONS",
                    "u32",
                    var("DB_MAX_CONNECTIONS", "20"),
                )?,
            },
            other => {
                return Err(ConfigError::Invalid {
                    name: "TRACK_STORE",
                    expected: "store backend (postgres|memory)",
                    value: other.to_string(),
                })
            }
        };

        let seed_sample_data = parse_bool("SEED_SAMPLE_DATA", var("SEED_SAMPLE_DATA", "false"))?;

        let log_format = match var("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            environment,
            store,
            seed_sample_data,
            log_format,
        })
    }

    /// Error responses carry a diagnostic trace everywhere except production.
    pub fn expose_error_trace(&self) -> bool {
        self.environment != Environment::Production
    }
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value,
    })
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            name,
            expected: "boolean",
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_with_memory_store() {
        let config = load(&[("TRACK_STORE", "memory")]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.cors_origins, vec![HeaderValue::from_static("http://localhost:5173")]);
        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(!config.seed_sample_data);
        assert!(config.expose_error_trace());
    }

    #[test]
    fn postgres_requires_database_url() {
        assert_matches!(load(&[]), Err(ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn postgres_settings_are_read() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/tracks"),
            ("DB_MAX_CONNECTIONS", "5"),
        ])
        .unwrap();
        assert_eq!(
            config.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/tracks".into(),
                max_connections: 5,
            }
        );
    }

    #[test]
    fn production_hides_traces() {
        let config = load(&[("TRACK_STORE", "memory"), ("APP_ENV", "production")]).unwrap();
        assert!(!config.expose_error_trace());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = load(&[("TRACK_STORE", "memory"), ("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "PORT", .. });
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("TRACK_STORE", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.cors_origins[1], "http://b.test");
    }

    #[test]
    fn unknown_store_backend_is_rejected() {
        let err = load(&[("TRACK_STORE", "mongo")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "TRACK_STORE", .. });
    }

    #[test]
    fn seed_flag_accepts_common_spellings() {
        let config = load(&[("TRACK_STORE", "memory"), ("SEED_SAMPLE_DATA", "yes")]).unwrap();
        assert!(config.seed_sample_data);
        let err = load(&[("TRACK_STORE", "memory"), ("SEED_SAMPLE_DATA", "maybe")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { name: "SEED_SAMPLE_DATA", .. });
    }
}
