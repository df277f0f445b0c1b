use std::fmt::Display;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Configuration errors. Startup aborts on any of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be set")]
    Missing { name: &'static str },

    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Which data-table and auth backend the server talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// The hosted REST service.
    Hosted,
    /// In-process store; state is lost on restart.
    Memory,
}

impl FromStr for BackendMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hosted" => Ok(BackendMode::Hosted),
            "memory" => Ok(BackendMode::Memory),
            other => Err(format!("expected 'hosted' or 'memory', got '{other}'")),
        }
    }
}

/// Secret used to sign in-memory access tokens when none is configured.
pub const DEV_JWT_SECRET: &str = "digitalpro-local-development-secret";

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub mode: BackendMode,
    /// Project base URL (hosted mode only).
    pub url: String,
    /// Public key used for auth calls.
    pub anon_key: String,
    /// Privileged key used for table and procedure calls.
    pub service_key: String,
    /// Token signing secret for the in-memory auth provider.
    pub jwt_secret: String,
}

impl BackendConfig {
    /// | Env Var               | Required        | Default   |
    /// |-----------------------|-----------------|-----------|
    /// | `BACKEND_MODE`        | no              | `hosted`  |
    /// | `BACKEND_URL`         | in hosted mode  | --        |
    /// | `BACKEND_ANON_KEY`    | in hosted mode  | --        |
    /// | `BACKEND_SERVICE_KEY` | in hosted mode  | --        |
    /// | `BACKEND_JWT_SECRET`  | no              | dev value |
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mode: BackendMode = parse_or(lookup, "BACKEND_MODE", "hosted")?;

        let required = |name: &'static str| -> Result<String, ConfigError> {
            match lookup(name).filter(|v| !v.trim().is_empty()) {
                Some(value) => Ok(value),
                None if mode == BackendMode::Memory => Ok(String::new()),
                None => Err(ConfigError::Missing { name }),
            }
        };

        Ok(Self {
            mode,
            url: required("BACKEND_URL")?,
            anon_key: required("BACKEND_ANON_KEY")?,
            service_key: required("BACKEND_SERVICE_KEY")?,
            jwt_secret: lookup("BACKEND_JWT_SECRET").unwrap_or_else(|| DEV_JWT_SECRET.into()),
        })
    }
}

/// Server configuration loaded from environment variables.
///
/// All server fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on post-shutdown cleanup in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    pub log_format: LogFormat,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3000`                  |
    /// | `CORS_ORIGINS`          | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                    |
    /// | `LOG_FORMAT`            | pretty (`json` to switch) |
    ///
    /// plus the backend variables documented on [`BackendConfig`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(lookup, "PORT", "3000")?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid {
                name: "CORS_ORIGINS",
                value: bad.clone(),
                reason: "not a valid header value".into(),
            });
        }

        let request_timeout_secs: u64 = parse_or(lookup, "REQUEST_TIMEOUT_SECS", "30")?;
        let shutdown_timeout_secs: u64 = parse_or(lookup, "SHUTDOWN_TIMEOUT_SECS", "30")?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            log_format,
            backend: BackendConfig::from_lookup(lookup)?,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        name,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn memory_mode_needs_no_backend_credentials() {
        let config = ServerConfig::from_lookup(&lookup_from(&[("BACKEND_MODE", "memory")]))
            .expect("memory config should load");

        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.backend.mode, BackendMode::Memory);
        assert_eq!(config.backend.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn hosted_mode_requires_url() {
        let result = ServerConfig::from_lookup(&lookup_from(&[]));
        assert_matches!(
            result,
            Err(ConfigError::Missing {
                name: "BACKEND_URL"
            })
        );
    }

    #[test]
    fn invalid_port_is_reported() {
        let result = ServerConfig::from_lookup(&lookup_from(&[
            ("BACKEND_MODE", "memory"),
            ("PORT", "eighty"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = ServerConfig::from_lookup(&lookup_from(&[
            ("BACKEND_MODE", "memory"),
            ("CORS_ORIGINS", "https://digitalpro.com, https://www.digitalpro.com,"),
            ("LOG_FORMAT", "json"),
        ]))
        .unwrap();
        assert_eq!(
            config.cors_origins,
            vec!["https://digitalpro.com", "https://www.digitalpro.com"]
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unusable_cors_origin_is_reported() {
        let result = ServerConfig::from_lookup(&lookup_from(&[
            ("BACKEND_MODE", "memory"),
            ("CORS_ORIGINS", "http://ok.test,bad\norigin"),
        ]));
        assert_matches!(
            result,
            Err(ConfigError::Invalid {
                name: "CORS_ORIGINS",
                ..
            })
        );
    }
}
