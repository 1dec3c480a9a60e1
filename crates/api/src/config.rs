use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use maraton_db::PoolSettings;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Set when running in a hosted production environment.
    pub production: bool,
    /// Root of the upload tree, served at `/uploads` (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Built front-end bundle; its `index.html` is the SPA fallback (default: `dist`).
    pub static_dir: PathBuf,
    /// Password accepted by `/api/admin/login`. Admin login always fails when unset.
    pub admin_password: Option<String>,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `60`).
    pub request_timeout_secs: u64,
    /// Maximum request body size for uploads (default: 200 MiB).
    pub max_upload_bytes: usize,
    /// Pool size (default: `10`).
    pub db_max_connections: u32,
    /// Connection recycle age in seconds (default: `280`).
    pub db_recycle_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `HOST`                 | `0.0.0.0`   |
    /// | `PORT`                 | `5000`      |
    /// | `RENDER`/`PRODUCTION`  | unset       |
    /// | `UPLOAD_DIR`           | `uploads`   |
    /// | `STATIC_DIR`           | `dist`      |
    /// | `ADMIN_PASSWORD`       | unset       |
    /// | `CORS_ORIGINS`         | `*`         |
    /// | `REQUEST_TIMEOUT_SECS` | `60`        |
    /// | `MAX_UPLOAD_BYTES`     | `209715200` |
    /// | `DB_MAX_CONNECTIONS`   | `10`        |
    /// | `DB_RECYCLE_SECS`      | `280`       |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// Panics on unparsable numeric values so misconfiguration fails at startup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let production = lookup("RENDER").is_some()
            || lookup("PRODUCTION").is_some_and(|v| is_truthy(&v));

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "PORT", 5000),
            production,
            upload_dir: lookup("UPLOAD_DIR").unwrap_or_else(|| "uploads".into()).into(),
            static_dir: lookup("STATIC_DIR").unwrap_or_else(|| "dist".into()).into(),
            admin_password: lookup("ADMIN_PASSWORD").filter(|p| !p.is_empty()),
            cors_origins,
            request_timeout_secs: parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 60),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 200 * 1024 * 1024),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10),
            db_recycle_secs: parse_or(&lookup, "DB_RECYCLE_SECS", 280),
        }
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            max_lifetime: Duration::from_secs(self.db_recycle_secs),
            ..PoolSettings::default()
        }
    }

    /// Whether CORS should accept any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number, got '{raw}': {e}")),
        None => default,
    }
}
