use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub storage: Option<StorageConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            storage: StorageConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

pub const DEFAULT_TABLE: &str = "assessments";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Supabase REST endpoint used to persist submitted assessments.
#[derive(Clone)]
pub struct StorageConfig {
    pub url: String,
    pub api_key: String,
    pub table: String,
    pub timeout_secs: u64,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("table", &self.table)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StorageConfig {
    /// Returns `None` when `SUPABASE_URL` is unset so callers can fall back to a local store.
    fn from_env() -> Result<Option<Self>, ConfigError> {
        let url = match non_empty_var("SUPABASE_URL") {
            Some(url) => url,
            None => return Ok(None),
        };
        let api_key = non_empty_var("SUPABASE_KEY").ok_or(ConfigError::MissingStorageKey)?;
        let table = non_empty_var("SUPABASE_TABLE").unwrap_or_else(|| DEFAULT_TABLE.to_string());
        let timeout_secs = match non_empty_var("SUPABASE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidStorageTimeout)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Some(Self {
            url,
            api_key,
            table,
            timeout_secs,
        }))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingStorageKey,
    InvalidStorageTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingStorageKey => {
                write!(f, "SUPABASE_KEY must be set when SUPABASE_URL is configured")
            }
            ConfigError::InvalidStorageTimeout => {
                write!(f, "SUPABASE_TIMEOUT_SECS must be a whole number of seconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::MissingStorageKey
            | ConfigError::InvalidStorageTimeout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "SUPABASE_URL",
            "SUPABASE_KEY",
            "SUPABASE_TABLE",
            "SUPABASE_TIMEOUT_SECS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert!(config.storage.is_none());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn storage_reads_supabase_settings() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        env::set_var("SUPABASE_KEY", "service-key");
        env::set_var("SUPABASE_TIMEOUT_SECS", "3");
        let config = AppConfig::load().expect("config loads");
        let storage = config.storage.expect("storage configured");
        assert_eq!(storage.url, "https://project.supabase.co");
        assert_eq!(storage.table, DEFAULT_TABLE);
        assert_eq!(storage.timeout_secs, 3);
        assert!(!format!("{storage:?}").contains("service-key"));
        reset_env();
    }

    #[test]
    fn storage_url_without_key_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("SUPABASE_URL", "https://project.supabase.co");
        let err = AppConfig::load().expect_err("key is required");
        assert!(matches!(err, ConfigError::MissingStorageKey));
        reset_env();
    }
}
