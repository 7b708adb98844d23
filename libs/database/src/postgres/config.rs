use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse, env_required};

/// Pool settings for the planner's PostgreSQL connection.
///
/// Every timeout defaults to 8 seconds; `sqlx_logging` echoes each statement
/// at `info`.
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(8);

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 100,
            min_connections: 5,
            connect_timeout: DEFAULT_TIMEOUT,
            acquire_timeout: DEFAULT_TIMEOUT,
            idle_timeout: DEFAULT_TIMEOUT,
            max_lifetime: DEFAULT_TIMEOUT,
            sqlx_logging: true,
        }
    }

    /// Small pools for tests and one-off tools
    pub fn with_pool_size(url: impl Into<String>, max: u32, min: u32) -> Self {
        Self {
            max_connections: max,
            min_connections: min,
            ..Self::new(url)
        }
    }

    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Info);
        options
    }
}

#[cfg(feature = "config")]
fn env_secs(key: &str) -> Result<Duration, ConfigError> {
    env_parse(key, "8").map(Duration::from_secs)
}

/// Reads `DATABASE_URL` (required) and the optional `DB_*` pool variables:
/// `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`, `DB_CONNECT_TIMEOUT_SECS`,
/// `DB_ACQUIRE_TIMEOUT_SECS`, `DB_IDLE_TIMEOUT_SECS`, `DB_MAX_LIFETIME_SECS`
/// and `DB_SQLX_LOGGING`.
#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parse("DB_MAX_CONNECTIONS", "100")?,
            min_connections: env_parse("DB_MIN_CONNECTIONS", "5")?,
            connect_timeout: env_secs("DB_CONNECT_TIMEOUT_SECS")?,
            acquire_timeout: env_secs("DB_ACQUIRE_TIMEOUT_SECS")?,
            idle_timeout: env_secs("DB_IDLE_TIMEOUT_SECS")?,
            max_lifetime: env_secs("DB_MAX_LIFETIME_SECS")?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", "true")?,
        })
    }
}
