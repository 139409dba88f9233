use std::time::Duration;

use bluecart_core::error::CoreError;

/// Connection acquire timeout when `DB_CONNECT_TIMEOUT_SECS` is unset.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Largest accepted `DB_CONNECT_TIMEOUT_SECS`. sqlx adds the timeout to
/// `Instant::now()`, so unbounded values overflow.
pub const MAX_CONNECT_TIMEOUT_SECS: u64 = 3600;

/// Probe configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Connection URL of the database under test. May hold a password;
    /// never print it directly.
    pub database_url: String,
    /// Upper bound on establishing the connection.
    pub connect_timeout: Duration,
}

impl ProbeConfig {
    /// Load configuration through a variable lookup, usually
    /// `|key| std::env::var(key).ok()`.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `DATABASE_URL`            | yes      | --      |
    /// | `DB_CONNECT_TIMEOUT_SECS` | no       | `30`    |
    ///
    /// The timeout must lie in `1..=3600` seconds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| CoreError::Validation("DATABASE_URL must be set".into()))?;

        let connect_timeout_secs = match lookup("DB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| (1..=MAX_CONNECT_TIMEOUT_SECS).contains(secs))
                .ok_or_else(|| {
                    CoreError::Validation(format!(
                        "DB_CONNECT_TIMEOUT_SECS must be between 1 and \
                         {MAX_CONNECT_TIMEOUT_SECS}, got {raw:?}"
                    ))
                })?,
            None => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }
}
