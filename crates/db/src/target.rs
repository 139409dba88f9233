//! Password-free description of the database a connection URL points at.

use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// URL schemes accepted for PostgreSQL connections.
const SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

/// Where a connection URL points, without its credentials.
///
/// Safe to print or log: the password is dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionTarget {
    pub host: String,
    pub port: u16,
    pub database: Option<String>,
    pub user: String,
}

impl ConnectionTarget {
    /// Parse a `postgres://` or `postgresql://` connection URL.
    ///
    /// Parts missing from the URL fall back to the libpq defaults that
    /// `PgConnectOptions` applies (`PGHOST`, `PGUSER`, ...).
    pub fn parse(database_url: &str) -> Result<Self, sqlx::Error> {
        let has_scheme = SCHEMES.iter().any(|scheme| {
            database_url
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });
        if !has_scheme {
            return Err(sqlx::Error::Configuration(
                "database URL must start with postgres:// or postgresql://".into(),
            ));
        }

        let options: PgConnectOptions = database_url.parse()?;

        Ok(Self {
            host: options.get_host().to_string(),
            port: options.get_port(),
            database: options.get_database().map(str::to_string),
            user: options.get_username().to_string(),
        })
    }

    /// Database name, or `"(default)"` when the URL names none.
    pub fn database_label(&self) -> &str {
        self.database.as_deref().unwrap_or("(default)")
    }
}

impl fmt::Display for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{}:{}/{}",
            self.user,
            self.host,
            self.port,
            self.database_label()
        )
    }
}
