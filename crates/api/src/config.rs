use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

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
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port: u16 = lookup("PORT")
            .unwrap_or_else(|| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = lookup("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Database connection settings.
///
/// `DATABASE_URL` wins when set. Otherwise the connection is assembled from
/// the individual `DB_*` variables, which avoids URL-escaping passwords.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "<set>"))
            .field("name", &self.name)
            .field("user", &self.user)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish_non_exhaustive()
    }
}

impl DatabaseConfig {
    /// Load database settings from environment variables with defaults.
    ///
    /// | Env Var              | Default      |
    /// |----------------------|--------------|
    /// | `DATABASE_URL`       | unset        |
    /// | `DB_NAME`            | `cms_db`     |
    /// | `DB_USER`            | `postgres`   |
    /// | `DB_PASSWORD`        | empty        |
    /// | `DB_HOST`            | `localhost`  |
    /// | `DB_PORT`            | `5432`       |
    /// | `DB_MAX_CONNECTIONS` | `20`         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            url: lookup("DATABASE_URL").filter(|s| !s.trim().is_empty()),
            name: lookup("DB_NAME").unwrap_or_else(|| "cms_db".into()),
            user: lookup("DB_USER").unwrap_or_else(|| "postgres".into()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            host: lookup("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: lookup("DB_PORT")
                .unwrap_or_else(|| "5432".into())
                .parse()
                .expect("DB_PORT must be a valid u16"),
            max_connections: lookup("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|| "20".into())
                .parse()
                .expect("DB_MAX_CONNECTIONS must be a valid u32"),
        }
    }

    /// Connection options for the pool.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.name);
        Ok(if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        })
    }
}
