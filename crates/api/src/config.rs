use std::path::PathBuf;

use reviewgate_core::feedback::CategorySet;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
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
    /// PostgreSQL URL. When unset the JSON file store in `data_dir` is used.
    pub database_url: Option<String>,
    /// Directory holding `businesses.json`, `interactions.json`, `submissions.json`.
    pub data_dir: PathBuf,
    /// Static assets; `/review` serves `index.html` from here.
    pub public_dir: PathBuf,
    /// Categories the feedback form offers. Empty accepts any category.
    pub feedback_categories: CategorySet,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | unset (JSON store)         |
    /// | `DATA_DIR`             | `./data`                   |
    /// | `PUBLIC_DIR`           | `./public`                 |
    /// | `FEEDBACK_CATEGORIES`  | empty (any category)       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".into()));
        let public_dir =
            PathBuf::from(std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "./public".into()));

        let feedback_categories = CategorySet::from_csv(
            &std::env::var("FEEDBACK_CATEGORIES").unwrap_or_default(),
        );

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            data_dir,
            public_dir,
            feedback_categories,
        }
    }
}
