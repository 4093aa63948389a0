use std::path::PathBuf;

use staykit_core::year_copy::CopyConflictPolicy;

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
    /// How long to wait for background tasks on shutdown (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Policy for year copies when `policy` is omitted from the request.
    pub default_copy_policy: CopyConflictPolicy,
    /// Directory for JSON season files. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Editor sessions idle longer than this are dropped (default: `1800`).
    pub session_idle_secs: u64,
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
    /// | `DEFAULT_COPY_POLICY`  | `skip_existing`            |
    /// | `SEASON_DATA_DIR`      | unset (in-memory store)    |
    /// | `SESSION_IDLE_SECS`    | `1800`                     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let default_copy_policy: CopyConflictPolicy = std::env::var("DEFAULT_COPY_POLICY")
            .unwrap_or_else(|_| "skip_existing".into())
            .parse()
            .expect("DEFAULT_COPY_POLICY must be skip_existing or overwrite");

        let data_dir = std::env::var("SEASON_DATA_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let session_idle_secs: u64 = std::env::var("SESSION_IDLE_SECS")
            .unwrap_or_else(|_| "1800".into())
            .parse()
            .expect("SESSION_IDLE_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            default_copy_policy,
            data_dir,
            session_idle_secs,
        }
    }
}
