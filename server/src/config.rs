//! Server configuration parsed from environment variables.
//!
//! The hosted lead table is the only external dependency, and its project URL
//! and anon key have no built-in values: startup fails when either is absent.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LEADS_TABLE: &str = "leads";
pub const DEFAULT_LEADS_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LEADS_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Connection settings for the hosted `leads` table.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    pub anon_key: String,
    pub table: String,
    pub timeouts: RequestTimeouts,
}

// The anon key stays out of logs.
impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("table", &self.table)
            .field("timeouts", &self.timeouts)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin allowed to call `/api/*` cross-site. `None` keeps the API same-origin.
    pub cors_origin: Option<String>,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `SUPABASE_URL`: project base URL (`http://` or `https://`)
    /// - `SUPABASE_ANON_KEY`: anon API key
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `LEADS_TABLE`: default `leads`
    /// - `LEADS_REQUEST_TIMEOUT_SECS`: default 15
    /// - `LEADS_CONNECT_TIMEOUT_SECS`: default 5
    /// - `CORS_ALLOW_ORIGIN`: unset by default
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required value is missing or a value
    /// cannot be used.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let url = non_empty("SUPABASE_URL").ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::Invalid { var: "SUPABASE_URL", reason: format!("not an http(s) URL: {url}") });
        }
        let anon_key = non_empty("SUPABASE_ANON_KEY").ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };

        let table = non_empty("LEADS_TABLE").unwrap_or_else(|| DEFAULT_LEADS_TABLE.to_owned());
        if !table.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ConfigError::Invalid { var: "LEADS_TABLE", reason: format!("unexpected characters in {table}") });
        }

        let timeouts = RequestTimeouts {
            request_secs: parse_u64_or(
                non_empty("LEADS_REQUEST_TIMEOUT_SECS").as_deref(),
                DEFAULT_LEADS_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_u64_or(
                non_empty("LEADS_CONNECT_TIMEOUT_SECS").as_deref(),
                DEFAULT_LEADS_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self {
            port,
            cors_origin: non_empty("CORS_ALLOW_ORIGIN"),
            backend: BackendConfig { url: url.trim_end_matches('/').to_owned(), anon_key, table, timeouts },
        })
    }
}

fn parse_u64_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.parse::<u64>().ok()).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
