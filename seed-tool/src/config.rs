//! Seeding configuration.
//!
//! The backend URL comes from the command line, everything else from the
//! environment:
//! - `LLIBRES_USER` / `LLIBRES_PASSWORD`: basic-auth credentials, only used
//!   when both are set
//! - `CI`: when set, no confirmation is asked
//! - `SEED_TIMEOUT_SECS`: request timeout (default: 30)

use catalog_core::utils::text::is_blank;
use std::fmt;
use url::Url;

pub const USER_VAR: &str = "LLIBRES_USER";
pub const PASSWORD_VAR: &str = "LLIBRES_PASSWORD";
pub const CI_VAR: &str = "CI";
pub const TIMEOUT_VAR: &str = "SEED_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Both parts must be non-blank, otherwise requests go unauthenticated.
    pub fn from_parts(username: Option<String>, password: Option<String>) -> Option<Self> {
        if is_blank(username.as_deref()) || is_blank(password.as_deref()) {
            return None;
        }
        Some(Self {
            username: username?,
            password: password?,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub base_url: Url,
    pub credentials: Option<Credentials>,
    pub timeout_secs: u64,
    /// Running unattended; the confirmation prompt is skipped.
    pub ci: bool,
}

impl SeedConfig {
    /// Configuration for `base_url` with no credentials and default timeout.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl(base_url.to_string(), e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidUrl(
                base_url.to_string(),
                "not an HTTP base URL".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ci: false,
        })
    }

    pub fn from_env(base_url: &str) -> Result<Self, ConfigError> {
        let mut config = Self::new(base_url)?;

        config.credentials =
            Credentials::from_parts(std::env::var(USER_VAR).ok(), std::env::var(PASSWORD_VAR).ok());
        config.ci = !is_blank(std::env::var(CI_VAR).ok().as_deref());
        if let Ok(raw) = std::env::var(TIMEOUT_VAR) {
            config.timeout_secs = raw
                .parse()
                .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
        }

        Ok(config)
    }

    /// URL of `path` on the backend. The path of the base URL is replaced,
    /// so `http://host:8080/anything` and `http://host:8080` are equivalent.
    pub fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL '{0}': {1}")]
    InvalidUrl(String, String),
    #[error("invalid SEED_TIMEOUT_SECS value '{0}'")]
    InvalidTimeout(String),
}
