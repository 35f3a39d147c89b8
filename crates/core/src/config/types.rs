use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub artsy: ArtsyConfig,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Artsy API configuration.
///
/// The credentials normally come from `ARTSY_CLIENT_ID` / `ARTSY_CLIENT_SECRET`.
/// Missing credentials are not a configuration error: the token exchange
/// fails at request time instead.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtsyConfig {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    /// API root, without trailing slash (default: https://api.artsy.net/api).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Timeout applied to every outbound request, in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
    /// Reuse xapp tokens until they expire instead of exchanging per request
    #[serde(default)]
    pub cache_token: bool,
}

impl Default for ArtsyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            cache_token: false,
        }
    }
}

impl ArtsyConfig {
    /// Credentials pair bound into the token provider at construction.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.artsy.net/api".to_string()
}

fn default_timeout() -> u32 {
    30
}

/// Client id/secret pair used for the xapp token exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Front-end static files configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FrontendConfig {
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
        }
    }
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub artsy: SanitizedArtsyConfig,
    pub frontend: FrontendConfig,
}

/// Sanitized Artsy config (credentials hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedArtsyConfig {
    pub base_url: String,
    pub client_id_configured: bool,
    pub client_secret_configured: bool,
    pub timeout_secs: u32,
    pub cache_token: bool,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            artsy: SanitizedArtsyConfig {
                base_url: config.artsy.base_url.clone(),
                client_id_configured: !config.artsy.client_id.is_empty(),
                client_secret_configured: !config.artsy.client_secret.is_empty(),
                timeout_secs: config.artsy.timeout_secs,
                cache_token: config.artsy.cache_token,
            },
            frontend: config.frontend.clone(),
        }
    }
}
