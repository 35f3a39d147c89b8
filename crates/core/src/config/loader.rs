use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Prefix for environment overrides, e.g. `ARTSCOPE_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "ARTSCOPE_";

/// Environment variables carrying the Artsy credentials.
pub const CLIENT_ID_ENV: &str = "ARTSY_CLIENT_ID";
pub const CLIENT_SECRET_ENV: &str = "ARTSY_CLIENT_SECRET";

/// Credential variables and the keys they set, lowest precedence first.
///
/// Read verbatim: figment would otherwise turn `1234` into an integer.
const CREDENTIAL_VARS: [(&str, &str); 4] = [
    ("ARTSCOPE_ARTSY__CLIENT_ID", "artsy.client_id"),
    ("ARTSCOPE_ARTSY__CLIENT_SECRET", "artsy.client_secret"),
    (CLIENT_ID_ENV, "artsy.client_id"),
    (CLIENT_SECRET_ENV, "artsy.client_secret"),
];

/// Load configuration from an optional TOML file with environment variable overrides.
///
/// Precedence (lowest first): built-in defaults, the TOML file,
/// `ARTSCOPE_*` variables, then `ARTSY_CLIENT_ID` / `ARTSY_CLIENT_SECRET`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut figment = Figment::new();

    if let Some(path) = path {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(
        Env::prefixed(ENV_PREFIX)
            .ignore(&["ARTSY__CLIENT_ID", "ARTSY__CLIENT_SECRET"])
            .split("__"),
    );

    for (var, key) in CREDENTIAL_VARS {
        if let Ok(value) = std::env::var(var) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }

    figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}
