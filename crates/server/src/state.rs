use std::sync::Arc;
use artscope_core::{ArtsyApi, Config, SanitizedConfig, TokenProvider};

/// Shared application state
pub struct AppState {
    config: Config,
    tokens: Arc<dyn TokenProvider>,
    artsy: Arc<dyn ArtsyApi>,
}

impl AppState {
    pub fn new(config: Config, tokens: Arc<dyn TokenProvider>, artsy: Arc<dyn ArtsyApi>) -> Self {
        Self {
            config,
            tokens,
            artsy,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sanitized_config(&self) -> SanitizedConfig {
        SanitizedConfig::from(&self.config)
    }

    pub fn token_provider(&self) -> &dyn TokenProvider {
        self.tokens.as_ref()
    }

    pub fn artsy(&self) -> &dyn ArtsyApi {
        self.artsy.as_ref()
    }
}
