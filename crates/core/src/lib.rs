pub mod artsy;
pub mod config;
pub mod metrics;
pub mod testing;

pub use artsy::{
    build_http_client, ArtistDetail, ArtistSummary, ArtsyApi, ArtsyClient, ArtworkSummary,
    CachedTokenProvider, GeneSummary, RawArtist, RawArtwork, RawGene, RawSearchResult,
    TokenError, TokenProvider, UpstreamError, XappToken, XappTokenProvider,
};
pub use config::{
    load_config, load_config_from_str, validate_config, ArtsyConfig, Config, ConfigError,
    Credentials, FrontendConfig, SanitizedConfig, ServerConfig,
};
