//! Artsy API integration.
//!
//! This module provides the xapp token exchange, the REST client used for
//! search and artist lookups, and the translation from Artsy's HAL documents
//! to the shapes served to the browser.

mod client;
mod token;
pub mod translate;
mod types;

pub use client::{build_http_client, ArtsyClient, PAGE_SIZE, XAPP_TOKEN_HEADER};
pub use token::{CachedTokenProvider, TokenError, TokenProvider, XappToken, XappTokenProvider};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from Artsy API calls made with a valid token.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// API answered with a status other than 200 OK.
    #[error("Artsy API returned status {0}")]
    Status(u16),

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// 200 response with a body that could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Read operations against the Artsy API.
///
/// Implemented by `ArtsyClient` and by `testing::MockArtsyApi`.
#[async_trait]
pub trait ArtsyApi: Send + Sync {
    /// Search for artists, at most `PAGE_SIZE` results in upstream order.
    async fn search_artists(
        &self,
        query: &str,
        token: &XappToken,
    ) -> Result<Vec<RawSearchResult>, UpstreamError>;

    /// Get a single artist by Artsy ID.
    async fn fetch_artist(&self, id: &str, token: &XappToken) -> Result<RawArtist, UpstreamError>;

    /// List artworks by an artist.
    async fn list_artworks(
        &self,
        artist_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawArtwork>, UpstreamError>;

    /// List genes (categories) of an artwork.
    async fn list_genes(
        &self,
        artwork_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawGene>, UpstreamError>;

    /// List artists similar to the given one.
    async fn similar_artists(
        &self,
        artist_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawArtist>, UpstreamError>;
}
