//! Artsy REST API client.
//!
//! Every call is a single authenticated GET. Anything other than 200 OK is
//! reported as `UpstreamError::Status` carrying the upstream code; the
//! upstream body is dropped.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ArtsyConfig;
use crate::metrics::{UPSTREAM_DURATION, UPSTREAM_REQUESTS};

use super::token::XappToken;
use super::types::{EmbeddedPage, RawArtist, RawArtwork, RawGene, RawSearchResult};
use super::{ArtsyApi, UpstreamError};

/// Header carrying the xapp token on every API request.
pub const XAPP_TOKEN_HEADER: &str = "X-Xapp-Token";

/// Maximum number of items requested from list endpoints.
pub const PAGE_SIZE: &str = "10";

/// Build the HTTP client shared by the token provider and the API client.
pub fn build_http_client(config: &ArtsyConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs as u64))
        .build()
}

/// Artsy API client.
pub struct ArtsyClient {
    client: Client,
    base_url: String,
}

impl ArtsyClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, &str)],
        token: &XappToken,
    ) -> Result<T, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        let start = Instant::now();

        let result = self.send(&url, query, token).await;

        UPSTREAM_DURATION
            .with_label_values(&[endpoint])
            .observe(start.elapsed().as_secs_f64());
        let outcome = match &result {
            Ok(_) => "ok",
            Err(UpstreamError::Status(_)) => "status",
            Err(UpstreamError::Transport(_)) => "transport",
            Err(UpstreamError::Parse(_)) => "parse",
        };
        UPSTREAM_REQUESTS
            .with_label_values(&[endpoint, outcome])
            .inc();

        if let Err(e) = &result {
            warn!("Artsy {} request failed: {}", endpoint, e);
        }
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        token: &XappToken,
    ) -> Result<T, UpstreamError> {
        let response = self
            .client
            .get(url)
            .header(XAPP_TOKEN_HEADER, token.value())
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ArtsyApi for ArtsyClient {
    async fn search_artists(
        &self,
        query: &str,
        token: &XappToken,
    ) -> Result<Vec<RawSearchResult>, UpstreamError> {
        debug!("Artsy search: q='{}'", query);

        let page: EmbeddedPage = self
            .get_json(
                "search",
                "/search",
                &[("q", query), ("size", PAGE_SIZE), ("type", "artist")],
                token,
            )
            .await?;

        Ok(page.into_items().results)
    }

    async fn fetch_artist(&self, id: &str, token: &XappToken) -> Result<RawArtist, UpstreamError> {
        debug!("Artsy get artist: id={}", id);

        let path = format!("/artists/{}", urlencoding::encode(id));
        self.get_json("artist", &path, &[], token).await
    }

    async fn list_artworks(
        &self,
        artist_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawArtwork>, UpstreamError> {
        debug!("Artsy artworks: artist_id={}", artist_id);

        let page: EmbeddedPage = self
            .get_json(
                "artworks",
                "/artworks",
                &[("artist_id", artist_id), ("size", PAGE_SIZE)],
                token,
            )
            .await?;

        Ok(page.into_items().artworks)
    }

    async fn list_genes(
        &self,
        artwork_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawGene>, UpstreamError> {
        debug!("Artsy genes: artwork_id={}", artwork_id);

        let page: EmbeddedPage = self
            .get_json(
                "genes",
                "/genes",
                &[("artwork_id", artwork_id), ("size", PAGE_SIZE)],
                token,
            )
            .await?;

        Ok(page.into_items().genes)
    }

    async fn similar_artists(
        &self,
        artist_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawArtist>, UpstreamError> {
        debug!("Artsy similar artists: artist_id={}", artist_id);

        let page: EmbeddedPage = self
            .get_json(
                "similar_artists",
                "/artists",
                &[("similar_to_artist_id", artist_id)],
                token,
            )
            .await?;

        Ok(page.into_items().artists)
    }
}
