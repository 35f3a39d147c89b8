//! Mock Artsy API for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::artsy::{
    ArtsyApi, RawArtist, RawArtwork, RawGene, RawSearchResult, UpstreamError, XappToken,
};

/// A recorded upstream call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedArtsyCall {
    SearchArtists { query: String, token: String },
    FetchArtist { id: String, token: String },
    ListArtworks { artist_id: String, token: String },
    ListGenes { artwork_id: String, token: String },
    SimilarArtists { artist_id: String, token: String },
}

/// Failure injected into every mock operation.
#[derive(Debug, Clone, Copy)]
enum InjectedFailure {
    Status(u16),
    Parse,
}

/// Mock implementation of the ArtsyApi trait.
///
/// Provides controllable behavior for testing:
/// - Return configured search results and documents
/// - Track calls (including the token used) for assertions
/// - Simulate upstream status codes and undecodable bodies
///
/// # Example
///
/// ```rust,ignore
/// use artscope_core::testing::{MockArtsyApi, fixtures};
///
/// let api = MockArtsyApi::new();
/// api.set_search_results(vec![fixtures::search_result("4d8b92b34eb68a1b2c0003f4", "Andy Warhol")]).await;
///
/// let results = api.search_artists("warhol", &token).await?;
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockArtsyApi {
    /// Results returned by every search, in order.
    search_results: Arc<RwLock<Vec<RawSearchResult>>>,
    /// Artists by ID.
    artists: Arc<RwLock<HashMap<String, RawArtist>>>,
    /// Artworks by artist ID.
    artworks: Arc<RwLock<HashMap<String, Vec<RawArtwork>>>>,
    /// Genes by artwork ID.
    genes: Arc<RwLock<HashMap<String, Vec<RawGene>>>>,
    /// Similar artists by artist ID.
    similar: Arc<RwLock<HashMap<String, Vec<RawArtist>>>>,
    /// Recorded calls.
    calls: Arc<RwLock<Vec<RecordedArtsyCall>>>,
    /// If set, every operation fails this way.
    failure: Arc<RwLock<Option<InjectedFailure>>>,
}

impl MockArtsyApi {
    /// Create a new empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the results returned by `search_artists`.
    pub async fn set_search_results(&self, results: Vec<RawSearchResult>) {
        *self.search_results.write().await = results;
    }

    /// Add an artist retrievable by `fetch_artist`.
    pub async fn add_artist(&self, id: &str, artist: RawArtist) {
        self.artists.write().await.insert(id.to_string(), artist);
    }

    /// Set the artworks listed for an artist.
    pub async fn set_artworks(&self, artist_id: &str, artworks: Vec<RawArtwork>) {
        self.artworks
            .write()
            .await
            .insert(artist_id.to_string(), artworks);
    }

    /// Set the genes listed for an artwork.
    pub async fn set_genes(&self, artwork_id: &str, genes: Vec<RawGene>) {
        self.genes.write().await.insert(artwork_id.to_string(), genes);
    }

    /// Set the similar artists listed for an artist.
    pub async fn set_similar_artists(&self, artist_id: &str, artists: Vec<RawArtist>) {
        self.similar
            .write()
            .await
            .insert(artist_id.to_string(), artists);
    }

    /// Make every operation fail with the given upstream status.
    pub async fn set_fail_status(&self, status: u16) {
        *self.failure.write().await = Some(InjectedFailure::Status(status));
    }

    /// Make every operation fail as if Artsy sent an undecodable 200 body.
    pub async fn set_fail_parse(&self) {
        *self.failure.write().await = Some(InjectedFailure::Parse);
    }

    /// Clear any configured failure.
    pub async fn clear_fail_status(&self) {
        *self.failure.write().await = None;
    }

    // =========================================================================
    // Call Recording
    // =========================================================================

    /// Get all recorded calls.
    pub async fn recorded_calls(&self) -> Vec<RecordedArtsyCall> {
        self.calls.read().await.clone()
    }

    /// Get the number of calls performed.
    pub async fn call_count(&self) -> usize {
        self.calls.read().await.len()
    }

    async fn record(&self, call: RecordedArtsyCall) -> Result<(), UpstreamError> {
        self.calls.write().await.push(call);
        match *self.failure.read().await {
            Some(InjectedFailure::Status(status)) => Err(UpstreamError::Status(status)),
            Some(InjectedFailure::Parse) => Err(UpstreamError::Parse(
                "expected value at line 1 column 1".to_string(),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ArtsyApi for MockArtsyApi {
    async fn search_artists(
        &self,
        query: &str,
        token: &XappToken,
    ) -> Result<Vec<RawSearchResult>, UpstreamError> {
        self.record(RecordedArtsyCall::SearchArtists {
            query: query.to_string(),
            token: token.value().to_string(),
        })
        .await?;

        Ok(self.search_results.read().await.clone())
    }

    async fn fetch_artist(&self, id: &str, token: &XappToken) -> Result<RawArtist, UpstreamError> {
        self.record(RecordedArtsyCall::FetchArtist {
            id: id.to_string(),
            token: token.value().to_string(),
        })
        .await?;

        self.artists
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UpstreamError::Status(404))
    }

    async fn list_artworks(
        &self,
        artist_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawArtwork>, UpstreamError> {
        self.record(RecordedArtsyCall::ListArtworks {
            artist_id: artist_id.to_string(),
            token: token.value().to_string(),
        })
        .await?;

        Ok(self
            .artworks
            .read()
            .await
            .get(artist_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list_genes(
        &self,
        artwork_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawGene>, UpstreamError> {
        self.record(RecordedArtsyCall::ListGenes {
            artwork_id: artwork_id.to_string(),
            token: token.value().to_string(),
        })
        .await?;

        Ok(self
            .genes
            .read()
            .await
            .get(artwork_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn similar_artists(
        &self,
        artist_id: &str,
        token: &XappToken,
    ) -> Result<Vec<RawArtist>, UpstreamError> {
        self.record(RecordedArtsyCall::SimilarArtists {
            artist_id: artist_id.to_string(),
            token: token.value().to_string(),
        })
        .await?;

        Ok(self
            .similar
            .read()
            .await
            .get(artist_id)
            .cloned()
            .unwrap_or_default())
    }
}
