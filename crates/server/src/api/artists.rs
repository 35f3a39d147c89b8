//! Artsy proxy handlers.
//!
//! Every handler follows the same sequence: validate the query parameter,
//! obtain a token, make one upstream call, translate. Failures never expose
//! upstream detail; the JSON body is always `{"error": <fixed message>}`.

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Query, State},
    http::{request::Parts, StatusCode},
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use artscope_core::artsy::translate::{
    to_artist_detail, to_artist_summary, to_artwork_summary, to_gene_summary, to_similar_artist,
};
use artscope_core::{
    ArtistDetail, ArtistSummary, ArtworkSummary, GeneSummary, UpstreamError, XappToken,
};

use crate::state::AppState;

pub const EMPTY_QUERY: &str = "Empty query";
pub const MISSING_ARTIST_ID: &str = "Missing artist id";
pub const MISSING_ARTWORK_ID: &str = "Missing artwork id";
pub const TOKEN_UNAVAILABLE: &str = "Unable to retrieve Artsy token";
pub const SEARCH_FAILED: &str = "Search request failed";
pub const ARTIST_FAILED: &str = "Failed to fetch artist details";
pub const ARTWORKS_FAILED: &str = "Failed to fetch artworks";
pub const GENES_FAILED: &str = "Failed to fetch genes";
pub const SIMILAR_FAILED: &str = "Failed to fetch similar artists";

// ============================================================================
// Request/Response types
// ============================================================================

/// Query string pairs in request order.
///
/// Repeated keys resolve to the first value and an unparseable query string
/// counts as empty, so parameter problems always end in the handler's own
/// JSON 400.
#[derive(Debug, Default)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// First value for `key`, or `""` when absent.
    pub fn first(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(e) => {
                debug!("Ignoring malformed query string: {}", e);
                Ok(Self::default())
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub artists: Vec<ArtistSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub artist: ArtistDetail,
}

#[derive(Debug, Serialize)]
pub struct ArtworksResponse {
    pub artworks: Vec<ArtworkSummary>,
}

#[derive(Debug, Serialize)]
pub struct GenesResponse {
    pub genes: Vec<GeneSummary>,
}

#[derive(Debug, Serialize)]
pub struct SimilarArtistsResponse {
    #[serde(rename = "similarArtists")]
    pub similar_artists: Vec<ArtistSummary>,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn require(value: &str, message: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        Err(api_error(StatusCode::BAD_REQUEST, message))
    } else {
        Ok(())
    }
}

/// All token failures collapse to the same 500 response.
async fn acquire_token(state: &AppState) -> Result<XappToken, ApiError> {
    state.token_provider().acquire_token().await.map_err(|e| {
        warn!("Unable to obtain Artsy token: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, TOKEN_UNAVAILABLE)
    })
}

/// Forward the upstream status; transport and decode failures become 502.
fn upstream_error(err: UpstreamError, message: &str) -> ApiError {
    let status = match err {
        UpstreamError::Status(code) => {
            StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        UpstreamError::Transport(_) | UpstreamError::Parse(_) => StatusCode::BAD_GATEWAY,
    };
    api_error(status, message)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /search?q=
///
/// Search Artsy for artists.
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = params.first("q");
    require(query, EMPTY_QUERY)?;
    let token = acquire_token(&state).await?;

    let results = state
        .artsy()
        .search_artists(query, &token)
        .await
        .map_err(|e| upstream_error(e, SEARCH_FAILED))?;

    debug!("Search '{}' returned {} artists", query, results.len());
    Ok(Json(SearchResponse {
        artists: results.iter().map(to_artist_summary).collect(),
    }))
}

/// GET /artist?id=
///
/// Get artist details by Artsy ID.
pub async fn artist_details(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<ArtistResponse>, ApiError> {
    let id = params.first("id");
    require(id, MISSING_ARTIST_ID)?;
    let token = acquire_token(&state).await?;

    let artist = state
        .artsy()
        .fetch_artist(id, &token)
        .await
        .map_err(|e| upstream_error(e, ARTIST_FAILED))?;

    Ok(Json(ArtistResponse {
        artist: to_artist_detail(&artist),
    }))
}

/// GET /artworks?artist_id=
///
/// List artworks by an artist.
pub async fn artworks(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<ArtworksResponse>, ApiError> {
    let artist_id = params.first("artist_id");
    require(artist_id, MISSING_ARTIST_ID)?;
    let token = acquire_token(&state).await?;

    let artworks = state
        .artsy()
        .list_artworks(artist_id, &token)
        .await
        .map_err(|e| upstream_error(e, ARTWORKS_FAILED))?;

    Ok(Json(ArtworksResponse {
        artworks: artworks.iter().map(to_artwork_summary).collect(),
    }))
}

/// GET /genes?artwork_id=
///
/// List the genes (categories) of an artwork.
pub async fn genes(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<GenesResponse>, ApiError> {
    let artwork_id = params.first("artwork_id");
    require(artwork_id, MISSING_ARTWORK_ID)?;
    let token = acquire_token(&state).await?;

    let genes = state
        .artsy()
        .list_genes(artwork_id, &token)
        .await
        .map_err(|e| upstream_error(e, GENES_FAILED))?;

    Ok(Json(GenesResponse {
        genes: genes.iter().map(to_gene_summary).collect(),
    }))
}

/// GET /similar-artists?artist_id=
pub async fn similar_artists(
    State(state): State<Arc<AppState>>,
    params: QueryParams,
) -> Result<Json<SimilarArtistsResponse>, ApiError> {
    let artist_id = params.first("artist_id");
    require(artist_id, MISSING_ARTIST_ID)?;
    let token = acquire_token(&state).await?;

    let artists = state
        .artsy()
        .similar_artists(artist_id, &token)
        .await
        .map_err(|e| upstream_error(e, SIMILAR_FAILED))?;

    Ok(Json(SimilarArtistsResponse {
        similar_artists: artists.iter().map(to_similar_artist).collect(),
    }))
}
