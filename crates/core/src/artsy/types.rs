//! Upstream Artsy payloads and the simplified shapes served to the front end.
//!
//! Upstream structs are lenient: every field is optional so that missing or
//! `null` values never fail deserialization of the surrounding document.

use serde::{Deserialize, Serialize};

// ============================================================================
// Upstream (HAL) types
// ============================================================================

/// A HAL link object (`{"href": "..."}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Link {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// The `_links` block attached to Artsy resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Links {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_link: Option<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Link>,
}

impl Links {
    pub fn self_href(&self) -> Option<&str> {
        self.self_link.as_ref().and_then(|l| l.href.as_deref())
    }

    pub fn thumbnail_href(&self) -> Option<&str> {
        self.thumbnail.as_ref().and_then(|l| l.href.as_deref())
    }
}

/// One entry of `_embedded.results` from the search endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawSearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// An artist document, as returned by `/artists/{id}` and `/artists?similar_to_artist_id=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawArtist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deathday: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// An artwork document from `/artworks?artist_id=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawArtwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// A gene (category) document from `/genes?artwork_id=`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawGene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

/// Collection envelope. Artsy nests list payloads under `_embedded.<kind>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedPage {
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<EmbeddedItems>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedItems {
    #[serde(default)]
    pub results: Vec<RawSearchResult>,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    #[serde(default)]
    pub artworks: Vec<RawArtwork>,
    #[serde(default)]
    pub genes: Vec<RawGene>,
}

impl EmbeddedPage {
    pub fn into_items(self) -> EmbeddedItems {
        self.embedded.unwrap_or_default()
    }
}

// ============================================================================
// Front-end types
// ============================================================================

/// One artist row in the search results list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}

/// Artist detail card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistDetail {
    pub name: String,
    pub birthday: String,
    pub deathday: String,
    pub nationality: String,
    pub biography: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtworkSummary {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneSummary {
    pub name: String,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: String,
}
