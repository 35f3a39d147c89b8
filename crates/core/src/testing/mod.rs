//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the Artsy traits so the HTTP
//! layer can be exercised without network access.
//!
//! # Example
//!
//! ```rust,ignore
//! use artscope_core::testing::{MockArtsyApi, MockTokenProvider, fixtures};
//!
//! let tokens = MockTokenProvider::with_token("T1");
//! let api = MockArtsyApi::new();
//! api.set_search_results(vec![fixtures::search_result("abc", "Andy Warhol")]).await;
//!
//! // Use in AppState...
//! ```

mod mock_artsy;
mod mock_token_provider;

pub use mock_artsy::{MockArtsyApi, RecordedArtsyCall};
pub use mock_token_provider::MockTokenProvider;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::artsy::{Link, Links, RawArtist, RawArtwork, RawGene, RawSearchResult};

    /// Base of the self links Artsy puts on artist resources.
    pub const ARTIST_URL_PREFIX: &str = "https://api.artsy.net/api/artists/";

    fn link(href: String) -> Option<Link> {
        Some(Link { href: Some(href) })
    }

    fn thumbnail_for(id: &str) -> String {
        format!("https://d32dm0rphc51dk.cloudfront.net/{}/square.jpg", id)
    }

    /// Create a search result pointing at the given artist.
    pub fn search_result(artist_id: &str, title: &str) -> RawSearchResult {
        RawSearchResult {
            title: Some(title.to_string()),
            links: Some(Links {
                self_link: link(format!("{}{}", ARTIST_URL_PREFIX, artist_id)),
                thumbnail: link(thumbnail_for(artist_id)),
            }),
        }
    }

    /// Create a fully populated artist document.
    pub fn artist(id: &str, name: &str) -> RawArtist {
        RawArtist {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            birthday: Some("1928".to_string()),
            deathday: Some("1987".to_string()),
            nationality: Some("American".to_string()),
            biography: Some(format!("{} was an artist.", name)),
            links: Some(Links {
                self_link: link(format!("{}{}", ARTIST_URL_PREFIX, id)),
                thumbnail: link(thumbnail_for(id)),
            }),
        }
    }

    /// Create an artwork document.
    pub fn artwork(id: &str, title: &str, date: &str) -> RawArtwork {
        RawArtwork {
            id: Some(id.to_string()),
            title: Some(title.to_string()),
            date: Some(date.to_string()),
            links: Some(Links {
                self_link: None,
                thumbnail: link(thumbnail_for(id)),
            }),
        }
    }

    /// Create a gene document.
    pub fn gene(name: &str) -> RawGene {
        RawGene {
            name: Some(name.to_string()),
            links: Some(Links {
                self_link: None,
                thumbnail: link(thumbnail_for(&name.to_lowercase().replace(' ', "-"))),
            }),
        }
    }
}
