//! Pure projections from upstream documents to front-end shapes.
//!
//! None of these functions can fail: absent fields become empty strings.

use super::types::{
    ArtistDetail, ArtistSummary, ArtworkSummary, GeneSummary, Links, RawArtist, RawArtwork,
    RawGene, RawSearchResult,
};

/// Last path segment of a resource URL (`.../artists/4d8b...` -> `4d8b...`).
pub fn id_from_href(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or_default()
}

fn self_id(links: Option<&Links>) -> String {
    links
        .and_then(Links::self_href)
        .map(id_from_href)
        .unwrap_or_default()
        .to_string()
}

fn thumbnail(links: Option<&Links>) -> String {
    links
        .and_then(Links::thumbnail_href)
        .unwrap_or_default()
        .to_string()
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn to_artist_summary(result: &RawSearchResult) -> ArtistSummary {
    ArtistSummary {
        id: self_id(result.links.as_ref()),
        name: text(&result.title),
        thumbnail_url: thumbnail(result.links.as_ref()),
    }
}

pub fn to_artist_detail(artist: &RawArtist) -> ArtistDetail {
    ArtistDetail {
        name: text(&artist.name),
        birthday: text(&artist.birthday),
        deathday: text(&artist.deathday),
        nationality: text(&artist.nationality),
        biography: text(&artist.biography),
    }
}

/// Artist documents carry their own `id`; the self link is only a fallback.
pub fn to_similar_artist(artist: &RawArtist) -> ArtistSummary {
    let id = match artist.id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => self_id(artist.links.as_ref()),
    };

    ArtistSummary {
        id,
        name: text(&artist.name),
        thumbnail_url: thumbnail(artist.links.as_ref()),
    }
}

pub fn to_artwork_summary(artwork: &RawArtwork) -> ArtworkSummary {
    ArtworkSummary {
        id: text(&artwork.id),
        title: text(&artwork.title),
        date: text(&artwork.date),
        thumbnail_url: thumbnail(artwork.links.as_ref()),
    }
}

pub fn to_gene_summary(gene: &RawGene) -> GeneSummary {
    GeneSummary {
        name: text(&gene.name),
        thumbnail_url: thumbnail(gene.links.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artsy::types::Link;
    use serde_json::json;

    fn links(self_href: Option<&str>, thumb: Option<&str>) -> Option<Links> {
        Some(Links {
            self_link: self_href.map(|h| Link {
                href: Some(h.to_string()),
            }),
            thumbnail: thumb.map(|h| Link {
                href: Some(h.to_string()),
            }),
        })
    }

    #[test]
    fn test_id_from_href() {
        assert_eq!(
            id_from_href("https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4"),
            "4d8b92b34eb68a1b2c0003f4"
        );
        assert_eq!(id_from_href("no-slashes"), "no-slashes");
        assert_eq!(id_from_href("https://api.artsy.net/api/artists/"), "");
        assert_eq!(id_from_href(""), "");
    }

    #[test]
    fn test_artist_summary_full() {
        let result = RawSearchResult {
            title: Some("Andy Warhol".to_string()),
            links: links(
                Some("https://api.artsy.net/api/artists/4d8b92b34eb68a1b2c0003f4"),
                Some("https://d32dm0rphc51dk.cloudfront.net/warhol/square.jpg"),
            ),
        };

        let summary = to_artist_summary(&result);
        assert_eq!(summary.id, "4d8b92b34eb68a1b2c0003f4");
        assert_eq!(summary.name, "Andy Warhol");
        assert_eq!(
            summary.thumbnail_url,
            "https://d32dm0rphc51dk.cloudfront.net/warhol/square.jpg"
        );
    }

    #[test]
    fn test_artist_summary_without_links() {
        let result = RawSearchResult {
            title: Some("Andy Warhol".to_string()),
            links: None,
        };

        let summary = to_artist_summary(&result);
        assert_eq!(summary.id, "");
        assert_eq!(summary.name, "Andy Warhol");
        assert_eq!(summary.thumbnail_url, "");
    }

    #[test]
    fn test_artist_summary_from_empty_json() {
        let result: RawSearchResult = serde_json::from_value(json!({})).unwrap();
        assert_eq!(to_artist_summary(&result), ArtistSummary::default());
    }

    #[test]
    fn test_artist_summary_with_null_fields() {
        let result: RawSearchResult = serde_json::from_value(json!({
            "title": null,
            "_links": { "self": { "href": null }, "thumbnail": null }
        }))
        .unwrap();
        assert_eq!(to_artist_summary(&result), ArtistSummary::default());
    }

    #[test]
    fn test_artist_summary_serializes_thumbnail_key() {
        let summary = ArtistSummary {
            id: "a".to_string(),
            name: "b".to_string(),
            thumbnail_url: "c".to_string(),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value, json!({ "id": "a", "name": "b", "thumbnail": "c" }));
    }

    #[test]
    fn test_artist_detail_projection() {
        let artist: RawArtist = serde_json::from_value(json!({
            "id": "4d8b92b34eb68a1b2c0003f4",
            "name": "Andy Warhol",
            "birthday": "1928",
            "deathday": "1987",
            "nationality": "American",
            "biography": "Pop artist.",
            "hometown": "Pittsburgh, Pennsylvania"
        }))
        .unwrap();

        let detail = to_artist_detail(&artist);
        assert_eq!(
            detail,
            ArtistDetail {
                name: "Andy Warhol".to_string(),
                birthday: "1928".to_string(),
                deathday: "1987".to_string(),
                nationality: "American".to_string(),
                biography: "Pop artist.".to_string(),
            }
        );
    }

    #[test]
    fn test_artist_detail_missing_fields_become_empty_strings() {
        let artist: RawArtist =
            serde_json::from_value(json!({ "name": "Banksy", "deathday": null })).unwrap();

        let value = serde_json::to_value(to_artist_detail(&artist)).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Banksy",
                "birthday": "",
                "deathday": "",
                "nationality": "",
                "biography": ""
            })
        );
    }

    #[test]
    fn test_similar_artist_prefers_document_id() {
        let artist = RawArtist {
            id: Some("own-id".to_string()),
            name: Some("Roy Lichtenstein".to_string()),
            links: links(Some("https://api.artsy.net/api/artists/link-id"), Some("thumb")),
            ..Default::default()
        };
        let summary = to_similar_artist(&artist);
        assert_eq!(summary.id, "own-id");
        assert_eq!(summary.thumbnail_url, "thumb");
    }

    #[test]
    fn test_similar_artist_falls_back_to_self_link() {
        let artist = RawArtist {
            name: Some("Roy Lichtenstein".to_string()),
            links: links(Some("https://api.artsy.net/api/artists/link-id"), None),
            ..Default::default()
        };
        assert_eq!(to_similar_artist(&artist).id, "link-id");
    }

    #[test]
    fn test_artwork_and_gene_projection() {
        let artwork = RawArtwork {
            id: Some("aw-1".to_string()),
            title: Some("Campbell's Soup Cans".to_string()),
            date: Some("1962".to_string()),
            links: links(None, Some("https://img/aw-1.jpg")),
        };
        let summary = to_artwork_summary(&artwork);
        assert_eq!(summary.id, "aw-1");
        assert_eq!(summary.date, "1962");
        assert_eq!(summary.thumbnail_url, "https://img/aw-1.jpg");

        let gene = RawGene {
            name: Some("Pop Art".to_string()),
            links: None,
        };
        let gene = to_gene_summary(&gene);
        assert_eq!(gene.name, "Pop Art");
        assert_eq!(gene.thumbnail_url, "");
    }
}
