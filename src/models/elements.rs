//! Secondary records
//!
//! Credits, relations, ratings, tags and the medium/track structure hanging
//! off the primary records.

use serde::Serialize;

use super::core::{Artist, Label, Recording, Release, ReleaseGroup, Work};
use super::lists::{DiscList, TrackList};

/// Ordered list of credited names, e.g. "Artist A feat. Artist B"
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct ArtistCredit {
    pub name_credits: Vec<NameCredit>,
}

impl ArtistCredit {
    /// Credit as printed: each name (or the artist's name) followed by its
    /// join phrase
    pub fn display_name(&self) -> String {
        let mut out = String::new();
        for credit in &self.name_credits {
            let name = credit
                .name
                .as_deref()
                .or_else(|| credit.artist.as_ref().and_then(|a| a.name.as_deref()))
                .unwrap_or("");
            out.push_str(name);
            if let Some(join) = &credit.join_phrase {
                out.push_str(join);
            }
        }
        out
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct NameCredit {
    pub join_phrase: Option<String>,
    /// Credited name when it differs from the artist's own
    pub name: Option<String>,
    pub artist: Option<Artist>,
}

/// Typed link from the enclosing entity to another one
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Relation {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub target: Option<String>,
    pub direction: Option<String>,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub artist: Option<Artist>,
    pub release: Option<Release>,
    pub release_group: Option<ReleaseGroup>,
    pub recording: Option<Recording>,
    pub label: Option<Label>,
    pub work: Option<Work>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Alias {
    pub locale: Option<String>,
    pub text: String,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Tag {
    pub count: Option<u64>,
    pub name: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct UserTag {
    pub name: Option<String>,
}

/// Community rating on a 0-5 scale
///
/// The percentage is derived once from the raw value when the rating is
/// built and cannot be changed afterwards.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Rating {
    votes_count: Option<u64>,
    value: f64,
    percent: f64,
}

impl Rating {
    /// Scale factor from the 0-5 rating to 0-100
    pub const PERCENT_SCALE: f64 = 20.0;

    pub fn new(votes_count: Option<u64>, value: f64) -> Self {
        Self {
            votes_count,
            value,
            percent: value * Self::PERCENT_SCALE,
        }
    }

    pub fn votes_count(&self) -> Option<u64> {
        self.votes_count
    }

    /// Raw rating, 0-5
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Rating scaled to 0-100
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

/// The requesting user's own rating
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserRating {
    pub value: u64,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct LabelInfo {
    pub catalog_number: Option<String>,
    pub label: Option<Label>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Medium {
    pub title: Option<String>,
    pub position: Option<u64>,
    pub format: Option<String>,
    pub disc_list: Option<DiscList>,
    pub track_list: Option<TrackList>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Track {
    pub position: Option<u64>,
    pub title: Option<String>,
    /// Milliseconds
    pub length: Option<u64>,
    pub artist_credit: Option<ArtistCredit>,
    pub recording: Option<Recording>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Annotation {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub entity: Option<String>,
    pub name: Option<String>,
    pub text: Option<String>,
}

/// Track of a CD stub or FreeDB disc
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct NonMbTrack {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub length: Option<u64>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct LifeSpan {
    pub begin: Option<String>,
    pub end: Option<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct TextRepresentation {
    pub language: Option<String>,
    pub script: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_percent_is_derived() {
        let rating = Rating::new(Some(3), 4.5);
        assert_eq!(rating.value(), 4.5);
        assert_eq!(rating.percent(), 90.0);
        assert_eq!(rating.votes_count(), Some(3));

        assert_eq!(Rating::new(None, 0.0).percent(), 0.0);
        assert_eq!(Rating::new(None, 5.0).percent(), 100.0);
    }

    #[test]
    fn test_artist_credit_display_name() {
        let mut first = Artist::new("a1".to_string());
        first.name = Some("Simon".to_string());
        let credit = ArtistCredit {
            name_credits: vec![
                NameCredit {
                    join_phrase: Some(" & ".to_string()),
                    name: None,
                    artist: Some(first),
                },
                NameCredit {
                    join_phrase: None,
                    name: Some("Garfunkel".to_string()),
                    artist: None,
                },
            ],
        };
        assert_eq!(credit.display_name(), "Simon & Garfunkel");
    }
}
