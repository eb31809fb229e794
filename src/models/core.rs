//! Primary catalog records
//!
//! The document root and the entities that carry a MusicBrainz identifier.
//! Entities referenced from elsewhere in the document (a credited artist, a
//! relation target) are embedded as owned copies: the same artist appearing
//! twice yields two independent values.

use serde::Serialize;

use super::elements::{
    Annotation, ArtistCredit, LifeSpan, Rating, TextRepresentation, UserRating,
};
use super::lists::{
    AliasList, AnnotationList, ArtistList, CdStubList, CollectionList, FreeDbDiscList, IsrcList,
    LabelInfoList, LabelList, MediumList, NonMbTrackList, PuidList, RecordingList,
    ReleaseGroupList, ReleaseList, RelationList, TagList, UserTagList, WorkList,
};

/// Root `<metadata>` record
///
/// One slot per element kind that may appear directly below the root.
/// Slots stay `None` when the element is absent or skipped by policy.
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Metadata {
    pub generator: Option<String>,
    pub created: Option<String>,
    pub artist: Option<Artist>,
    pub release: Option<Release>,
    pub release_group: Option<ReleaseGroup>,
    pub recording: Option<Recording>,
    pub label: Option<Label>,
    pub work: Option<Work>,
    pub puid: Option<Puid>,
    pub isrc: Option<Isrc>,
    pub disc: Option<Disc>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
    pub collection: Option<Collection>,
    pub artist_list: Option<ArtistList>,
    pub release_list: Option<ReleaseList>,
    pub release_group_list: Option<ReleaseGroupList>,
    pub recording_list: Option<RecordingList>,
    pub label_list: Option<LabelList>,
    pub work_list: Option<WorkList>,
    pub isrc_list: Option<IsrcList>,
    pub annotation_list: Option<AnnotationList>,
    pub cdstub_list: Option<CdStubList>,
    pub freedb_disc_list: Option<FreeDbDiscList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
    pub collection_list: Option<CollectionList>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub sort_name: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub disambiguation: Option<String>,
    pub life_span: Option<LifeSpan>,
    pub alias_list: Option<AliasList>,
    pub recording_list: Option<RecordingList>,
    pub release_list: Option<ReleaseList>,
    pub release_group_list: Option<ReleaseGroupList>,
    pub label_list: Option<LabelList>,
    pub work_list: Option<WorkList>,
    /// One entry per `<relation-list>`, in document order
    pub relation_lists: Vec<RelationList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
}

impl Artist {
    pub fn new(id: String) -> Self {
        Self {
            id,
            kind: None,
            name: None,
            sort_name: None,
            gender: None,
            country: None,
            disambiguation: None,
            life_span: None,
            alias_list: None,
            recording_list: None,
            release_list: None,
            release_group_list: None,
            label_list: None,
            work_list: None,
            relation_lists: Vec::new(),
            tag_list: None,
            user_tag_list: None,
            rating: None,
            user_rating: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Release {
    pub id: String,
    pub title: Option<String>,
    pub status: Option<String>,
    pub quality: Option<String>,
    pub disambiguation: Option<String>,
    pub packaging: Option<String>,
    pub text_representation: Option<TextRepresentation>,
    pub artist_credit: Option<ArtistCredit>,
    pub release_group: Option<ReleaseGroup>,
    pub date: Option<String>,
    pub country: Option<String>,
    pub barcode: Option<String>,
    pub asin: Option<String>,
    pub label_info_list: Option<LabelInfoList>,
    pub medium_list: Option<MediumList>,
    pub relation_lists: Vec<RelationList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
}

impl Release {
    pub fn new(id: String) -> Self {
        Self {
            id,
            title: None,
            status: None,
            quality: None,
            disambiguation: None,
            packaging: None,
            text_representation: None,
            artist_credit: None,
            release_group: None,
            date: None,
            country: None,
            barcode: None,
            asin: None,
            label_info_list: None,
            medium_list: None,
            relation_lists: Vec::new(),
            tag_list: None,
            user_tag_list: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReleaseGroup {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub disambiguation: Option<String>,
    pub comment: Option<String>,
    pub first_release_date: Option<String>,
    pub artist_credit: Option<ArtistCredit>,
    pub release_list: Option<ReleaseList>,
    pub relation_lists: Vec<RelationList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
}

impl ReleaseGroup {
    pub fn new(id: String) -> Self {
        Self {
            id,
            kind: None,
            title: None,
            disambiguation: None,
            comment: None,
            first_release_date: None,
            artist_credit: None,
            release_list: None,
            relation_lists: Vec::new(),
            tag_list: None,
            user_tag_list: None,
            rating: None,
            user_rating: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Recording {
    pub id: String,
    pub title: Option<String>,
    /// Milliseconds
    pub length: Option<u64>,
    pub disambiguation: Option<String>,
    pub artist_credit: Option<ArtistCredit>,
    pub release_list: Option<ReleaseList>,
    pub puid_list: Option<PuidList>,
    pub isrc_list: Option<IsrcList>,
    pub relation_lists: Vec<RelationList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
}

impl Recording {
    pub fn new(id: String) -> Self {
        Self {
            id,
            title: None,
            length: None,
            disambiguation: None,
            artist_credit: None,
            release_list: None,
            puid_list: None,
            isrc_list: None,
            relation_lists: Vec::new(),
            tag_list: None,
            user_tag_list: None,
            rating: None,
            user_rating: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Label {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub name: Option<String>,
    pub sort_name: Option<String>,
    pub label_code: Option<u64>,
    pub disambiguation: Option<String>,
    pub country: Option<String>,
    pub life_span: Option<LifeSpan>,
    pub alias_list: Option<AliasList>,
    pub release_list: Option<ReleaseList>,
    pub relation_lists: Vec<RelationList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
}

impl Label {
    pub fn new(id: String) -> Self {
        Self {
            id,
            kind: None,
            name: None,
            sort_name: None,
            label_code: None,
            disambiguation: None,
            country: None,
            life_span: None,
            alias_list: None,
            release_list: None,
            relation_lists: Vec::new(),
            tag_list: None,
            user_tag_list: None,
            rating: None,
            user_rating: None,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Work {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub artist_credit: Option<ArtistCredit>,
    pub iswc: Option<String>,
    pub disambiguation: Option<String>,
    pub alias_list: Option<AliasList>,
    pub relation_lists: Vec<RelationList>,
    pub tag_list: Option<TagList>,
    pub user_tag_list: Option<UserTagList>,
    pub rating: Option<Rating>,
    pub user_rating: Option<UserRating>,
}

impl Work {
    pub fn new(id: String) -> Self {
        Self {
            id,
            kind: None,
            title: None,
            artist_credit: None,
            iswc: None,
            disambiguation: None,
            alias_list: None,
            relation_lists: Vec::new(),
            tag_list: None,
            user_tag_list: None,
            rating: None,
            user_rating: None,
        }
    }
}

/// Disc ID lookup result
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Disc {
    pub id: String,
    pub sectors: Option<u64>,
    pub release_list: Option<ReleaseList>,
}

/// Acoustic fingerprint identifier
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Puid {
    pub id: String,
    pub recording_list: Option<RecordingList>,
}

/// International Standard Recording Code
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Isrc {
    pub id: String,
    pub recording_list: Option<RecordingList>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Collection {
    pub id: String,
    pub name: Option<String>,
    pub editor: Option<String>,
    pub release_list: Option<ReleaseList>,
}

/// Disc submitted to the CD stub service, not yet in the catalog
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CdStub {
    pub id: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub barcode: Option<String>,
    pub comment: Option<String>,
    pub track_list: Option<NonMbTrackList>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct FreeDbDisc {
    pub id: String,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub category: Option<String>,
    pub year: Option<String>,
    pub track_list: Option<NonMbTrackList>,
}

impl Metadata {
    /// Annotations attached to the document, empty when none were built
    pub fn annotations(&self) -> &[Annotation] {
        self.annotation_list
            .as_ref()
            .map(|list| list.items.as_slice())
            .unwrap_or(&[])
    }
}
