//! Paged collections
//!
//! `count` is the number of items the server holds, `offset` the index of
//! the first item present here. Items keep document order.

use serde::Serialize;

use super::core::{
    Artist, CdStub, Collection, Disc, FreeDbDisc, Isrc, Label, Puid, Recording, Release,
    ReleaseGroup, Work,
};
use super::elements::{
    Alias, Annotation, LabelInfo, Medium, NonMbTrack, Relation, Tag, Track, UserTag,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct List<T> {
    pub count: u64,
    pub offset: u64,
    pub items: Vec<T>,
}

impl<T> List<T> {
    pub fn new(count: u64, offset: u64) -> Self {
        Self {
            count,
            offset,
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the server holds items beyond the ones in this page
    pub fn has_more(&self) -> bool {
        self.offset.saturating_add(self.items.len() as u64) < self.count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

pub type ArtistList = List<Artist>;
pub type ReleaseList = List<Release>;
pub type ReleaseGroupList = List<ReleaseGroup>;
pub type RecordingList = List<Recording>;
pub type LabelList = List<Label>;
pub type WorkList = List<Work>;
pub type PuidList = List<Puid>;
pub type IsrcList = List<Isrc>;
pub type DiscList = List<Disc>;
pub type TrackList = List<Track>;
pub type NonMbTrackList = List<NonMbTrack>;
pub type AliasList = List<Alias>;
pub type LabelInfoList = List<LabelInfo>;
pub type TagList = List<Tag>;
pub type UserTagList = List<UserTag>;
pub type AnnotationList = List<Annotation>;
pub type CdStubList = List<CdStub>;
pub type FreeDbDiscList = List<FreeDbDisc>;
pub type CollectionList = List<Collection>;

/// Media of a release, with the total track count across them
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct MediumList {
    pub track_count: Option<u64>,
    #[serde(flatten)]
    pub media: List<Medium>,
}

/// Relations of one target entity type
#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct RelationList {
    pub target_type: Option<String>,
    #[serde(flatten)]
    pub relations: List<Relation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_more() {
        let mut list: List<Tag> = List::new(3, 0);
        list.items.push(Tag::default());
        assert!(list.has_more());
        list.items.push(Tag::default());
        list.items.push(Tag::default());
        assert!(!list.has_more());

        let mut tail: List<Tag> = List::new(50, 48);
        tail.items.push(Tag::default());
        tail.items.push(Tag::default());
        assert!(!tail.has_more());
    }

    #[test]
    fn test_has_more_with_huge_offset() {
        let mut list: List<Tag> = List::new(5, u64::MAX);
        list.items.push(Tag::default());
        assert!(!list.has_more());
    }
}
