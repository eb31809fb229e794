//! Readers for paged lists
//!
//! A missing `count` or `offset` reads as zero. Children other than the
//! list's item element are skipped.

use super::{Builder, Entity, StartTag, TokenSource};
use crate::config::EntityKind;
use crate::error::Result;
use crate::models::{
    Alias, Annotation, Artist, CdStub, Collection, Disc, FreeDbDisc, Isrc, Label, LabelInfo, List,
    Medium, MediumList, NonMbTrack, Puid, Recording, Relation, RelationList, Release, ReleaseGroup,
    Tag, Track, UserTag, Work,
};

/// An entity that appears as the item of a `-list` element
pub(crate) trait ListItem: Entity {
    const LIST_KIND: EntityKind;
}

macro_rules! list_items {
    ($($item:ty => $list:ident),* $(,)?) => {
        $(
            impl ListItem for $item {
                const LIST_KIND: EntityKind = EntityKind::$list;
            }
        )*
    };
}

list_items! {
    Artist => ArtistList,
    Release => ReleaseList,
    ReleaseGroup => ReleaseGroupList,
    Recording => RecordingList,
    Label => LabelList,
    Work => WorkList,
    Puid => PuidList,
    Isrc => IsrcList,
    Disc => DiscList,
    Track => TrackList,
    NonMbTrack => NonMbTrackList,
    Alias => AliasList,
    LabelInfo => LabelInfoList,
    Tag => TagList,
    UserTag => UserTagList,
    Annotation => AnnotationList,
    CdStub => CdStubList,
    FreeDbDisc => FreeDbDiscList,
    Collection => CollectionList,
}

fn open_list<T, S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<List<T>> {
    let count = b.unsigned_attribute(tag, "count")?.unwrap_or(0);
    let offset = b.unsigned_attribute(tag, "offset")?.unwrap_or(0);
    Ok(List::new(count, offset))
}

/// Append one item element to `list`, or skip any other child
fn read_item<T: ListItem, S: TokenSource>(
    b: &mut Builder<'_, S>,
    list: &mut List<T>,
    child: &StartTag,
) -> Result<()> {
    if child.name == T::KIND.tag() {
        list.items.extend(b.entity::<T>(child)?);
        Ok(())
    } else {
        b.skip_unknown(child)
    }
}

impl<T: ListItem> Entity for List<T> {
    const KIND: EntityKind = T::LIST_KIND;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut list = open_list(b, tag)?;
        b.children(&tag.name, |b, child| read_item(b, &mut list, &child))?;
        Ok(list)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_list(b, tag).map(Some)
    }
}

impl Entity for MediumList {
    const KIND: EntityKind = EntityKind::MediumList;

    /// Besides the media, carries a `<track-count>` total across all of them
    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut media = open_list::<Medium, S>(b, tag)?;
        let mut track_count = None;
        b.children(&tag.name, |b, child| {
            if child.name == "track-count" {
                track_count = Some(b.unsigned(&child)?);
                Ok(())
            } else {
                read_item(b, &mut media, &child)
            }
        })?;
        Ok(MediumList { track_count, media })
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(MediumList {
            track_count: None,
            media: open_list(b, tag)?,
        }))
    }
}

impl Entity for RelationList {
    const KIND: EntityKind = EntityKind::RelationList;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let target_type = b.optional_attribute(tag, "target-type");
        let mut relations = open_list::<Relation, S>(b, tag)?;
        b.children(&tag.name, |b, child| read_item(b, &mut relations, &child))?;
        Ok(RelationList {
            target_type,
            relations,
        })
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(RelationList {
            target_type: b.optional_attribute(tag, "target-type"),
            relations: open_list(b, tag)?,
        }))
    }
}

impl ListItem for Medium {
    const LIST_KIND: EntityKind = EntityKind::MediumList;
}

impl ListItem for Relation {
    const LIST_KIND: EntityKind = EntityKind::RelationList;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Materialization, MaterializationPolicy, ParserConfig};
    use crate::error::ParseError;
    use crate::models::TagList;
    use crate::parse::{Token, TokenList};

    fn builder(tokens: Vec<Token>, config: &ParserConfig) -> Builder<'_, TokenList> {
        let mut b = Builder::new(TokenList::new(tokens), config);
        b.depth = 1;
        b
    }

    fn tag(name: &str) -> Vec<Token> {
        vec![
            Token::start("tag", &[("count", "1")]),
            Token::start("name", &[]),
            Token::text(name),
            Token::end("name"),
            Token::end("tag"),
        ]
    }

    #[test]
    fn test_paging_and_order() {
        let config = ParserConfig::default();
        let mut tokens = Vec::new();
        tokens.extend(tag("rock"));
        tokens.push(Token::text("\n  "));
        tokens.extend(tag("pop"));
        tokens.extend(tag("jazz"));
        tokens.push(Token::end("tag-list"));
        let list_tag = StartTag::new("tag-list")
            .with_attribute("count", "50")
            .with_attribute("offset", "10");

        let mut b = builder(tokens, &config);
        let list = TagList::read(&mut b, &list_tag).unwrap();
        assert_eq!(list.count, 50);
        assert_eq!(list.offset, 10);
        let names: Vec<_> = list.iter().filter_map(|t| t.name.as_deref()).collect();
        assert_eq!(names, vec!["rock", "pop", "jazz"]);
        assert!(list.has_more());
    }

    #[test]
    fn test_missing_paging_defaults_to_zero() {
        let config = ParserConfig::default();
        let mut b = builder(vec![Token::end("tag-list")], &config);
        let list = TagList::read(&mut b, &StartTag::new("tag-list")).unwrap();
        assert_eq!((list.count, list.offset), (0, 0));
        assert!(list.is_empty());
    }

    #[test]
    fn test_invalid_count() {
        let config = ParserConfig::default();
        let mut b = builder(vec![Token::end("tag-list")], &config);
        let err = TagList::read(&mut b, &StartTag::new("tag-list").with_attribute("count", "x"))
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidAttribute { ref attribute, .. } if attribute == "count"));
    }

    #[test]
    fn test_foreign_children_are_skipped() {
        let config = ParserConfig::default();
        let mut tokens = vec![
            Token::start("release", &[("id", "r1")]),
            Token::end("release"),
        ];
        tokens.extend(tag("rock"));
        tokens.push(Token::end("tag-list"));
        let mut b = builder(tokens, &config);
        let list = TagList::read(&mut b, &StartTag::new("tag-list")).unwrap();
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_medium_list_track_count() {
        let config = ParserConfig::default();
        let tokens = vec![
            Token::start("track-count", &[]),
            Token::text("14"),
            Token::end("track-count"),
            Token::start("medium", &[]),
            Token::start("position", &[]),
            Token::text("1"),
            Token::end("position"),
            Token::end("medium"),
            Token::end("medium-list"),
        ];
        let mut b = builder(tokens, &config);
        let list = MediumList::read(&mut b, &StartTag::new("medium-list").with_attribute("count", "1"))
            .unwrap();
        assert_eq!(list.track_count, Some(14));
        assert_eq!(list.media.len(), 1);
        assert_eq!(list.media.items[0].position, Some(1));
    }

    #[test]
    fn test_skipped_items_are_not_counted_as_present() {
        let config = ParserConfig::default()
            .with_policy(MaterializationPolicy::everything().with(EntityKind::Tag, Materialization::Skip));
        let mut tokens = tag("rock");
        tokens.push(Token::end("tag-list"));
        let mut b = builder(tokens, &config);
        let list = TagList::read(&mut b, &StartTag::new("tag-list").with_attribute("count", "1"))
            .unwrap();
        assert_eq!(list.count, 1);
        assert!(list.is_empty());
    }
}
