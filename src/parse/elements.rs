//! Readers for the secondary records

use super::{Builder, Entity, StartTag, TokenSource};
use crate::config::EntityKind;
use crate::error::Result;
use crate::models::{
    Annotation, ArtistCredit, CdStub, Collection, Disc, FreeDbDisc, Isrc, LabelInfo, LifeSpan,
    Medium, NameCredit, NonMbTrack, Puid, Relation, Tag, TextRepresentation, Track, UserTag,
};

impl Entity for ArtistCredit {
    const KIND: EntityKind = EntityKind::ArtistCredit;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut credit = ArtistCredit::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name-credit" => credit.name_credits.extend(b.entity::<NameCredit>(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(credit)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(ArtistCredit::default()))
    }
}

impl Entity for NameCredit {
    const KIND: EntityKind = EntityKind::NameCredit;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut nc = NameCredit {
            join_phrase: b.optional_attribute(tag, "joinphrase"),
            ..NameCredit::default()
        };
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name" => nc.name = Some(b.text(&child)?),
                "artist" => nc.artist = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(nc)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(NameCredit {
            join_phrase: b.optional_attribute(tag, "joinphrase"),
            ..NameCredit::default()
        }))
    }
}

fn open_relation<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Relation {
    Relation {
        kind: b.optional_attribute(tag, "type"),
        target: b.optional_attribute(tag, "target"),
        ..Relation::default()
    }
}

impl Entity for Relation {
    const KIND: EntityKind = EntityKind::Relation;

    /// The target entity is embedded as an owned copy, not a reference into
    /// the rest of the document.
    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut r = open_relation(b, tag);
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "target" => r.target = Some(b.text(&child)?),
                "direction" => r.direction = Some(b.text(&child)?),
                "begin" => r.begin = Some(b.text(&child)?),
                "end" => r.end = Some(b.text(&child)?),
                "artist" => r.artist = b.entity(&child)?,
                "release" => r.release = b.entity(&child)?,
                "release-group" => r.release_group = b.entity(&child)?,
                "recording" => r.recording = b.entity(&child)?,
                "label" => r.label = b.entity(&child)?,
                "work" => r.work = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(r)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(open_relation(b, tag)))
    }
}

impl Entity for Tag {
    const KIND: EntityKind = EntityKind::Tag;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut t = Tag {
            count: b.unsigned_attribute(tag, "count")?,
            name: None,
        };
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name" => t.name = Some(b.text(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(t)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Tag {
            count: b.unsigned_attribute(tag, "count")?,
            name: None,
        }))
    }
}

impl Entity for UserTag {
    const KIND: EntityKind = EntityKind::UserTag;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut t = UserTag::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name" => t.name = Some(b.text(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(t)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(UserTag::default()))
    }
}

impl Entity for LabelInfo {
    const KIND: EntityKind = EntityKind::LabelInfo;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut li = LabelInfo::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "catalog-number" => li.catalog_number = Some(b.text(&child)?),
                "label" => li.label = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(li)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(LabelInfo::default()))
    }
}

impl Entity for Medium {
    const KIND: EntityKind = EntityKind::Medium;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut m = Medium::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => m.title = Some(b.text(&child)?),
                "position" => m.position = Some(b.unsigned(&child)?),
                "format" => m.format = Some(b.text(&child)?),
                "disc-list" => m.disc_list = b.entity(&child)?,
                "track-list" => m.track_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(m)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Medium::default()))
    }
}

impl Entity for Track {
    const KIND: EntityKind = EntityKind::Track;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut t = Track::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "position" => t.position = Some(b.unsigned(&child)?),
                "title" => t.title = Some(b.text(&child)?),
                "length" => t.length = Some(b.unsigned(&child)?),
                "artist-credit" => t.artist_credit = b.entity(&child)?,
                "recording" => t.recording = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(t)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Track::default()))
    }
}

impl Entity for NonMbTrack {
    const KIND: EntityKind = EntityKind::NonMbTrack;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut t = NonMbTrack::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => t.title = Some(b.text(&child)?),
                "artist" => t.artist = Some(b.text(&child)?),
                "length" => t.length = Some(b.unsigned(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(t)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(NonMbTrack::default()))
    }
}

impl Entity for Annotation {
    const KIND: EntityKind = EntityKind::Annotation;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut a = Annotation {
            kind: b.optional_attribute(tag, "type"),
            ..Annotation::default()
        };
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "entity" => a.entity = Some(b.text(&child)?),
                "name" => a.name = Some(b.text(&child)?),
                "text" => a.text = Some(b.text(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(a)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Annotation {
            kind: b.optional_attribute(tag, "type"),
            ..Annotation::default()
        }))
    }
}

impl Entity for LifeSpan {
    const KIND: EntityKind = EntityKind::LifeSpan;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut ls = LifeSpan::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "begin" => ls.begin = Some(b.text(&child)?),
                "end" => ls.end = Some(b.text(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(ls)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(LifeSpan::default()))
    }
}

impl Entity for TextRepresentation {
    const KIND: EntityKind = EntityKind::TextRepresentation;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut tr = TextRepresentation::default();
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "language" => tr.language = Some(b.text(&child)?),
                "script" => tr.script = Some(b.text(&child)?),
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(tr)
    }

    fn from_attributes<S: TokenSource>(_b: &Builder<'_, S>, _tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(TextRepresentation::default()))
    }
}

impl Entity for Disc {
    const KIND: EntityKind = EntityKind::Disc;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut d = Disc {
            id: b.required_attribute(tag, "id")?,
            sectors: None,
            release_list: None,
        };
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "sectors" => d.sectors = Some(b.unsigned(&child)?),
                "release-list" => d.release_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(d)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Disc {
            id: b.required_attribute(tag, "id")?,
            sectors: None,
            release_list: None,
        }))
    }
}

impl Entity for Puid {
    const KIND: EntityKind = EntityKind::Puid;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut p = Puid {
            id: b.required_attribute(tag, "id")?,
            recording_list: None,
        };
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "recording-list" => p.recording_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(p)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Puid {
            id: b.required_attribute(tag, "id")?,
            recording_list: None,
        }))
    }
}

impl Entity for Isrc {
    const KIND: EntityKind = EntityKind::Isrc;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut i = Isrc {
            id: b.required_attribute(tag, "id")?,
            recording_list: None,
        };
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "recording-list" => i.recording_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(i)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Isrc {
            id: b.required_attribute(tag, "id")?,
            recording_list: None,
        }))
    }
}

fn open_collection<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Collection> {
    Ok(Collection {
        id: b.required_attribute(tag, "id")?,
        name: None,
        editor: None,
        release_list: None,
    })
}

impl Entity for Collection {
    const KIND: EntityKind = EntityKind::Collection;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut c = open_collection(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name" => c.name = Some(b.text(&child)?),
                "editor" => c.editor = Some(b.text(&child)?),
                "release-list" => c.release_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(c)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_collection(b, tag).map(Some)
    }
}

fn open_cdstub<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<CdStub> {
    Ok(CdStub {
        id: b.required_attribute(tag, "id")?,
        title: None,
        artist: None,
        barcode: None,
        comment: None,
        track_list: None,
    })
}

impl Entity for CdStub {
    const KIND: EntityKind = EntityKind::CdStub;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut c = open_cdstub(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => c.title = Some(b.text(&child)?),
                "artist" => c.artist = Some(b.text(&child)?),
                "barcode" => c.barcode = Some(b.text(&child)?),
                "comment" => c.comment = Some(b.text(&child)?),
                "track-list" => c.track_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(c)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_cdstub(b, tag).map(Some)
    }
}

fn open_freedb_disc<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<FreeDbDisc> {
    Ok(FreeDbDisc {
        id: b.required_attribute(tag, "id")?,
        title: None,
        artist: None,
        category: None,
        year: None,
        track_list: None,
    })
}

impl Entity for FreeDbDisc {
    const KIND: EntityKind = EntityKind::FreeDbDisc;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut f = open_freedb_disc(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => f.title = Some(b.text(&child)?),
                "artist" => f.artist = Some(b.text(&child)?),
                "category" => f.category = Some(b.text(&child)?),
                "year" => f.year = Some(b.text(&child)?),
                "track-list" => f.track_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(f)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_freedb_disc(b, tag).map(Some)
    }
}
