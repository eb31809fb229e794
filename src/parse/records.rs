//! Readers for the document root and the primary records

use super::{Builder, Entity, StartTag, TokenSource};
use crate::config::EntityKind;
use crate::error::Result;
use crate::models::{
    Artist, Label, Metadata, Recording, RelationList, Release, ReleaseGroup, Work,
};

impl Entity for Metadata {
    const KIND: EntityKind = EntityKind::Metadata;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut m = Metadata {
            generator: b.optional_attribute(tag, "generator"),
            created: b.optional_attribute(tag, "created"),
            ..Metadata::default()
        };

        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "artist" => m.artist = b.entity(&child)?,
                "release" => m.release = b.entity(&child)?,
                "release-group" => m.release_group = b.entity(&child)?,
                "recording" => m.recording = b.entity(&child)?,
                "label" => m.label = b.entity(&child)?,
                "work" => m.work = b.entity(&child)?,
                "puid" => m.puid = b.entity(&child)?,
                "isrc" => m.isrc = b.entity(&child)?,
                "disc" => m.disc = b.entity(&child)?,
                "rating" => m.rating = b.entity(&child)?,
                "user-rating" => m.user_rating = b.entity(&child)?,
                "collection" => m.collection = b.entity(&child)?,
                "artist-list" => m.artist_list = b.entity(&child)?,
                "release-list" => m.release_list = b.entity(&child)?,
                "release-group-list" => m.release_group_list = b.entity(&child)?,
                "recording-list" => m.recording_list = b.entity(&child)?,
                "label-list" => m.label_list = b.entity(&child)?,
                "work-list" => m.work_list = b.entity(&child)?,
                "isrc-list" => m.isrc_list = b.entity(&child)?,
                "annotation-list" => m.annotation_list = b.entity(&child)?,
                "cdstub-list" => m.cdstub_list = b.entity(&child)?,
                "freedb-disc-list" => m.freedb_disc_list = b.entity(&child)?,
                "tag-list" => m.tag_list = b.entity(&child)?,
                "user-tag-list" => m.user_tag_list = b.entity(&child)?,
                "collection-list" => m.collection_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(m)
    }
}

fn open_artist<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Artist> {
    let mut artist = Artist::new(b.required_attribute(tag, "id")?);
    artist.kind = b.optional_attribute(tag, "type");
    Ok(artist)
}

impl Entity for Artist {
    const KIND: EntityKind = EntityKind::Artist;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut a = open_artist(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name" => a.name = Some(b.text(&child)?),
                "sort-name" => a.sort_name = Some(b.text(&child)?),
                "gender" => a.gender = Some(b.text(&child)?),
                "country" => a.country = Some(b.text(&child)?),
                "disambiguation" => a.disambiguation = Some(b.text(&child)?),
                "life-span" => a.life_span = b.entity(&child)?,
                "alias-list" => a.alias_list = b.entity(&child)?,
                "recording-list" => a.recording_list = b.entity(&child)?,
                "release-list" => a.release_list = b.entity(&child)?,
                "release-group-list" => a.release_group_list = b.entity(&child)?,
                "label-list" => a.label_list = b.entity(&child)?,
                "work-list" => a.work_list = b.entity(&child)?,
                "relation-list" => a.relation_lists.extend(b.entity::<RelationList>(&child)?),
                "tag-list" => a.tag_list = b.entity(&child)?,
                "user-tag-list" => a.user_tag_list = b.entity(&child)?,
                "rating" => a.rating = b.entity(&child)?,
                "user-rating" => a.user_rating = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(a)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_artist(b, tag).map(Some)
    }
}

impl Entity for Release {
    const KIND: EntityKind = EntityKind::Release;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut r = Release::new(b.required_attribute(tag, "id")?);
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => r.title = Some(b.text(&child)?),
                "status" => r.status = Some(b.text(&child)?),
                "quality" => r.quality = Some(b.text(&child)?),
                "disambiguation" => r.disambiguation = Some(b.text(&child)?),
                "packaging" => r.packaging = Some(b.text(&child)?),
                "text-representation" => r.text_representation = b.entity(&child)?,
                "artist-credit" => r.artist_credit = b.entity(&child)?,
                "release-group" => r.release_group = b.entity(&child)?,
                "date" => r.date = Some(b.text(&child)?),
                "country" => r.country = Some(b.text(&child)?),
                "barcode" => r.barcode = Some(b.text(&child)?),
                "asin" => r.asin = Some(b.text(&child)?),
                "label-info-list" => r.label_info_list = b.entity(&child)?,
                "medium-list" => r.medium_list = b.entity(&child)?,
                "relation-list" => r.relation_lists.extend(b.entity::<RelationList>(&child)?),
                "tag-list" => r.tag_list = b.entity(&child)?,
                "user-tag-list" => r.user_tag_list = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(r)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Release::new(b.required_attribute(tag, "id")?)))
    }
}

fn open_release_group<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<ReleaseGroup> {
    let mut group = ReleaseGroup::new(b.required_attribute(tag, "id")?);
    group.kind = b.optional_attribute(tag, "type");
    Ok(group)
}

impl Entity for ReleaseGroup {
    const KIND: EntityKind = EntityKind::ReleaseGroup;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut rg = open_release_group(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => rg.title = Some(b.text(&child)?),
                "disambiguation" => rg.disambiguation = Some(b.text(&child)?),
                "comment" => rg.comment = Some(b.text(&child)?),
                "first-release-date" => rg.first_release_date = Some(b.text(&child)?),
                "artist-credit" => rg.artist_credit = b.entity(&child)?,
                "release-list" => rg.release_list = b.entity(&child)?,
                "relation-list" => rg.relation_lists.extend(b.entity::<RelationList>(&child)?),
                "tag-list" => rg.tag_list = b.entity(&child)?,
                "user-tag-list" => rg.user_tag_list = b.entity(&child)?,
                "rating" => rg.rating = b.entity(&child)?,
                "user-rating" => rg.user_rating = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(rg)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_release_group(b, tag).map(Some)
    }
}

impl Entity for Recording {
    const KIND: EntityKind = EntityKind::Recording;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut r = Recording::new(b.required_attribute(tag, "id")?);
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => r.title = Some(b.text(&child)?),
                "length" => r.length = Some(b.unsigned(&child)?),
                "disambiguation" => r.disambiguation = Some(b.text(&child)?),
                "artist-credit" => r.artist_credit = b.entity(&child)?,
                "release-list" => r.release_list = b.entity(&child)?,
                "puid-list" => r.puid_list = b.entity(&child)?,
                "isrc-list" => r.isrc_list = b.entity(&child)?,
                "relation-list" => r.relation_lists.extend(b.entity::<RelationList>(&child)?),
                "tag-list" => r.tag_list = b.entity(&child)?,
                "user-tag-list" => r.user_tag_list = b.entity(&child)?,
                "rating" => r.rating = b.entity(&child)?,
                "user-rating" => r.user_rating = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(r)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        Ok(Some(Recording::new(b.required_attribute(tag, "id")?)))
    }
}

fn open_label<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Label> {
    let mut label = Label::new(b.required_attribute(tag, "id")?);
    label.kind = b.optional_attribute(tag, "type");
    Ok(label)
}

impl Entity for Label {
    const KIND: EntityKind = EntityKind::Label;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut l = open_label(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "name" => l.name = Some(b.text(&child)?),
                "sort-name" => l.sort_name = Some(b.text(&child)?),
                "label-code" => l.label_code = Some(b.unsigned(&child)?),
                "disambiguation" => l.disambiguation = Some(b.text(&child)?),
                "country" => l.country = Some(b.text(&child)?),
                "life-span" => l.life_span = b.entity(&child)?,
                "alias-list" => l.alias_list = b.entity(&child)?,
                "release-list" => l.release_list = b.entity(&child)?,
                "relation-list" => l.relation_lists.extend(b.entity::<RelationList>(&child)?),
                "tag-list" => l.tag_list = b.entity(&child)?,
                "user-tag-list" => l.user_tag_list = b.entity(&child)?,
                "rating" => l.rating = b.entity(&child)?,
                "user-rating" => l.user_rating = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(l)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_label(b, tag).map(Some)
    }
}

fn open_work<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Work> {
    let mut work = Work::new(b.required_attribute(tag, "id")?);
    work.kind = b.optional_attribute(tag, "type");
    Ok(work)
}

impl Entity for Work {
    const KIND: EntityKind = EntityKind::Work;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let mut w = open_work(b, tag)?;
        b.children(&tag.name, |b, child| {
            match child.name.as_str() {
                "title" => w.title = Some(b.text(&child)?),
                "artist-credit" => w.artist_credit = b.entity(&child)?,
                "iswc" => w.iswc = Some(b.text(&child)?),
                "disambiguation" => w.disambiguation = Some(b.text(&child)?),
                "alias-list" => w.alias_list = b.entity(&child)?,
                "relation-list" => w.relation_lists.extend(b.entity::<RelationList>(&child)?),
                "tag-list" => w.tag_list = b.entity(&child)?,
                "user-tag-list" => w.user_tag_list = b.entity(&child)?,
                "rating" => w.rating = b.entity(&child)?,
                "user-rating" => w.user_rating = b.entity(&child)?,
                _ => b.skip_unknown(&child)?,
            }
            Ok(())
        })?;
        Ok(w)
    }

    fn from_attributes<S: TokenSource>(b: &Builder<'_, S>, tag: &StartTag) -> Result<Option<Self>> {
        open_work(b, tag).map(Some)
    }
}
