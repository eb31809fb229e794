//! Parser configuration
//!
//! The materialization policy decides, per entity kind, whether the builder
//! constructs a typed value, reads only the start tag's attributes, or
//! consumes the subtree without building anything.

use serde::Deserialize;
use std::collections::HashMap;

/// Default limit on element nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Every element kind of the metadata schema the builder knows about
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Metadata,
    Artist,
    Release,
    ReleaseGroup,
    Recording,
    Label,
    Work,
    Puid,
    Isrc,
    Disc,
    Rating,
    UserRating,
    Collection,
    ArtistCredit,
    NameCredit,
    Relation,
    Alias,
    Tag,
    UserTag,
    LabelInfo,
    Medium,
    Track,
    Annotation,
    #[serde(rename = "cdstub")]
    CdStub,
    #[serde(rename = "freedb-disc")]
    FreeDbDisc,
    NonMbTrack,
    LifeSpan,
    TextRepresentation,
    ArtistList,
    ReleaseList,
    ReleaseGroupList,
    RecordingList,
    LabelList,
    WorkList,
    PuidList,
    IsrcList,
    DiscList,
    MediumList,
    TrackList,
    NonMbTrackList,
    AliasList,
    RelationList,
    LabelInfoList,
    TagList,
    UserTagList,
    AnnotationList,
    #[serde(rename = "cdstub-list")]
    CdStubList,
    #[serde(rename = "freedb-disc-list")]
    FreeDbDiscList,
    CollectionList,
}

impl EntityKind {
    /// Element name this kind is read from
    ///
    /// Non-MusicBrainz tracks share the `track` and `track-list` names with
    /// regular tracks; the enclosing element tells them apart.
    pub fn tag(self) -> &'static str {
        match self {
            EntityKind::Metadata => "metadata",
            EntityKind::Artist => "artist",
            EntityKind::Release => "release",
            EntityKind::ReleaseGroup => "release-group",
            EntityKind::Recording => "recording",
            EntityKind::Label => "label",
            EntityKind::Work => "work",
            EntityKind::Puid => "puid",
            EntityKind::Isrc => "isrc",
            EntityKind::Disc => "disc",
            EntityKind::Rating => "rating",
            EntityKind::UserRating => "user-rating",
            EntityKind::Collection => "collection",
            EntityKind::ArtistCredit => "artist-credit",
            EntityKind::NameCredit => "name-credit",
            EntityKind::Relation => "relation",
            EntityKind::Alias => "alias",
            EntityKind::Tag => "tag",
            EntityKind::UserTag => "user-tag",
            EntityKind::LabelInfo => "label-info",
            EntityKind::Medium => "medium",
            EntityKind::Track | EntityKind::NonMbTrack => "track",
            EntityKind::Annotation => "annotation",
            EntityKind::CdStub => "cdstub",
            EntityKind::FreeDbDisc => "freedb-disc",
            EntityKind::LifeSpan => "life-span",
            EntityKind::TextRepresentation => "text-representation",
            EntityKind::ArtistList => "artist-list",
            EntityKind::ReleaseList => "release-list",
            EntityKind::ReleaseGroupList => "release-group-list",
            EntityKind::RecordingList => "recording-list",
            EntityKind::LabelList => "label-list",
            EntityKind::WorkList => "work-list",
            EntityKind::PuidList => "puid-list",
            EntityKind::IsrcList => "isrc-list",
            EntityKind::DiscList => "disc-list",
            EntityKind::MediumList => "medium-list",
            EntityKind::TrackList | EntityKind::NonMbTrackList => "track-list",
            EntityKind::AliasList => "alias-list",
            EntityKind::RelationList => "relation-list",
            EntityKind::LabelInfoList => "label-info-list",
            EntityKind::TagList => "tag-list",
            EntityKind::UserTagList => "user-tag-list",
            EntityKind::AnnotationList => "annotation-list",
            EntityKind::CdStubList => "cdstub-list",
            EntityKind::FreeDbDiscList => "freedb-disc-list",
            EntityKind::CollectionList => "collection-list",
        }
    }

    /// Kind for an element name, preferring MusicBrainz tracks for `track`
    pub fn from_tag(tag: &str) -> Option<Self> {
        let kind = match tag {
            "metadata" => EntityKind::Metadata,
            "artist" => EntityKind::Artist,
            "release" => EntityKind::Release,
            "release-group" => EntityKind::ReleaseGroup,
            "recording" => EntityKind::Recording,
            "label" => EntityKind::Label,
            "work" => EntityKind::Work,
            "puid" => EntityKind::Puid,
            "isrc" => EntityKind::Isrc,
            "disc" => EntityKind::Disc,
            "rating" => EntityKind::Rating,
            "user-rating" => EntityKind::UserRating,
            "collection" => EntityKind::Collection,
            "artist-credit" => EntityKind::ArtistCredit,
            "name-credit" => EntityKind::NameCredit,
            "relation" => EntityKind::Relation,
            "alias" => EntityKind::Alias,
            "tag" => EntityKind::Tag,
            "user-tag" => EntityKind::UserTag,
            "label-info" => EntityKind::LabelInfo,
            "medium" => EntityKind::Medium,
            "track" => EntityKind::Track,
            "annotation" => EntityKind::Annotation,
            "cdstub" => EntityKind::CdStub,
            "freedb-disc" => EntityKind::FreeDbDisc,
            "life-span" => EntityKind::LifeSpan,
            "text-representation" => EntityKind::TextRepresentation,
            "artist-list" => EntityKind::ArtistList,
            "release-list" => EntityKind::ReleaseList,
            "release-group-list" => EntityKind::ReleaseGroupList,
            "recording-list" => EntityKind::RecordingList,
            "label-list" => EntityKind::LabelList,
            "work-list" => EntityKind::WorkList,
            "puid-list" => EntityKind::PuidList,
            "isrc-list" => EntityKind::IsrcList,
            "disc-list" => EntityKind::DiscList,
            "medium-list" => EntityKind::MediumList,
            "track-list" => EntityKind::TrackList,
            "alias-list" => EntityKind::AliasList,
            "relation-list" => EntityKind::RelationList,
            "label-info-list" => EntityKind::LabelInfoList,
            "tag-list" => EntityKind::TagList,
            "user-tag-list" => EntityKind::UserTagList,
            "annotation-list" => EntityKind::AnnotationList,
            "cdstub-list" => EntityKind::CdStubList,
            "freedb-disc-list" => EntityKind::FreeDbDiscList,
            "collection-list" => EntityKind::CollectionList,
            _ => return None,
        };
        Some(kind)
    }
}

/// How much of an entity the builder constructs
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Materialization {
    /// Build the entity and everything below it that the policy allows
    #[default]
    Full,
    /// Read the start tag's attributes, discard the children
    AttributesOnly,
    /// Consume the subtree and yield nothing
    Skip,
}

/// Starting point for a policy read from configuration
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyPreset {
    #[default]
    Reference,
    Everything,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PolicySpec {
    preset: PolicyPreset,
    overrides: HashMap<EntityKind, Materialization>,
}

/// Per-kind materialization modes
///
/// Kinds without an explicit entry are built in full.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "PolicySpec")]
pub struct MaterializationPolicy {
    modes: HashMap<EntityKind, Materialization>,
}

impl MaterializationPolicy {
    /// Build every entity kind
    pub fn everything() -> Self {
        Self {
            modes: HashMap::new(),
        }
    }

    /// Policy starting from a preset
    pub fn preset(preset: PolicyPreset) -> Self {
        match preset {
            PolicyPreset::Reference => Self::default(),
            PolicyPreset::Everything => Self::everything(),
        }
    }

    /// Set the mode for one kind
    pub fn with(mut self, kind: EntityKind, mode: Materialization) -> Self {
        self.set(kind, mode);
        self
    }

    pub fn set(&mut self, kind: EntityKind, mode: Materialization) {
        if kind == EntityKind::Metadata {
            log::warn!("<metadata> is always materialized, ignoring {:?}", mode);
            return;
        }
        self.modes.insert(kind, mode);
    }

    pub fn mode(&self, kind: EntityKind) -> Materialization {
        self.modes.get(&kind).copied().unwrap_or_default()
    }
}

impl Default for MaterializationPolicy {
    /// The selection consumers of the catalog currently read: primary
    /// records, credits, ratings and the medium/track structure of releases.
    fn default() -> Self {
        const SKIPPED: &[EntityKind] = &[
            EntityKind::Work,
            EntityKind::Puid,
            EntityKind::Isrc,
            EntityKind::Disc,
            EntityKind::UserRating,
            EntityKind::Collection,
            EntityKind::ArtistList,
            EntityKind::ReleaseList,
            EntityKind::ReleaseGroupList,
            EntityKind::AliasList,
            EntityKind::RecordingList,
            EntityKind::LabelList,
            EntityKind::WorkList,
            EntityKind::IsrcList,
            EntityKind::RelationList,
            EntityKind::AnnotationList,
            EntityKind::CdStubList,
            EntityKind::FreeDbDiscList,
            EntityKind::DiscList,
            EntityKind::TagList,
            EntityKind::UserTagList,
            EntityKind::CollectionList,
        ];

        let mut modes: HashMap<EntityKind, Materialization> = SKIPPED
            .iter()
            .map(|kind| (*kind, Materialization::Skip))
            .collect();
        modes.insert(EntityKind::PuidList, Materialization::AttributesOnly);
        Self { modes }
    }
}

impl From<PolicySpec> for MaterializationPolicy {
    fn from(spec: PolicySpec) -> Self {
        let mut policy = MaterializationPolicy::preset(spec.preset);
        for (kind, mode) in spec.overrides {
            policy.set(kind, mode);
        }
        policy
    }
}

/// Builder configuration
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// Deepest element nesting accepted, counting `<metadata>` as 1
    pub max_depth: usize,
    pub materialize: MaterializationPolicy,
}

impl ParserConfig {
    /// Read a configuration from YAML
    ///
    /// ```yaml
    /// max_depth: 64
    /// materialize:
    ///   preset: reference
    ///   overrides:
    ///     work: full
    ///     relation-list: full
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    pub fn with_policy(mut self, materialize: MaterializationPolicy) -> Self {
        self.materialize = materialize;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            materialize: MaterializationPolicy::default(),
        }
    }
}
