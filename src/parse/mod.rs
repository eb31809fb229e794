//! Tree builder for metadata documents
//!
//! A recursive-descent builder over a [`TokenSource`]. Every entity reader
//! starts right after its own start tag and returns right after its own end
//! tag, so a caller can always resume with the next sibling. Subtrees the
//! builder does not know, or that the policy says not to build, are consumed
//! without constructing anything.
//!
//! Recursion depth follows element nesting and is bounded by
//! [`ParserConfig::max_depth`].

pub mod tokens;

mod elements;
mod leaf;
mod lists;
mod records;
mod skip;

use log::debug;

use crate::config::{EntityKind, Materialization, ParserConfig};
use crate::error::{ParseError, Result};
use crate::models::Metadata;

pub use tokens::{StartTag, Token, TokenList, TokenSource, XmlTokens};

/// Name of the document root element
pub const ROOT_TAG: &str = "metadata";

/// One element kind the builder can construct
///
/// Readers are entered with the start tag already consumed (and counted in
/// the builder's depth) and must consume everything through the matching
/// end tag.
pub(crate) trait Entity: Sized {
    const KIND: EntityKind;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self>;

    /// Value built from the start tag alone, for
    /// [`Materialization::AttributesOnly`]. Entities whose content is their
    /// character data return `None` and are read in full instead.
    fn from_attributes<S: TokenSource>(
        _b: &Builder<'_, S>,
        _tag: &StartTag,
    ) -> Result<Option<Self>> {
        Ok(None)
    }
}

/// Builds one [`Metadata`] document from a token stream
pub struct Builder<'c, S> {
    source: S,
    config: &'c ParserConfig,
    /// Number of currently open elements
    depth: usize,
}

impl<'c, S: TokenSource> Builder<'c, S> {
    pub fn new(source: S, config: &'c ParserConfig) -> Self {
        Self {
            source,
            config,
            depth: 0,
        }
    }

    /// Find the top-level `<metadata>` element and build it
    ///
    /// Other top-level elements before it are skipped. Nothing after its end
    /// tag is read.
    pub fn parse_document(mut self) -> Result<Metadata> {
        loop {
            match self.source.next_token()? {
                Token::Start(tag) => {
                    self.descend(&tag.name)?;
                    if tag.name == ROOT_TAG {
                        let metadata = Metadata::read(&mut self, &tag)?;
                        debug!("built <{}> document", ROOT_TAG);
                        return Ok(metadata);
                    }
                    self.skip_unknown(&tag)?;
                    self.depth -= 1;
                }
                Token::End(name) => return Err(self.unexpected_tag(ROOT_TAG, name)),
                Token::Text(_) => {}
                Token::Eof => {
                    return Err(ParseError::MissingElement {
                        tag: ROOT_TAG.to_string(),
                    })
                }
            }
        }
    }

    /// Read the children of the open element `tag` through its end tag
    ///
    /// `on_child` is called for each child start tag and must consume that
    /// child through its own end tag. Character data between children is
    /// ignored.
    pub(crate) fn children<F>(&mut self, tag: &str, mut on_child: F) -> Result<()>
    where
        F: FnMut(&mut Self, StartTag) -> Result<()>,
    {
        loop {
            match self.source.next_token()? {
                Token::Start(child) => {
                    self.descend(&child.name)?;
                    on_child(self, child)?;
                    self.depth -= 1;
                }
                Token::End(name) if name == tag => return Ok(()),
                Token::End(name) => return Err(self.unexpected_tag(tag, name)),
                Token::Text(_) => {}
                Token::Eof => return Err(self.unexpected_end(tag)),
            }
        }
    }

    /// Read an entity as far as the policy allows
    ///
    /// Returns `None` when the entity is skipped.
    pub(crate) fn entity<T: Entity>(&mut self, tag: &StartTag) -> Result<Option<T>> {
        match self.mode(T::KIND) {
            Materialization::Full => T::read(self, tag).map(Some),
            Materialization::AttributesOnly => match T::from_attributes(self, tag)? {
                Some(value) => {
                    debug!("reading only the attributes of <{}>", tag.name);
                    self.skip_children(&tag.name)?;
                    Ok(Some(value))
                }
                None => T::read(self, tag).map(Some),
            },
            Materialization::Skip => {
                debug!("skipping <{}> by policy", tag.name);
                self.skip_children(&tag.name)?;
                Ok(None)
            }
        }
    }

    fn mode(&self, kind: EntityKind) -> Materialization {
        if kind == EntityKind::Metadata {
            return Materialization::Full;
        }
        self.config.materialize.mode(kind)
    }

    /// Account for a newly opened element
    fn descend(&mut self, tag: &str) -> Result<()> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::DepthExceeded {
                tag: tag.to_string(),
                limit: self.config.max_depth,
                position: self.source.position(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn position(&self) -> usize {
        self.source.position()
    }

    pub(crate) fn unexpected_end(&self, tag: &str) -> ParseError {
        ParseError::UnexpectedEnd {
            tag: tag.to_string(),
            position: self.source.position(),
        }
    }

    pub(crate) fn unexpected_tag(&self, expected: &str, found: String) -> ParseError {
        ParseError::UnexpectedTag {
            expected: expected.to_string(),
            found,
            position: self.source.position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MaterializationPolicy;

    fn build(tokens: Vec<Token>, config: &ParserConfig) -> Result<Metadata> {
        Builder::new(TokenList::new(tokens), config).parse_document()
    }

    #[test]
    fn test_document_without_root_is_missing_element() {
        let config = ParserConfig::default();
        let err = build(vec![Token::text("\n")], &config).unwrap_err();
        assert!(matches!(err, ParseError::MissingElement { ref tag } if tag == "metadata"));

        let err = build(
            vec![Token::start("html", &[]), Token::end("html")],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::MissingElement { .. }));
    }

    #[test]
    fn test_truncated_root_is_unexpected_end() {
        let config = ParserConfig::default();
        let err = build(
            vec![Token::start("metadata", &[("generator", "test")])],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedEnd { ref tag, .. } if tag == "metadata"));
    }

    #[test]
    fn test_stray_end_tag_is_unexpected_tag() {
        let config = ParserConfig::default();
        let err = build(
            vec![
                Token::start("metadata", &[]),
                Token::start("artist", &[("id", "a1")]),
                Token::end("release"),
            ],
            &config,
        )
        .unwrap_err();
        match err {
            ParseError::UnexpectedTag {
                expected, found, ..
            } => {
                assert_eq!(expected, "artist");
                assert_eq!(found, "release");
            }
            other => panic!("Expected UnexpectedTag, got {:?}", other),
        }
    }

    #[test]
    fn test_root_is_built_regardless_of_policy() {
        let config = ParserConfig::default().with_policy(
            MaterializationPolicy::everything().with(EntityKind::Metadata, Materialization::Skip),
        );
        let metadata = build(
            vec![
                Token::start("metadata", &[("generator", "test")]),
                Token::end("metadata"),
            ],
            &config,
        )
        .expect("document");
        assert_eq!(metadata.generator.as_deref(), Some("test"));
    }

    #[test]
    fn test_depth_limit() {
        let config = ParserConfig::default().with_max_depth(3);
        let tokens = vec![
            Token::start("metadata", &[]),
            Token::start("artist", &[("id", "a1")]),
            Token::start("life-span", &[]),
            Token::start("begin", &[]),
            Token::text("1970"),
            Token::end("begin"),
            Token::end("life-span"),
            Token::end("artist"),
            Token::end("metadata"),
        ];
        let err = build(tokens.clone(), &config).unwrap_err();
        match err {
            ParseError::DepthExceeded { tag, limit, .. } => {
                assert_eq!(tag, "begin");
                assert_eq!(limit, 3);
            }
            other => panic!("Expected DepthExceeded, got {:?}", other),
        }

        let config = ParserConfig::default().with_max_depth(4);
        let metadata = build(tokens, &config).expect("within limit");
        let life_span = metadata.artist.unwrap().life_span.unwrap();
        assert_eq!(life_span.begin.as_deref(), Some("1970"));
    }
}
