//! MusicBrainz metadata XML reader
//!
//! Builds a typed [`Metadata`] tree from a web service response in one
//! forward pass over the XML. Which entity kinds get built is decided by a
//! [`MaterializationPolicy`]; everything else is skipped without
//! allocation.
//!
//! ```no_run
//! let metadata = mbxml::parse_str(r#"<metadata><artist id="a1"><name>Nirvana</name></artist></metadata>"#)?;
//! assert_eq!(metadata.artist.unwrap().name.as_deref(), Some("Nirvana"));
//! # Ok::<(), mbxml::ParseError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod parse;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

pub use config::{EntityKind, Materialization, MaterializationPolicy, ParserConfig, PolicyPreset};
pub use error::{ParseError, Result};
pub use models::core::*;
pub use models::elements::*;
pub use models::lists::*;
pub use parse::{Builder, StartTag, Token, TokenList, TokenSource, XmlTokens};

/// Parse a document with the default configuration
pub fn parse<R: BufRead>(reader: R) -> Result<Metadata> {
    parse_with_config(reader, &ParserConfig::default())
}

pub fn parse_str(xml: &str) -> Result<Metadata> {
    parse(xml.as_bytes())
}

pub fn parse_with_config<R: BufRead>(reader: R, config: &ParserConfig) -> Result<Metadata> {
    parse_tokens(XmlTokens::new(reader), config)
}

/// Open and parse a document stored on disk
pub fn parse_file<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<Metadata> {
    let path = path.as_ref();
    debug!("parsing {}", path.display());
    let file = File::open(path)?;
    parse_with_config(BufReader::new(file), config)
}

/// Build a document from an already tokenized stream
pub fn parse_tokens<S: TokenSource>(source: S, config: &ParserConfig) -> Result<Metadata> {
    Builder::new(source, config).parse_document()
}
