//! Token stream consumed by the tree builder
//!
//! The builder only ever sees owned [`Token`]s, one at a time. [`XmlTokens`]
//! produces them from raw XML with quick-xml; [`TokenList`] replays a stream
//! that was tokenized elsewhere.

use crate::error::{ParseError, Result};
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;

/// Start tag with its attributes in document order
#[derive(Clone, Debug, PartialEq)]
pub struct StartTag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl StartTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Value of the first attribute with this name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    Start(StartTag),
    End(String),
    /// Character data, already unescaped
    Text(String),
    Eof,
}

impl Token {
    pub fn start(name: &str, attributes: &[(&str, &str)]) -> Self {
        let tag = attributes
            .iter()
            .fold(StartTag::new(name), |tag, (key, value)| {
                tag.with_attribute(*key, *value)
            });
        Token::Start(tag)
    }

    pub fn end(name: &str) -> Self {
        Token::End(name.to_string())
    }

    pub fn text(text: &str) -> Self {
        Token::Text(text.to_string())
    }
}

/// A source of well-formedness-checked tokens
///
/// Implementations hand out one token per call and keep returning
/// [`Token::Eof`] once the input is exhausted.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token>;

    /// Current offset in the input, used in error reports
    fn position(&self) -> usize;
}

/// quick-xml backed tokenizer
///
/// Self-closing elements are reported as a start tag followed by an end tag.
/// Comments, processing instructions, the XML declaration and DOCTYPE are
/// dropped. Element and attribute names are reported without their prefix.
pub struct XmlTokens<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    pending_end: Option<String>,
}

impl<R: BufRead> XmlTokens<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);

        Self {
            reader,
            buf: Vec::new(),
            pending_end: None,
        }
    }
}

impl<'a> XmlTokens<&'a [u8]> {
    pub fn from_str(xml: &'a str) -> Self {
        Self::new(xml.as_bytes())
    }
}

impl<R: BufRead> TokenSource for XmlTokens<R> {
    fn next_token(&mut self) -> Result<Token> {
        if let Some(name) = self.pending_end.take() {
            return Ok(Token::End(name));
        }

        let decoder = self.reader.decoder();
        loop {
            self.buf.clear();
            let event = match self.reader.read_event_into(&mut self.buf) {
                Ok(event) => event,
                Err(source) => {
                    return Err(ParseError::Xml {
                        position: self.reader.buffer_position(),
                        source,
                    })
                }
            };
            let position = self.reader.buffer_position();
            let xml = |source: quick_xml::Error| ParseError::Xml { position, source };

            let token = match event {
                Event::Start(start) => Token::Start(start_tag(&start, decoder, position)?),
                Event::Empty(start) => {
                    let tag = start_tag(&start, decoder, position)?;
                    self.pending_end = Some(tag.name.clone());
                    Token::Start(tag)
                }
                Event::End(end) => {
                    let local = end.local_name();
                    let name = decoder.decode(local.as_ref()).map_err(xml)?;
                    Token::End(name.into_owned())
                }
                Event::Text(text) => Token::Text(text.unescape().map_err(xml)?.into_owned()),
                Event::CData(cdata) => Token::Text(decoder.decode(&cdata).map_err(xml)?.into_owned()),
                Event::Eof => Token::Eof,
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => continue,
            };
            return Ok(token);
        }
    }

    fn position(&self) -> usize {
        self.reader.buffer_position()
    }
}

fn start_tag(start: &BytesStart<'_>, decoder: Decoder, position: usize) -> Result<StartTag> {
    let xml = |source: quick_xml::Error| ParseError::Xml { position, source };

    let local = start.local_name();
    let name = decoder.decode(local.as_ref()).map_err(xml)?;
    let mut tag = StartTag::new(name.into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml(e.into()))?;
        let local = attr.key.local_name();
        let key = decoder.decode(local.as_ref()).map_err(xml)?;
        let value = attr.unescape_value().map_err(xml)?;
        tag.attributes.push((key.into_owned(), value.into_owned()));
    }
    Ok(tag)
}

/// Replays tokens produced by some other tokenizer
///
/// The position reported is the number of tokens handed out so far.
pub struct TokenList {
    tokens: std::vec::IntoIter<Token>,
    consumed: usize,
}

impl TokenList {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            consumed: 0,
        }
    }
}

impl TokenSource for TokenList {
    fn next_token(&mut self) -> Result<Token> {
        match self.tokens.next() {
            Some(token) => {
                self.consumed += 1;
                Ok(token)
            }
            None => Ok(Token::Eof),
        }
    }

    fn position(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(xml: &str) -> Vec<Token> {
        let mut tokens = XmlTokens::from_str(xml);
        let mut out = Vec::new();
        loop {
            let token = tokens.next_token().expect("well-formed input");
            if token == Token::Eof {
                break;
            }
            out.push(token);
        }
        out
    }

    #[test]
    fn test_empty_element_expands() {
        let tokens = collect(r#"<disc-list count="0"/>"#);
        assert_eq!(
            tokens,
            vec![
                Token::start("disc-list", &[("count", "0")]),
                Token::end("disc-list"),
            ]
        );
    }

    #[test]
    fn test_text_is_unescaped_and_markup_dropped() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- generated --><title>Rock &amp; Roll<![CDATA[ <live>]]></title>"#;
        let tokens = collect(xml);
        let text: String = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(text.trim(), "Rock & Roll <live>");
        assert!(tokens.contains(&Token::start("title", &[])));
        assert!(tokens.contains(&Token::end("title")));
    }

    #[test]
    fn test_prefixes_are_dropped() {
        let tokens = collect(r#"<mb:artist ext:score="100" id="x"></mb:artist>"#);
        match &tokens[0] {
            Token::Start(tag) => {
                assert_eq!(tag.name, "artist");
                assert_eq!(tag.attribute("score"), Some("100"));
                assert_eq!(tag.attribute("id"), Some("x"));
            }
            other => panic!("Expected start tag, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatched_end_is_tokenizer_error() {
        let mut tokens = XmlTokens::from_str("<a><b></a>");
        let mut result = Ok(Token::Eof);
        for _ in 0..4 {
            result = tokens.next_token();
            if result.is_err() {
                break;
            }
        }
        assert!(matches!(result, Err(ParseError::Xml { .. })));
    }

    #[test]
    fn test_token_list_positions() {
        let mut list = TokenList::new(vec![Token::start("a", &[]), Token::end("a")]);
        assert_eq!(list.position(), 0);
        list.next_token().unwrap();
        list.next_token().unwrap();
        assert_eq!(list.position(), 2);
        assert_eq!(list.next_token().unwrap(), Token::Eof);
        assert_eq!(list.next_token().unwrap(), Token::Eof);
    }
}
