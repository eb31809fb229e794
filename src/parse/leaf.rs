//! Leaf extractors
//!
//! Character data fields and the attribute helpers shared by all readers.

use super::{Builder, Entity, StartTag, Token, TokenSource};
use crate::config::EntityKind;
use crate::error::{ParseError, Result};
use crate::models::{Alias, Rating, UserRating};

impl<'c, S: TokenSource> Builder<'c, S> {
    /// Accumulate the character data of `tag` through its end tag
    ///
    /// A child element inside a text field means the caller is reading at
    /// the wrong level and fails the parse.
    pub(crate) fn text(&mut self, tag: &StartTag) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.source.next_token()? {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::End(name) if name == tag.name => return Ok(text),
                Token::End(name) => return Err(self.unexpected_tag(&tag.name, name)),
                Token::Start(child) => return Err(self.unexpected_tag(&tag.name, child.name)),
                Token::Eof => return Err(self.unexpected_end(&tag.name)),
            }
        }
    }

    /// Character data of `tag` as a non-negative integer
    ///
    /// Surrounding whitespace is ignored.
    pub(crate) fn unsigned(&mut self, tag: &StartTag) -> Result<u64> {
        let text = self.text(tag)?;
        match text.trim().parse::<u64>() {
            Ok(value) => Ok(value),
            Err(_) => Err(self.invalid_number(&tag.name, text)),
        }
    }

    /// Identifier attribute the record cannot exist without
    pub(crate) fn required_attribute(&self, tag: &StartTag, name: &str) -> Result<String> {
        match tag.attribute(name) {
            Some("") => Err(self.invalid_attribute(tag, name, "")),
            Some(value) => Ok(value.to_string()),
            None => Err(ParseError::MissingAttribute {
                tag: tag.name.clone(),
                attribute: name.to_string(),
                position: self.position(),
            }),
        }
    }

    pub(crate) fn optional_attribute(&self, tag: &StartTag, name: &str) -> Option<String> {
        tag.attribute(name).map(str::to_string)
    }

    pub(crate) fn unsigned_attribute(&self, tag: &StartTag, name: &str) -> Result<Option<u64>> {
        match tag.attribute(name) {
            Some(value) => value
                .parse::<u64>()
                .map(Some)
                .map_err(|_| self.invalid_attribute(tag, name, value)),
            None => Ok(None),
        }
    }

    fn invalid_attribute(&self, tag: &StartTag, name: &str, value: &str) -> ParseError {
        ParseError::InvalidAttribute {
            tag: tag.name.clone(),
            attribute: name.to_string(),
            value: value.to_string(),
            position: self.position(),
        }
    }

    fn invalid_number(&self, field: &str, text: String) -> ParseError {
        ParseError::InvalidNumber {
            field: field.to_string(),
            text,
            position: self.position(),
        }
    }
}

impl Entity for Rating {
    const KIND: EntityKind = EntityKind::Rating;

    /// `<rating votes-count="n">4.5</rating>`
    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let votes_count = b.unsigned_attribute(tag, "votes-count")?;
        let text = b.text(tag)?;
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => Ok(Rating::new(votes_count, value)),
            _ => Err(b.invalid_number(&tag.name, text)),
        }
    }
}

impl Entity for UserRating {
    const KIND: EntityKind = EntityKind::UserRating;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let value = b.unsigned(tag)?;
        Ok(UserRating { value })
    }
}

impl Entity for Alias {
    const KIND: EntityKind = EntityKind::Alias;

    fn read<S: TokenSource>(b: &mut Builder<'_, S>, tag: &StartTag) -> Result<Self> {
        let locale = b.optional_attribute(tag, "locale");
        let text = b.text(tag)?;
        Ok(Alias { locale, text })
    }
}
