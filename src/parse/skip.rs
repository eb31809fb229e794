//! Subtree skipping
//!
//! Consumes an element's descendants without building anything and leaves
//! the stream just past the element's end tag. Iterative, so skipping does
//! not grow the call stack; the nesting limit still applies.

use log::trace;

use super::{Builder, StartTag, Token, TokenSource};
use crate::error::{ParseError, Result};

impl<'c, S: TokenSource> Builder<'c, S> {
    /// Skip an element the reader has no handler for
    pub(crate) fn skip_unknown(&mut self, tag: &StartTag) -> Result<()> {
        trace!("skipping unknown element <{}>", tag.name);
        self.skip_children(&tag.name)
    }

    /// Consume everything through the end tag of the open element `tag`
    pub(crate) fn skip_children(&mut self, tag: &str) -> Result<()> {
        let mut open: Vec<String> = Vec::new();
        loop {
            match self.source.next_token()? {
                Token::Start(child) => {
                    if self.depth + open.len() >= self.config.max_depth {
                        return Err(ParseError::DepthExceeded {
                            tag: child.name,
                            limit: self.config.max_depth,
                            position: self.position(),
                        });
                    }
                    open.push(child.name);
                }
                Token::End(name) => match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => return Err(self.unexpected_tag(&expected, name)),
                    None if name == tag => return Ok(()),
                    None => return Err(self.unexpected_tag(tag, name)),
                },
                Token::Text(_) => {}
                Token::Eof => {
                    let innermost = open.last().map(String::as_str).unwrap_or(tag);
                    return Err(self.unexpected_end(innermost));
                }
            }
        }
    }
}
