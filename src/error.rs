//! Error types for metadata document parsing
//!
//! Every variant is fatal to the whole parse: a document with a malformed
//! subtree is rejected rather than returned with fields missing.

use thiserror::Error;

/// Fatal parsing errors
///
/// `position` is the tokenizer's byte offset when the error was raised
/// (or the token index for pre-tokenized streams).
#[derive(Debug, Error)]
pub enum ParseError {
    /// The expected top-level element never appeared
    #[error("missing <{tag}> element")]
    MissingElement { tag: String },

    /// The stream ended while an element was still open
    #[error("unexpected end of document inside <{tag}> at position {position}")]
    UnexpectedEnd { tag: String, position: usize },

    /// A tag that does not belong to the currently open element
    #[error("unexpected tag <{found}> inside <{expected}> at position {position}")]
    UnexpectedTag {
        expected: String,
        found: String,
        position: usize,
    },

    /// A required identifier attribute was absent
    #[error("missing attribute '{attribute}' on <{tag}> at position {position}")]
    MissingAttribute {
        tag: String,
        attribute: String,
        position: usize,
    },

    /// An attribute value could not be coerced to its type
    #[error("invalid value '{value}' for attribute '{attribute}' on <{tag}> at position {position}")]
    InvalidAttribute {
        tag: String,
        attribute: String,
        value: String,
        position: usize,
    },

    /// Element text could not be parsed as a number
    #[error("invalid number '{text}' in <{field}> at position {position}")]
    InvalidNumber {
        field: String,
        text: String,
        position: usize,
    },

    /// Element nesting went past the configured limit
    #[error("<{tag}> at position {position} exceeds the maximum nesting depth of {limit}")]
    DepthExceeded {
        tag: String,
        limit: usize,
        position: usize,
    },

    /// Well-formedness error reported by the tokenizer
    #[error("xml error at position {position}: {source}")]
    Xml {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    /// The input could not be opened
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Tag or field name the error refers to, when there is one
    pub fn tag(&self) -> Option<&str> {
        match self {
            ParseError::MissingElement { tag }
            | ParseError::UnexpectedEnd { tag, .. }
            | ParseError::MissingAttribute { tag, .. }
            | ParseError::InvalidAttribute { tag, .. }
            | ParseError::DepthExceeded { tag, .. } => Some(tag),
            ParseError::UnexpectedTag { expected, .. } => Some(expected),
            ParseError::InvalidNumber { field, .. } => Some(field),
            ParseError::Xml { .. } | ParseError::Io(_) => None,
        }
    }

    /// Position in the token stream, when the error came from the stream
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedEnd { position, .. }
            | ParseError::UnexpectedTag { position, .. }
            | ParseError::MissingAttribute { position, .. }
            | ParseError::InvalidAttribute { position, .. }
            | ParseError::InvalidNumber { position, .. }
            | ParseError::DepthExceeded { position, .. }
            | ParseError::Xml { position, .. } => Some(*position),
            ParseError::MissingElement { .. } | ParseError::Io(_) => None,
        }
    }
}

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_tag() {
        let err = ParseError::UnexpectedEnd {
            tag: "release".to_string(),
            position: 42,
        };
        assert_eq!(
            err.to_string(),
            "unexpected end of document inside <release> at position 42"
        );
        assert_eq!(err.tag(), Some("release"));
        assert_eq!(err.position(), Some(42));
    }

    #[test]
    fn test_missing_element_has_no_position() {
        let err = ParseError::MissingElement {
            tag: "metadata".to_string(),
        };
        assert_eq!(err.to_string(), "missing <metadata> element");
        assert_eq!(err.position(), None);
    }
}
