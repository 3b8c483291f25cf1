//! Tag match types produced by the tokenizers.
//!
//! # Core Types
//!
//! - [`TagMatch`] - A single tag occurrence with codepoint span, kind, and text
//! - [`TagKind`] - Hashtag (`#`) or mention (`@`)
//! - [`TagStream`] - Type alias for boxed iterator of matches
//!
//! Offsets are measured in Unicode scalar values, so a span taken from
//! Arabic or emoji-laden text slices the same characters on every host:
//!
//! ```text
//! Input: "ok #برمجة"
//!
//!   start  = 3   (o, k, space)
//!   length = 6   (#, ب, ر, م, ج, ة)
//! ```
//!
//! # Examples
//!
//! ```
//! use taglink::analysis::token::{TagKind, TagMatch};
//!
//! let tag = TagMatch::new("#iOS", 0, TagKind::Hashtag);
//! assert_eq!(tag.length, 4);
//! assert_eq!(tag.end(), 4);
//! assert_eq!(tag.content(), "iOS");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a tag, decided by its leading marker character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    /// `#`-prefixed token
    Hashtag,
    /// `@`-prefixed token
    Mention,
}

impl TagKind {
    /// The marker character that starts tags of this kind.
    pub fn marker(self) -> char {
        match self {
            TagKind::Hashtag => '#',
            TagKind::Mention => '@',
        }
    }

    /// Classify a marker character.
    pub fn from_marker(c: char) -> Option<Self> {
        match c {
            '#' => Some(TagKind::Hashtag),
            '@' => Some(TagKind::Mention),
            _ => None,
        }
    }

    /// Classify a tag by the first character of its text.
    pub fn of(text: &str) -> Option<Self> {
        text.chars().next().and_then(Self::from_marker)
    }

    /// Check whether `c` terminates a tag.
    pub fn is_boundary(c: char) -> bool {
        c.is_whitespace() || Self::from_marker(c).is_some()
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Hashtag => write!(f, "hashtag"),
            TagKind::Mention => write!(f, "mention"),
        }
    }
}

/// A single tag occurrence in a source text.
///
/// `text` is exactly the source substring at `[start, start + length)` in
/// codepoints, including the leading marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagMatch {
    /// Codepoint offset where the tag starts
    pub start: usize,

    /// Number of codepoints in the tag, marker included
    pub length: usize,

    /// Hashtag or mention
    pub kind: TagKind,

    /// The tag text including its marker
    pub text: String,
}

impl TagMatch {
    /// Create a new match; `length` is derived from `text`.
    pub fn new<S: Into<String>>(text: S, start: usize, kind: TagKind) -> Self {
        let text = text.into();
        TagMatch {
            start,
            length: text.chars().count(),
            kind,
            text,
        }
    }

    /// Codepoint offset one past the last character.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The tag text without its marker.
    pub fn content(&self) -> &str {
        &self.text[self.kind.marker().len_utf8()..]
    }

    /// Check if this match is a hashtag.
    pub fn is_hashtag(&self) -> bool {
        self.kind == TagKind::Hashtag
    }

    /// Check if this match is a mention.
    pub fn is_mention(&self) -> bool {
        self.kind == TagKind::Mention
    }
}

impl fmt::Display for TagMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A tag stream is the ordered sequence of matches from one tokenization.
pub type TagStream = Box<dyn Iterator<Item = TagMatch>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_creation() {
        let tag = TagMatch::new("#برمجة", 10, TagKind::Hashtag);
        assert_eq!(tag.start, 10);
        assert_eq!(tag.length, 6);
        assert_eq!(tag.end(), 16);
        assert_eq!(tag.content(), "برمجة");
        assert!(tag.is_hashtag());
        assert!(!tag.is_mention());
    }

    #[test]
    fn test_kind_markers() {
        assert_eq!(TagKind::of("#abc"), Some(TagKind::Hashtag));
        assert_eq!(TagKind::of("@abc"), Some(TagKind::Mention));
        assert_eq!(TagKind::of("abc"), None);
        assert_eq!(TagKind::of(""), None);
        assert_eq!(TagKind::Mention.marker(), '@');

        assert!(TagKind::is_boundary(' '));
        assert!(TagKind::is_boundary('\u{3000}'));
        assert!(TagKind::is_boundary('#'));
        assert!(!TagKind::is_boundary('_'));
    }

    #[test]
    fn test_match_display() {
        let tag = TagMatch::new("@JaneDoe", 0, TagKind::Mention);
        assert_eq!(format!("{tag}"), "@JaneDoe");
        assert_eq!(TagKind::Mention.to_string(), "mention");
    }

    #[test]
    fn test_match_serialization() {
        let tag = TagMatch::new("#iOS", 4, TagKind::Hashtag);
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(
            json,
            r##"{"start":4,"length":4,"kind":"hashtag","text":"#iOS"}"##
        );
    }
}
