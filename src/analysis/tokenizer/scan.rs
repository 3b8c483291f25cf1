//! Character-scanning tag tokenizer.
//!
//! Applies the same rule as [`super::regex::RegexTagTokenizer`] without a
//! regex engine: one pass over `char_indices`, counting codepoints as it
//! goes. Useful where compiling a pattern is unwanted, and as a cross-check
//! for the regex rule.
//!
//! # Examples
//!
//! ```
//! use taglink::analysis::tokenizer::Tokenizer;
//! use taglink::analysis::tokenizer::scan::ScanTagTokenizer;
//!
//! let tokenizer = ScanTagTokenizer::new();
//! let tags: Vec<_> = tokenizer.tokenize("@JaneDoe uses #SwiftLang").collect();
//! assert_eq!(tags[0].text, "@JaneDoe");
//! assert_eq!(tags[1].start, 14);
//! ```

use crate::analysis::token::{TagKind, TagMatch, TagStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that walks the text one character at a time.
#[derive(Clone, Debug, Default)]
pub struct ScanTagTokenizer;

/// A tag being accumulated.
struct Open {
    kind: TagKind,
    start_char: usize,
    start_byte: usize,
}

impl ScanTagTokenizer {
    /// Create a new scanning tokenizer.
    pub fn new() -> Self {
        ScanTagTokenizer
    }

    /// Close `open` at `end_byte`, keeping it only if something follows the marker.
    fn close(text: &str, open: Option<Open>, end_byte: usize, tags: &mut Vec<TagMatch>) {
        if let Some(open) = open {
            let marker_len = open.kind.marker().len_utf8();
            if end_byte > open.start_byte + marker_len {
                tags.push(TagMatch::new(
                    &text[open.start_byte..end_byte],
                    open.start_char,
                    open.kind,
                ));
            }
        }
    }
}

impl Tokenizer for ScanTagTokenizer {
    fn tokenize(&self, text: &str) -> TagStream {
        let mut tags = Vec::new();
        let mut open: Option<Open> = None;

        for (char_pos, (byte_pos, c)) in text.char_indices().enumerate() {
            if !TagKind::is_boundary(c) {
                continue;
            }

            Self::close(text, open.take(), byte_pos, &mut tags);

            // Whitespace only ends a tag, a marker also starts the next one.
            open = TagKind::from_marker(c).map(|kind| Open {
                kind,
                start_char: char_pos,
                start_byte: byte_pos,
            });
        }

        Self::close(text, open, text.len(), &mut tags);

        Box::new(tags.into_iter())
    }

    fn name(&self) -> &'static str {
        "scan"
    }
}
