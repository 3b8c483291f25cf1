//! Tokenizer implementations for tag detection.
//!
//! A tag token is a maximal run starting at `#` or `@` and continuing through
//! every following character that is not whitespace, `#`, or `@`. At least one
//! such character must follow the marker, so a bare `#` is never a tag.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTagTokenizer`] - Pattern-based, the default
//! - [`scan::ScanTagTokenizer`] - Single pass over `char`s, no regex engine
//!
//! # Examples
//!
//! ```
//! use taglink::analysis::tokenizer::Tokenizer;
//! use taglink::analysis::tokenizer::regex::RegexTagTokenizer;
//!
//! let tokenizer = RegexTagTokenizer::new().unwrap();
//! let tags: Vec<_> = tokenizer.tokenize("#iOS#iPadOS").collect();
//! assert_eq!(tags.len(), 2);
//! assert_eq!(tags[1].text, "#iPadOS");
//! assert_eq!(tags[1].start, 4);
//! ```

use lazy_static::lazy_static;

use self::regex::RegexTagTokenizer;
use crate::analysis::token::{TagMatch, TagStream};

lazy_static! {
    static ref DEFAULT_TOKENIZER: RegexTagTokenizer = RegexTagTokenizer::default();
}

/// Trait for tokenizers that find tags in text.
///
/// Construction may fail, tokenizing may not: once built, a tokenizer is a
/// pure function of its input. The trait requires `Send + Sync` so one
/// instance can serve concurrent callers.
///
/// # Examples
///
/// Implementing a custom tokenizer:
///
/// ```
/// use taglink::analysis::token::{TagKind, TagMatch, TagStream};
/// use taglink::analysis::tokenizer::Tokenizer;
///
/// /// Only recognizes tags at the very start of the text.
/// struct LeadingTagTokenizer;
///
/// impl Tokenizer for LeadingTagTokenizer {
///     fn tokenize(&self, text: &str) -> TagStream {
///         let word = text.split_whitespace().next().unwrap_or("");
///         let tags: Vec<TagMatch> = TagKind::of(word)
///             .filter(|_| word.chars().count() > 1)
///             .filter(|_| text.starts_with(word))
///             .map(|kind| TagMatch::new(word, 0, kind))
///             .into_iter()
///             .collect();
///         Box::new(tags.into_iter())
///     }
///
///     fn name(&self) -> &'static str {
///         "leading"
///     }
/// }
///
/// let tags: Vec<_> = LeadingTagTokenizer.tokenize("@bob hi").collect();
/// assert_eq!(tags[0].text, "@bob");
/// ```
pub trait Tokenizer: Send + Sync {
    /// Find every tag in `text`, in left-to-right order.
    ///
    /// Offsets in the returned matches are codepoint offsets.
    fn tokenize(&self, text: &str) -> TagStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Find tags with the default tokenizer.
///
/// `None` and the empty string both produce an empty vector.
///
/// ```
/// use taglink::analysis::tokenizer::find_tags;
///
/// assert!(find_tags(None).is_empty());
/// assert!(find_tags(Some("a #")).is_empty());
/// assert_eq!(find_tags(Some("hi @bob"))[0].start, 3);
/// ```
pub fn find_tags(text: Option<&str>) -> Vec<TagMatch> {
    match text {
        Some(text) if !text.is_empty() => DEFAULT_TOKENIZER.tokenize(text).collect(),
        _ => Vec::new(),
    }
}

// Individual tokenizer modules
pub mod regex;
pub mod scan;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TagKind;

    #[test]
    fn test_find_tags_empty() {
        assert!(find_tags(None).is_empty());
        assert!(find_tags(Some("")).is_empty());
        assert!(find_tags(Some("   ")).is_empty());
    }

    #[test]
    fn test_find_tags_idempotent() {
        let text = "@alice likes #rust and #café@bob";
        let first = find_tags(Some(text));
        let second = find_tags(Some(text));
        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert_eq!(first[3], TagMatch::new("@bob", 28, TagKind::Mention));
    }
}
