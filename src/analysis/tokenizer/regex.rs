//! Regex-based tag tokenizer implementation.

use log::warn;
use regex::Regex;
use std::sync::Arc;

use super::Tokenizer;
use crate::analysis::token::{TagKind, TagMatch, TagStream};
use crate::error::{Result, TaglinkError};

/// The tag rule: a marker followed by one or more non-whitespace, non-marker characters.
pub const TAG_PATTERN: &str = r"[#@][^\s#@]+";

/// A regex-based tokenizer that extracts tags using a regular expression.
///
/// Regex matches carry byte offsets; they are converted to codepoint offsets
/// in a single forward pass over the text.
#[derive(Clone, Debug)]
pub struct RegexTagTokenizer {
    /// The regex pattern used to extract tags
    pattern: Arc<Regex>,
}

impl RegexTagTokenizer {
    /// Create a new regex tokenizer with the default pattern [`TAG_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(TAG_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    ///
    /// Matches that do not begin with `#` or `@` are skipped at tokenize time.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| TaglinkError::pattern_compile(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTagTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTagTokenizer {
    fn default() -> Self {
        Self::new().expect("Default tag pattern should be valid")
    }
}

impl Tokenizer for RegexTagTokenizer {
    fn tokenize(&self, text: &str) -> TagStream {
        let mut tags = Vec::new();
        let mut byte_cursor = 0;
        let mut char_cursor = 0;

        for mat in self.pattern.find_iter(text) {
            char_cursor += text[byte_cursor..mat.start()].chars().count();
            byte_cursor = mat.start();

            let Some(kind) = TagKind::of(mat.as_str()) else {
                warn!(
                    "pattern {:?} matched {:?}, which has no tag marker",
                    self.pattern.as_str(),
                    mat.as_str()
                );
                continue;
            };

            let tag = TagMatch::new(mat.as_str(), char_cursor, kind);
            char_cursor += tag.length;
            byte_cursor = mat.end();
            tags.push(tag);
        }

        Box::new(tags.into_iter())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
