//! Link annotations for the rendering layer.
//!
//! The [`Annotator`] runs a tokenizer over the text and turns each match into
//! an [`Annotation`]: where the tag sits (in codepoints and in UTF-8 bytes),
//! which link target to attach, and the color to paint it with. A renderer
//! overlays these as interactive links and reports activations back through
//! [`crate::dispatch::Dispatcher`].
//!
//! # Examples
//!
//! ```
//! use taglink::annotate::Annotator;
//! use taglink::config::TagTextConfig;
//!
//! let annotator = Annotator::new(TagTextConfig::new().with_tag_color("blue")).unwrap();
//! let annotations = annotator.annotate(Some("café #crème"));
//!
//! assert_eq!(annotations[0].chars, 5..11);
//! assert_eq!(annotations[0].bytes, 6..13);
//! assert_eq!(annotations[0].link, "select:///tag?%23cr%C3%A8me");
//! assert_eq!(annotations[0].color.as_deref(), Some("blue"));
//! ```

use std::iter;
use std::ops::Range;
use std::sync::Arc;

use log::{debug, error};
use serde::Serialize;

use crate::analysis::token::{TagKind, TagMatch};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTagTokenizer;
use crate::codec::link::link_target;
use crate::codec::{EncodedTagRef, encode};
use crate::config::TagTextConfig;
use crate::error::{Result, TaglinkError};

/// One tag, ready to be rendered as a link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Codepoint range of the tag in the source text
    pub chars: Range<usize>,

    /// UTF-8 byte range of the tag in the source text
    pub bytes: Range<usize>,

    /// Hashtag or mention
    pub kind: TagKind,

    /// The tag text including its marker
    pub text: String,

    /// Activation identifier for this tag
    pub encoded: EncodedTagRef,

    /// Synthetic link target wrapping `encoded`
    pub link: String,

    /// Presentation color, passed through from the configuration
    pub color: Option<String>,
}

/// Builds annotations from text.
#[derive(Clone)]
pub struct Annotator {
    tokenizer: Arc<dyn Tokenizer>,
    config: TagTextConfig,
}

impl Annotator {
    /// Create an annotator using the default regex tokenizer.
    pub fn new(config: TagTextConfig) -> Result<Self> {
        Self::with_tokenizer(config, Arc::new(RegexTagTokenizer::new()?))
    }

    /// Create an annotator with a specific tokenizer.
    pub fn with_tokenizer(config: TagTextConfig, tokenizer: Arc<dyn Tokenizer>) -> Result<Self> {
        config.validate()?;
        Ok(Annotator { tokenizer, config })
    }

    /// Get the tokenizer used by this annotator.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the configuration used by this annotator.
    pub fn config(&self) -> &TagTextConfig {
        &self.config
    }

    /// Find tags without building annotations.
    pub fn find_tags(&self, text: Option<&str>) -> Vec<TagMatch> {
        match text {
            Some(text) if !text.is_empty() => self.tokenizer.tokenize(text).collect(),
            _ => Vec::new(),
        }
    }

    /// Build one annotation per tag in `text`.
    ///
    /// A match whose codepoint range does not slice `text` to its own text
    /// is a tokenizer defect: debug builds panic, release builds log it and
    /// skip that match.
    pub fn annotate(&self, text: Option<&str>) -> Vec<Annotation> {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Vec::new();
        };

        let boundaries = char_boundaries(text);
        let mut annotations = Vec::new();

        for tag in self.tokenizer.tokenize(text) {
            match byte_range(text, &boundaries, &tag) {
                Ok(bytes) => annotations.push(self.annotation(tag, bytes)),
                Err(err) => {
                    error!("{} produced a bad match, skipping it: {err}", self.tokenizer.name());
                    if cfg!(debug_assertions) {
                        panic!("{err}");
                    }
                }
            }
        }

        debug!("annotated {} tags in {} chars", annotations.len(), boundaries.len() - 1);
        annotations
    }

    fn annotation(&self, tag: TagMatch, bytes: Range<usize>) -> Annotation {
        let encoded = encode(&tag.text);
        let link = link_target(&encoded, &self.config);

        Annotation {
            chars: tag.start..tag.end(),
            bytes,
            kind: tag.kind,
            text: tag.text,
            encoded,
            link,
            color: self.config.tag_color.clone(),
        }
    }
}

/// Byte offset of every char, plus the text length as the final boundary.
fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(iter::once(text.len()))
        .collect()
}

fn byte_range(text: &str, boundaries: &[usize], tag: &TagMatch) -> Result<Range<usize>> {
    let (Some(&start), Some(&end)) = (boundaries.get(tag.start), boundaries.get(tag.end())) else {
        return Err(TaglinkError::range_mapping(format!(
            "{:?} at {}..{} is outside a text of {} chars",
            tag.text,
            tag.start,
            tag.end(),
            boundaries.len() - 1
        )));
    };

    if text[start..end] != tag.text {
        return Err(TaglinkError::range_mapping(format!(
            "{:?} at {}..{} slices {:?}",
            tag.text,
            tag.start,
            tag.end(),
            &text[start..end]
        )));
    }

    Ok(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::TagStream;
    use crate::codec::decode;

    /// Reports every tag one codepoint too far to the right.
    struct ShiftedTokenizer;

    impl Tokenizer for ShiftedTokenizer {
        fn tokenize(&self, text: &str) -> TagStream {
            let tags: Vec<_> = RegexTagTokenizer::default()
                .tokenize(text)
                .map(|tag| TagMatch { start: tag.start + 1, ..tag })
                .collect();
            Box::new(tags.into_iter())
        }

        fn name(&self) -> &'static str {
            "shifted"
        }
    }

    #[test]
    fn test_annotate() {
        let annotator = Annotator::new(TagTextConfig::default()).unwrap();
        let annotations = annotator.annotate(Some("@JaneDoe likes #iOS#iPadOS"));

        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[0].kind, TagKind::Mention);
        assert_eq!(annotations[0].chars, 0..8);
        assert_eq!(annotations[0].link, "select:///tag?%40JaneDoe");
        assert_eq!(annotations[1].chars, 15..19);
        assert_eq!(annotations[2].chars, 19..26);
        assert_eq!(annotations[2].text, "#iPadOS");
        assert_eq!(annotations[2].color, None);
    }

    #[test]
    fn test_annotate_byte_ranges() {
        let text = "و #برمجة @名前";
        let annotator = Annotator::new(TagTextConfig::default()).unwrap();

        for annotation in annotator.annotate(Some(text)) {
            assert_eq!(&text[annotation.bytes.clone()], annotation.text);
            assert_eq!(decode(&annotation.encoded).unwrap(), annotation.text);
        }
    }

    #[test]
    fn test_annotate_empty() {
        let annotator = Annotator::new(TagTextConfig::default()).unwrap();
        assert!(annotator.annotate(None).is_empty());
        assert!(annotator.annotate(Some("")).is_empty());
        assert!(annotator.annotate(Some("a #")).is_empty());
        assert!(annotator.find_tags(None).is_empty());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = TagTextConfig::new().with_link_scheme("");
        assert!(matches!(
            Annotator::new(config),
            Err(TaglinkError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_byte_range_errors() {
        let text = "ab #c";
        let boundaries = char_boundaries(text);

        let outside = TagMatch::new("#c", 4, TagKind::Hashtag);
        assert!(matches!(
            byte_range(text, &boundaries, &outside),
            Err(TaglinkError::RangeMapping(_))
        ));

        let misplaced = TagMatch::new("#c", 2, TagKind::Hashtag);
        assert!(matches!(
            byte_range(text, &boundaries, &misplaced),
            Err(TaglinkError::RangeMapping(_))
        ));

        let exact = TagMatch::new("#c", 3, TagKind::Hashtag);
        assert_eq!(byte_range(text, &boundaries, &exact).unwrap(), 3..5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Range mapping error")]
    fn test_bad_match_panics_in_debug() {
        let annotator =
            Annotator::with_tokenizer(TagTextConfig::default(), Arc::new(ShiftedTokenizer)).unwrap();
        annotator.annotate(Some("x #a"));
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_bad_match_is_skipped_in_release() {
        let annotator =
            Annotator::with_tokenizer(TagTextConfig::default(), Arc::new(ShiftedTokenizer)).unwrap();
        assert!(annotator.annotate(Some("x #a")).is_empty());
    }
}
