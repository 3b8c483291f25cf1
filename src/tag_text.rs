//! Both directions of the tag-link interface in one value.
//!
//! [`TagText`] is what a UI host holds on to: it hands out [`Annotation`]s
//! for a piece of text and takes link activations back, routing them to the
//! registered handlers.
//!
//! ```
//! use taglink::config::TagTextConfig;
//! use taglink::dispatch::{Activation, TagHandlers};
//! use taglink::tag_text::TagText;
//!
//! let tag_text = TagText::new(
//!     TagTextConfig::new().with_tag_color("blue"),
//!     TagHandlers::new().on_mention(|user| println!("open profile of {user}")),
//! )
//! .unwrap();
//!
//! let annotations = tag_text.annotations(Some("ping @JaneDoe"));
//! assert_eq!(tag_text.on_link_url(&annotations[0].link), Activation::Handled);
//! ```

use std::sync::Arc;

use crate::analysis::token::TagMatch;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTagTokenizer;
use crate::annotate::{Annotation, Annotator};
use crate::codec::EncodedTagRef;
use crate::config::TagTextConfig;
use crate::dispatch::{Activation, Dispatcher, TagHandlers};
use crate::error::Result;

/// Annotator and dispatcher sharing one configuration.
#[derive(Clone)]
pub struct TagText {
    annotator: Annotator,
    dispatcher: Dispatcher,
}

impl TagText {
    /// Create with the default regex tokenizer.
    pub fn new(config: TagTextConfig, handlers: TagHandlers) -> Result<Self> {
        Self::with_tokenizer(config, handlers, Arc::new(RegexTagTokenizer::new()?))
    }

    /// Create with a specific tokenizer.
    pub fn with_tokenizer(
        config: TagTextConfig,
        handlers: TagHandlers,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Result<Self> {
        let annotator = Annotator::with_tokenizer(config.clone(), tokenizer)?;
        let dispatcher = Dispatcher::new(handlers, config);
        Ok(TagText {
            annotator,
            dispatcher,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TagTextConfig {
        self.annotator.config()
    }

    /// Find the tags in `text`.
    pub fn find_tags(&self, text: Option<&str>) -> Vec<TagMatch> {
        self.annotator.find_tags(text)
    }

    /// Build link annotations for `text`.
    pub fn annotations(&self, text: Option<&str>) -> Vec<Annotation> {
        self.annotator.annotate(text)
    }

    /// Handle an activated ref.
    pub fn on_link_activated(&self, encoded: &EncodedTagRef) -> Activation {
        self.dispatcher.on_link_activated(encoded)
    }

    /// Handle an activated link target.
    pub fn on_link_url(&self, url: &str) -> Activation {
        self.dispatcher.on_link_url(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::scan::ScanTagTokenizer;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_annotations_dispatch_back() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let tag_text = TagText::new(
            TagTextConfig::default(),
            TagHandlers::new().on_hashtag(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        )
        .unwrap();

        let annotations = tag_text.annotations(Some("#a #b @c"));
        let handled = annotations
            .iter()
            .filter(|a| tag_text.on_link_activated(&a.encoded).is_handled())
            .count();

        assert_eq!(handled, 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_with_scan_tokenizer() {
        let tag_text = TagText::with_tokenizer(
            TagTextConfig::default(),
            TagHandlers::new(),
            Arc::new(ScanTagTokenizer::new()),
        )
        .unwrap();

        let tags = tag_text.find_tags(Some("#iOS#iPadOS"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tag_text.config().link_path, "/tag");
    }

    #[test]
    fn test_shared_across_threads() {
        let tag_text = Arc::new(TagText::new(TagTextConfig::default(), TagHandlers::new()).unwrap());

        let workers: Vec<_> = (0..4)
            .map(|i| {
                let tag_text = Arc::clone(&tag_text);
                std::thread::spawn(move || {
                    let text = format!("#t{i} @u{i}");
                    tag_text.find_tags(Some(text.as_str())).len()
                })
            })
            .collect();

        for worker in workers {
            assert_eq!(worker.join().unwrap(), 2);
        }
    }
}
