//! Routing of activated tags to caller-supplied handlers.
//!
//! When the rendering layer reports that a link was activated, the
//! [`Dispatcher`] decodes the ref, looks at the leading marker and calls
//! exactly one handler: the hashtag handler for `#`, the mention handler for
//! `@`. Anything it cannot route is absorbed and reported as
//! [`Activation::Ignored`].
//!
//! # Examples
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use taglink::codec::encode;
//! use taglink::config::TagTextConfig;
//! use taglink::dispatch::{Activation, Dispatcher, TagHandlers};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let handlers = TagHandlers::new().on_hashtag(move |tag| sink.lock().unwrap().push(tag.to_string()));
//! let dispatcher = Dispatcher::new(handlers, TagTextConfig::default());
//!
//! assert_eq!(dispatcher.on_link_activated(&encode("#abc")), Activation::Handled);
//! assert_eq!(dispatcher.on_link_activated(&encode("@abc")), Activation::Ignored);
//! assert_eq!(*seen.lock().unwrap(), vec!["#abc"]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::token::TagKind;
use crate::codec::link::parse_link_target;
use crate::codec::{EncodedTagRef, decode};
use crate::config::TagTextConfig;

/// A handler receiving the decoded tag text, marker included.
pub type TagHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Outcome of an activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// A handler ran.
    Handled,
    /// The ref did not decode, or no handler is registered for its kind.
    Ignored,
}

impl Activation {
    /// Check if a handler ran.
    pub fn is_handled(self) -> bool {
        self == Activation::Handled
    }
}

/// Optional handlers, one per tag kind.
///
/// A missing handler means activations of that kind are ignored.
#[derive(Clone, Default)]
pub struct TagHandlers {
    hashtag: Option<TagHandler>,
    mention: Option<TagHandler>,
}

impl TagHandlers {
    /// Create an empty handler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for hashtags.
    pub fn on_hashtag<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.hashtag = Some(Arc::new(handler));
        self
    }

    /// Register the handler for mentions.
    pub fn on_mention<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.mention = Some(Arc::new(handler));
        self
    }

    /// Get the handler for a kind, if registered.
    pub fn get(&self, kind: TagKind) -> Option<&TagHandler> {
        match kind {
            TagKind::Hashtag => self.hashtag.as_ref(),
            TagKind::Mention => self.mention.as_ref(),
        }
    }
}

impl fmt::Debug for TagHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagHandlers")
            .field("hashtag", &self.hashtag.is_some())
            .field("mention", &self.mention.is_some())
            .finish()
    }
}

/// Decodes activated refs and routes them by kind.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    handlers: TagHandlers,
    config: TagTextConfig,
}

impl Dispatcher {
    /// Create a dispatcher. `config` decides which link targets [`Self::on_link_url`] accepts.
    pub fn new(handlers: TagHandlers, config: TagTextConfig) -> Self {
        Dispatcher { handlers, config }
    }

    /// Get the registered handlers.
    pub fn handlers(&self) -> &TagHandlers {
        &self.handlers
    }

    /// Handle an activated ref.
    pub fn on_link_activated(&self, encoded: &EncodedTagRef) -> Activation {
        match decode(encoded) {
            Ok(text) => self.route(&text),
            Err(err) => {
                debug!("ignoring activation: {err}");
                Activation::Ignored
            }
        }
    }

    /// Handle an activated link target such as `select:///tag?%23abc`.
    pub fn on_link_url(&self, url: &str) -> Activation {
        match parse_link_target(url, &self.config) {
            Ok(encoded) => self.on_link_activated(&encoded),
            Err(err) => {
                debug!("ignoring activation: {err}");
                Activation::Ignored
            }
        }
    }

    /// Call the handler for already-decoded tag text.
    pub fn route(&self, text: &str) -> Activation {
        let Some(kind) = TagKind::of(text) else {
            debug!("ignoring activation of {text:?}: no tag marker");
            return Activation::Ignored;
        };

        match self.handlers.get(kind) {
            Some(handler) => {
                handler(text);
                Activation::Handled
            }
            None => {
                debug!("ignoring activation of {text:?}: no {kind} handler");
                Activation::Ignored
            }
        }
    }
}
