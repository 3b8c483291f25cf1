//! # Taglink
//!
//! Hashtag and mention detection for plain text, with reversible link
//! targets so a UI can render tags as links and route taps back to handlers.
//!
//! ## Features
//!
//! - Codepoint-correct tag spans for any script
//! - Two interchangeable tokenizers (regex and character scan)
//! - Percent-encoded activation refs that round-trip exactly
//! - Kind-based dispatch to optional handlers
//!
//! ```
//! use taglink::analysis::tokenizer::find_tags;
//! use taglink::codec::{decode, encode};
//!
//! let tags = find_tags(Some("@JaneDoe recommends #SwiftLang"));
//! assert_eq!(tags[1].start, 20);
//! assert_eq!(decode(&encode(&tags[1].text)).unwrap(), "#SwiftLang");
//! ```

pub mod analysis;
pub mod annotate;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod tag_text;

pub mod prelude {
    pub use crate::analysis::token::{TagKind, TagMatch};
    pub use crate::analysis::tokenizer::{Tokenizer, find_tags};
    pub use crate::annotate::{Annotation, Annotator};
    pub use crate::codec::{EncodedTagRef, decode, encode};
    pub use crate::config::TagTextConfig;
    pub use crate::dispatch::{Activation, Dispatcher, TagHandlers};
    pub use crate::error::{Result, TaglinkError};
    pub use crate::tag_text::TagText;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
