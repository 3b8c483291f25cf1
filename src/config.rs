//! Configuration for tag annotation.
//!
//! [`TagTextConfig`] carries the presentation color handed through to the
//! renderer and the shape of the synthetic link targets. It deserializes from
//! JSON with every field optional.
//!
//! ```
//! use taglink::config::TagTextConfig;
//!
//! let config = TagTextConfig::from_json(r#"{ "tag_color": "blue" }"#).unwrap();
//! assert_eq!(config.tag_color.as_deref(), Some("blue"));
//! assert_eq!(config.link_scheme, "select");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaglinkError};

/// Default scheme of synthetic link targets.
pub const DEFAULT_LINK_SCHEME: &str = "select";

/// Default path of synthetic link targets.
pub const DEFAULT_LINK_PATH: &str = "/tag";

/// Settings shared by the annotator and the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagTextConfig {
    /// Color for tag annotations. Opaque to this crate.
    pub tag_color: Option<String>,

    /// Scheme of link targets, e.g. `select` in `select:///tag?%23abc`.
    pub link_scheme: String,

    /// Path of link targets, e.g. `/tag` in `select:///tag?%23abc`.
    pub link_path: String,
}

impl Default for TagTextConfig {
    fn default() -> Self {
        TagTextConfig {
            tag_color: None,
            link_scheme: DEFAULT_LINK_SCHEME.to_string(),
            link_path: DEFAULT_LINK_PATH.to_string(),
        }
    }
}

impl TagTextConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tag color.
    pub fn with_tag_color<S: Into<String>>(mut self, color: S) -> Self {
        self.tag_color = Some(color.into());
        self
    }

    /// Set the link scheme.
    pub fn with_link_scheme<S: Into<String>>(mut self, scheme: S) -> Self {
        self.link_scheme = scheme.into();
        self
    }

    /// Set the link path.
    pub fn with_link_path<S: Into<String>>(mut self, path: S) -> Self {
        self.link_path = path.into();
        self
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: TagTextConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize this configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that link targets built from this configuration can be parsed back.
    ///
    /// The scheme must follow RFC 3986 (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`)
    /// and the path must not contain `?` or `#`.
    pub fn validate(&self) -> Result<()> {
        let mut scheme = self.link_scheme.chars();
        let valid_scheme = scheme.next().is_some_and(|c| c.is_ascii_alphabetic())
            && scheme.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(TaglinkError::invalid_config(format!(
                "link scheme {:?} is not a valid URI scheme",
                self.link_scheme
            )));
        }

        if self.link_path.contains(['?', '#']) || self.link_path.contains(char::is_whitespace) {
            return Err(TaglinkError::invalid_config(format!(
                "link path {:?} must not contain '?', '#' or whitespace",
                self.link_path
            )));
        }

        Ok(())
    }
}
