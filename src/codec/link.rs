//! Synthetic link targets carrying an encoded tag.
//!
//! A link target has the form `{scheme}://{path}?{ref}`; with the default
//! configuration that is `select:///tag?%23SwiftLang`. The ref is the whole
//! query, so nothing else may appear after `?`.

use crate::codec::EncodedTagRef;
use crate::config::TagTextConfig;
use crate::error::{Result, TaglinkError};

/// Build the link target for an encoded ref.
pub fn link_target(encoded: &EncodedTagRef, config: &TagTextConfig) -> String {
    format!("{}://{}?{}", config.link_scheme, config.link_path, encoded)
}

/// Extract the encoded ref from a link target.
///
/// The scheme is compared case-insensitively, the path exactly.
pub fn parse_link_target(url: &str, config: &TagTextConfig) -> Result<EncodedTagRef> {
    let (scheme, rest) = url
        .split_once("://")
        .ok_or_else(|| TaglinkError::decode(format!("{url:?} has no scheme")))?;

    if !scheme.eq_ignore_ascii_case(&config.link_scheme) {
        return Err(TaglinkError::decode(format!(
            "{url:?} does not use the {:?} scheme",
            config.link_scheme
        )));
    }

    let (path, query) = rest
        .split_once('?')
        .ok_or_else(|| TaglinkError::decode(format!("{url:?} has no query")))?;

    if path != config.link_path {
        return Err(TaglinkError::decode(format!(
            "{url:?} does not point at {:?}",
            config.link_path
        )));
    }

    Ok(EncodedTagRef::new(query))
}
