//! Transport encoding for tag text.
//!
//! A tag's text is percent-encoded into an [`EncodedTagRef`] so it can sit
//! inside a synthetic link target (see [`link`]) and survive the trip through
//! a host's generic link-activation machinery. Every byte outside the RFC 3986
//! unreserved set (`A-Z a-z 0-9 - _ . ~`) is escaped, which covers the markers
//! themselves, `%`, `&`, `?`, whitespace and every non-ASCII character.
//!
//! ```
//! use taglink::codec::{decode, encode};
//!
//! let encoded = encode("#a&b?c%d");
//! assert_eq!(encoded.as_str(), "%23a%26b%3Fc%25d");
//! assert_eq!(decode(&encoded).unwrap(), "#a&b?c%d");
//! ```

pub mod link;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaglinkError};

/// Everything except the unreserved characters gets escaped.
const TAG_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encoded tag text, used as an opaque activation identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedTagRef(String);

impl EncodedTagRef {
    /// Wrap a ref received from outside, e.g. from a link activation.
    ///
    /// No validation happens here; [`decode`] rejects malformed refs.
    pub fn new<S: Into<String>>(raw: S) -> Self {
        EncodedTagRef(raw.into())
    }

    /// Get the encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ref, returning the encoded form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EncodedTagRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedTagRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encode tag text into a transport-safe ref.
pub fn encode(text: &str) -> EncodedTagRef {
    EncodedTagRef(utf8_percent_encode(text, TAG_ENCODE_SET).to_string())
}

/// Decode a ref back into the tag text it was made from.
///
/// Fails when the ref contains a character [`encode`] never emits, a `%`
/// without two hex digits after it, or escapes that are not valid UTF-8.
pub fn decode(encoded: &EncodedTagRef) -> Result<String> {
    validate(encoded.as_str())?;

    let text = percent_decode_str(encoded.as_str())
        .decode_utf8()
        .map_err(|e| TaglinkError::decode(format!("{:?} is not UTF-8: {e}", encoded.as_str())))?;

    Ok(text.into_owned())
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

fn validate(raw: &str) -> Result<()> {
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let escape = bytes.get(i + 1..i + 3);
                if !escape.is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit)) {
                    return Err(TaglinkError::decode(format!(
                        "malformed escape at byte {i} of {raw:?}"
                    )));
                }
                i += 3;
            }
            b if is_unreserved(b) => i += 1,
            _ => {
                let c = raw[i..].chars().next().unwrap_or_default();
                return Err(TaglinkError::decode(format!(
                    "unescaped {c:?} at byte {i} of {raw:?}"
                )));
            }
        }
    }

    Ok(())
}
