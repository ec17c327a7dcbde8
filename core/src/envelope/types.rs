//! envelope/types.rs
//! Envelope struct, declaration attributes and parse errors.
//!
//! Notes:
//! - An envelope is three lines: marker, declaration, payload.
//! - The declaration's first attribute is always `t=<chain>`; remaining
//!   attributes are kept verbatim and in order, uninterpreted.
//! - The chain is stored as declared text; resolving it into steps is the
//!   decoder's job so that malformed chains surface as transform errors.

use std::fmt;

use crate::constants::{attr_keys, DEFAULT_CONTENT_TYPE, ENVELOPE_LINES, HEADER_LINE};
use crate::transform::{TransformChain, TransformError};

/// One `key=value` pair from the declaration line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Declared chain text, e.g. `gz>b64`.
    pub transform: String,
    /// Attributes after `t=`, e.g. `ct=json`.
    pub attributes: Vec<Attribute>,
    /// Final encoded representation, single line.
    pub payload: String,
}

impl Envelope {
    pub fn new(chain: &TransformChain, content_type: &str, payload: impl Into<String>) -> Self {
        Self {
            transform: chain.to_string(),
            attributes: vec![Attribute::new(attr_keys::CONTENT_TYPE, content_type)],
            payload: payload.into(),
        }
    }

    /// Resolve the declared chain into steps.
    pub fn chain(&self) -> Result<TransformChain, TransformError> {
        TransformChain::parse(&self.transform)
    }

    /// First attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.attribute(attr_keys::CONTENT_TYPE)
    }

    /// Content type with the `json` fallback used when `ct=` is absent or blank.
    pub fn content_type_or_default(&self) -> &str {
        match self.content_type() {
            Some(ct) if !ct.trim().is_empty() => ct,
            _ => DEFAULT_CONTENT_TYPE,
        }
    }
}

/// Borrowed view of the three envelope lines, header already checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvelopeLines<'a> {
    pub declaration: &'a str,
    pub payload: &'a str,
}

#[derive(Debug)]
pub enum HeaderError {
    /// First line is not the exact `EC v1` marker.
    InvalidHeader { found: String },
    /// Fewer than three lines.
    Truncated { lines: usize },
    /// Declaration line does not open with `t=<chain>`.
    MissingChain { line: String },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use HeaderError::*;
        match self {
            InvalidHeader { found } =>
                write!(f, "invalid header: expected {:?}, got {:?}", HEADER_LINE, found),
            Truncated { lines } =>
                write!(f, "truncated envelope: expected {} lines, got {}", ENVELOPE_LINES, lines),
            MissingChain { line } =>
                write!(f, "transform chain (t=) not found in {:?}", line),
        }
    }
}

impl std::error::Error for HeaderError {}
