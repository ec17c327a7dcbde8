//! envelope/encode.rs
//!
//! Renders an `Envelope` to its three-line text form:
//!
//! ```text
//! EC v1
//! t=<chain>[;key=value]*
//! <payload>
//! ```
//!
//! No trailing newline is written after the payload.

use std::fmt;

use crate::constants::{attr_keys, ATTRIBUTE_SEPARATOR, HEADER_LINE, KEY_VALUE_SEPARATOR};
use crate::envelope::types::Envelope;

/// Render the declaration line (`t=gz>b64;ct=json`).
pub fn encode_declaration(envelope: &Envelope) -> String {
    let mut line = format!("{}{}{}", attr_keys::TRANSFORM, KEY_VALUE_SEPARATOR, envelope.transform);
    for attr in &envelope.attributes {
        line.push(ATTRIBUTE_SEPARATOR);
        line.push_str(&attr.key);
        line.push(KEY_VALUE_SEPARATOR);
        line.push_str(&attr.value);
    }
    line
}

pub fn encode_envelope(envelope: &Envelope) -> String {
    format!("{}\n{}\n{}", HEADER_LINE, encode_declaration(envelope), envelope.payload)
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_envelope(self))
    }
}
