//! envelope/decode.rs
//!
//! Envelope parsing.
//!
//! Design notes:
//! - Lines split on `\n`, one trailing `\r` stripped per line; anything after
//!   the third line is ignored. A trailing newline after the declaration
//!   yields an empty payload line rather than a short envelope.
//! - The header check runs first, so garbage input reports `InvalidHeader`
//!   before any line-count complaint.
//! - The chain is the text after the first `=` of the first `;` segment, up
//!   to any second `=`.

use crate::constants::{attr_keys, ATTRIBUTE_SEPARATOR, ENVELOPE_LINES, HEADER_LINE, KEY_VALUE_SEPARATOR};
use crate::envelope::types::{Attribute, Envelope, EnvelopeLines, HeaderError};

/// Check the marker and return the declaration and payload lines.
///
/// The declaration is not interpreted here.
pub fn split_envelope(text: &str) -> Result<EnvelopeLines<'_>, HeaderError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .take(ENVELOPE_LINES)
        .collect();

    let header = lines.first().copied().unwrap_or("");
    if header != HEADER_LINE {
        return Err(HeaderError::InvalidHeader { found: header.to_string() });
    }
    if lines.len() < ENVELOPE_LINES {
        return Err(HeaderError::Truncated { lines: lines.len() });
    }

    Ok(EnvelopeLines { declaration: lines[1], payload: lines[2] })
}

/// Extract the chain text and trailing attributes from a declaration line.
pub fn decode_declaration(line: &str) -> Result<(String, Vec<Attribute>), HeaderError> {
    let mut segments = line.split(ATTRIBUTE_SEPARATOR);
    let first = segments.next().unwrap_or("");

    let mut parts = first.split(KEY_VALUE_SEPARATOR);
    let key = parts.next().unwrap_or("");
    let chain = match (key, parts.next()) {
        (attr_keys::TRANSFORM, Some(chain)) => chain.to_string(),
        _ => return Err(HeaderError::MissingChain { line: line.to_string() }),
    };

    let attributes = segments
        .map(|seg| match seg.split_once(KEY_VALUE_SEPARATOR) {
            Some((k, v)) => Attribute::new(k, v),
            None => Attribute::new(seg, ""),
        })
        .collect();

    Ok((chain, attributes))
}

pub fn parse_envelope(text: &str) -> Result<Envelope, HeaderError> {
    let lines = split_envelope(text)?;
    let (transform, attributes) = decode_declaration(lines.declaration)?;
    Ok(Envelope {
        transform,
        attributes,
        payload: lines.payload.to_string(),
    })
}

/// Forgiving parse used by the validator.
///
/// Blank lines are dropped before counting, the marker, declaration and
/// payload lines are trimmed, and `t=` may appear at any position in the
/// declaration (the last occurrence wins). A `t=` with an empty chain counts
/// as missing. Only the first line after the declaration is the payload.
pub fn parse_envelope_lenient(text: &str) -> Result<Envelope, HeaderError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect();

    let header = lines.first().map(|l| l.trim()).unwrap_or("");
    if header != HEADER_LINE {
        return Err(HeaderError::InvalidHeader { found: header.to_string() });
    }
    if lines.len() < ENVELOPE_LINES {
        return Err(HeaderError::Truncated { lines: lines.len() });
    }

    let declaration = lines[1].trim();
    let mut transform = None;
    let mut attributes = Vec::new();
    for seg in declaration.split(ATTRIBUTE_SEPARATOR) {
        match seg.split_once(KEY_VALUE_SEPARATOR) {
            Some((attr_keys::TRANSFORM, chain)) => transform = Some(chain.to_string()),
            Some((k, v)) => attributes.push(Attribute::new(k, v)),
            None => attributes.push(Attribute::new(seg, "")),
        }
    }
    let transform = match transform {
        Some(chain) if !chain.is_empty() => chain,
        _ => return Err(HeaderError::MissingChain { line: declaration.to_string() }),
    };

    Ok(Envelope {
        transform,
        attributes,
        payload: lines[2].trim().to_string(),
    })
}
