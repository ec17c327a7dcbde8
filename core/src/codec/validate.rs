//! codec/validate.rs
//! Envelope validation: parse, decode, and check JSON when `ct=json`.

use serde_json::Value;
use tracing::debug;

use crate::codec::config::CodecConfig;
use crate::codec::decoder::chain_decode_with;
use crate::constants::CONTENT_TYPE_JSON;
use crate::envelope::parse_envelope_lenient;
use crate::types::Ecv1Error;

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub chain: String,
    pub content_type: String,
    /// Decoded text.
    pub text: String,
    /// Parsed text, present when the content type is `json`.
    pub json: Option<Value>,
}

impl ValidationReport {
    pub fn summary(&self) -> String {
        format!("Valid EC v1 · t={}; ct={}", self.chain, self.content_type)
    }

    /// JSON rendered with 2-space indentation, or the raw text otherwise.
    pub fn render(&self) -> Result<String, Ecv1Error> {
        match &self.json {
            Some(value) => Ok(serde_json::to_string_pretty(value)?),
            None => Ok(self.text.clone()),
        }
    }
}

/// Validate using reverse chain order, which undoes `encode_with`.
///
/// Parsing is forgiving (see `parse_envelope_lenient`): blank lines and
/// surrounding whitespace are tolerated and `t=` may appear anywhere in the
/// declaration. The chain itself is still resolved strictly.
pub fn validate_envelope(text: &str) -> Result<ValidationReport, ValidationFailure> {
    validate_envelope_with(text, &CodecConfig::reverse())
}

pub fn validate_envelope_with(text: &str, config: &CodecConfig) -> Result<ValidationReport, ValidationFailure> {
    let envelope = parse_envelope_lenient(text).map_err(|e| ValidationFailure(e.into()))?;
    let content_type = envelope.content_type_or_default().to_string();

    let decoded = chain_decode_with(&envelope.transform, &envelope.payload, config.order)
        .map_err(ValidationFailure)?;
    let json = if content_type == CONTENT_TYPE_JSON {
        Some(serde_json::from_str(&decoded).map_err(|e| ValidationFailure(e.into()))?)
    } else {
        None
    };

    debug!(chain = %envelope.transform, ct = %content_type, "envelope valid");
    Ok(ValidationReport { chain: envelope.transform, content_type, text: decoded, json })
}

/// Why an envelope failed validation.
#[derive(Debug)]
pub struct ValidationFailure(pub Ecv1Error);

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid EC v1: {}", self.0)
    }
}

impl std::error::Error for ValidationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}
