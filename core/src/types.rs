use std::string::FromUtf8Error;

use thiserror::Error;

use crate::envelope::HeaderError;
use crate::transform::TransformError;

/// Unified codec error covering envelope parsing, transforms, text and JSON.
/// - `From<T>` impls enable `?` from every layer.
/// - Header and unknown-step errors are flattened so callers can match on
///   the error kind directly.
#[derive(Debug, Error)]
pub enum Ecv1Error {
    /// First line is not `EC v1`.
    #[error("invalid EC v1 header: {found:?}")]
    InvalidHeader { found: String },

    /// Fewer than three lines.
    #[error("invalid EC v1 message: expected 3 lines, got {lines}")]
    TruncatedEnvelope { lines: usize },

    /// Declaration line does not open with `t=<chain>`.
    #[error("transform chain (t=) not found in {line:?}")]
    MissingChain { line: String },

    /// Step name outside `{b64, gz, none}`.
    #[error("unknown transform step: {step:?}")]
    UnknownTransform { step: String },

    /// Base64 or gzip primitive failed on malformed data.
    #[error("transform failed: {0}")]
    TransformFailure(TransformError),

    /// Final bytes are not valid UTF-8.
    #[error("decoded payload is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    /// Encoded payload would break the one-line payload rule.
    #[error("encoded payload spans multiple lines")]
    MultilinePayload,

    /// Content type would corrupt the declaration line.
    #[error("content type {value:?} may not contain ';' or line breaks")]
    InvalidContentType { value: String },

    /// Message (de)serialization.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<TransformError> for Ecv1Error {
    fn from(e: TransformError) -> Self {
        match e {
            TransformError::UnknownStep { name } => Ecv1Error::UnknownTransform { step: name },
            other => Ecv1Error::TransformFailure(other),
        }
    }
}

impl From<HeaderError> for Ecv1Error {
    fn from(e: HeaderError) -> Self {
        match e {
            HeaderError::InvalidHeader { found } => Ecv1Error::InvalidHeader { found },
            HeaderError::Truncated { lines } => Ecv1Error::TruncatedEnvelope { lines },
            HeaderError::MissingChain { line } => Ecv1Error::MissingChain { line },
        }
    }
}
