//! transform/types.rs
//! Step vocabulary, step codec trait and transform errors.

use std::fmt;
use std::io;
use std::str::FromStr;

use crate::constants::step_names;

/// Closed vocabulary of transform steps.
///
/// The wire name is what appears in a `t=` declaration; the variant carries
/// both the forward (encode) and inverse (decode) meaning of the step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    /// `b64`: standard alphabet, padded.
    Base64,
    /// `gz`: gzip container around deflate.
    Gzip,
    /// `none`: data passes through unchanged.
    Noop,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::Base64, Step::Gzip, Step::Noop];

    pub fn name(&self) -> &'static str {
        match self {
            Step::Base64 => step_names::BASE64,
            Step::Gzip => step_names::GZIP,
            Step::Noop => step_names::NONE,
        }
    }

    /// Resolve a wire name. Names are case-sensitive; empty names are unknown.
    pub fn verify(name: &str) -> Result<Step, TransformError> {
        match name {
            step_names::BASE64 => Ok(Step::Base64),
            step_names::GZIP => Ok(Step::Gzip),
            step_names::NONE => Ok(Step::Noop),
            other => Err(TransformError::UnknownStep { name: other.to_string() }),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::verify(s)
    }
}

#[derive(Debug)]
pub enum TransformError {
    /// Step name outside the vocabulary.
    UnknownStep { name: String },
    /// Base64 primitive rejected its input.
    Base64Decode(base64::DecodeError),
    /// Gzip primitive failed (bad magic, truncated stream, CRC mismatch, ...).
    Gzip(io::Error),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TransformError::*;
        match self {
            UnknownStep { name } =>
                write!(f, "unknown transform step: {:?}", name),
            Base64Decode(e) =>
                write!(f, "b64 step failed: {}", e),
            Gzip(e) =>
                write!(f, "gz step failed: {}", e),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::UnknownStep { .. } => None,
            TransformError::Base64Decode(e) => Some(e),
            TransformError::Gzip(e) => Some(e),
        }
    }
}

impl From<base64::DecodeError> for TransformError {
    fn from(e: base64::DecodeError) -> Self {
        TransformError::Base64Decode(e)
    }
}

pub trait StepCodec {
    /// Which step this codec implements.
    fn step(&self) -> Step;
    /// Apply the forward (encode) meaning of the step, appending to `out`.
    fn encode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError>;
    /// Apply the inverse (decode) meaning of the step, appending to `out`.
    fn decode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError>;
}
