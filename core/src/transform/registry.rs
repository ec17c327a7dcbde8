//! transform/registry.rs
//! Step resolution and codec factory.

use crate::constants::DEFAULT_GZIP_LEVEL;
use crate::transform::codecs::{Base64Codec, GzipCodec, NoopCodec};
use crate::transform::types::{Step, StepCodec, TransformError};

pub fn resolve(name: &str) -> Result<Step, TransformError> {
    Step::verify(name)
}

pub fn create_codec(step: Step, level: Option<u32>) -> Box<dyn StepCodec> {
    match step {
        Step::Base64 => Base64Codec::new(),
        Step::Gzip => GzipCodec::new(level.unwrap_or(DEFAULT_GZIP_LEVEL)),
        Step::Noop => NoopCodec::new(),
    }
}
