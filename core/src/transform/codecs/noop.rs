//! `none` step: bytes pass through unchanged in both directions.

use crate::transform::types::{Step, StepCodec, TransformError};

pub struct NoopCodec;

impl NoopCodec {
    pub fn new() -> Box<dyn StepCodec> {
        Box::new(Self)
    }
}

impl StepCodec for NoopCodec {
    fn step(&self) -> Step {
        Step::Noop
    }

    fn encode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(input);
        Ok(())
    }

    fn decode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(input);
        Ok(())
    }
}
