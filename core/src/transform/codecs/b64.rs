//! `b64` step via the base64 crate (standard alphabet, padding required).

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::transform::types::{Step, StepCodec, TransformError};

pub struct Base64Codec;

impl Base64Codec {
    pub fn new() -> Box<dyn StepCodec> {
        Box::new(Self)
    }
}

impl StepCodec for Base64Codec {
    fn step(&self) -> Step {
        Step::Base64
    }

    fn encode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        out.extend_from_slice(STANDARD.encode(input).as_bytes());
        Ok(())
    }

    fn decode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        STANDARD.decode_vec(input, out)?;
        Ok(())
    }
}
