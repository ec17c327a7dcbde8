//! `gz` step via flate2 (gzip container, whole buffer at a time).

use std::io::Read;
use std::io::Write;
use flate2::{Compression, write::GzEncoder, read::MultiGzDecoder};

use crate::constants::{DEFAULT_GZIP_LEVEL, MAX_GZIP_LEVEL};
use crate::transform::types::{Step, StepCodec, TransformError};

pub struct GzipCodec {
    level: Compression,
}

impl GzipCodec {
    /// Out-of-range levels fall back to the default level.
    pub fn new(level: u32) -> Box<dyn StepCodec> {
        let lvl = match level {
            0..=MAX_GZIP_LEVEL => Compression::new(level),
            _ => Compression::new(DEFAULT_GZIP_LEVEL),
        };
        Box::new(Self { level: lvl })
    }
}

impl StepCodec for GzipCodec {
    fn step(&self) -> Step {
        Step::Gzip
    }

    fn encode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        let mut enc = GzEncoder::new(Vec::new(), self.level);
        enc.write_all(input).map_err(TransformError::Gzip)?;
        let compressed = enc.finish().map_err(TransformError::Gzip)?;
        out.extend_from_slice(&compressed);
        Ok(())
    }

    fn decode_into(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), TransformError> {
        // Concatenated members decode back to back.
        let mut dec = MultiGzDecoder::new(input);
        dec.read_to_end(out).map_err(TransformError::Gzip)?;
        Ok(())
    }
}
