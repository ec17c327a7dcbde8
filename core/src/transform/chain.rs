//! transform/chain.rs
//! Ordered transform chains as declared on the `t=` attribute.
//!
//! Design notes:
//! - A chain is parsed eagerly: every name must resolve before any step runs,
//!   so an unknown step fails regardless of the payload.
//! - Forward (encode) application always follows the listed order.
//! - Inverse (decode) application follows `ChainOrder`: `Literal` walks the
//!   list as written, `Reverse` walks it from the last step to the first.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::constants::STEP_SEPARATOR;
use crate::transform::registry::{create_codec, resolve};
use crate::transform::types::{Step, TransformError};

/// Order in which a chain's decode meaning is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ChainOrder {
    /// Steps run exactly as listed (`gz>b64` gunzips first).
    #[default]
    Literal,
    /// Steps run last-to-first, undoing a pipe declared in encode order.
    Reverse,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformChain {
    steps: Vec<Step>,
}

impl TransformChain {
    /// Parse a `>`-separated declaration such as `gz>b64`.
    ///
    /// Splitting never yields zero segments, so the resulting chain is never
    /// empty; an empty segment (`""`, `gz>>b64`, `b64>`) is an unknown step.
    pub fn parse(text: &str) -> Result<Self, TransformError> {
        let steps = text
            .split(STEP_SEPARATOR)
            .map(resolve)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// Build from already-resolved steps. An empty list is normalized to `none`.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        if steps.is_empty() {
            return Self { steps: vec![Step::Noop] };
        }
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false: `parse` and `from_steps` both yield at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply the forward meaning of every step in listed order.
    pub fn encode(&self, input: &[u8], level: Option<u32>) -> Result<Vec<u8>, TransformError> {
        let mut data = input.to_vec();
        for &step in &self.steps {
            let mut out = Vec::new();
            create_codec(step, level).encode_into(&data, &mut out)?;
            trace!(step = step.name(), in_len = data.len(), out_len = out.len(), "encode step");
            data = out;
        }
        debug!(chain = %self, in_len = input.len(), out_len = data.len(), "chain encoded");
        Ok(data)
    }

    /// Apply the decode meaning of every step in the requested order.
    pub fn decode(&self, input: &[u8], order: ChainOrder) -> Result<Vec<u8>, TransformError> {
        let ordered: Vec<Step> = match order {
            ChainOrder::Literal => self.steps.clone(),
            ChainOrder::Reverse => self.steps.iter().rev().copied().collect(),
        };

        let mut data = input.to_vec();
        for step in ordered {
            let mut out = Vec::new();
            if let Err(e) = create_codec(step, None).decode_into(&data, &mut out) {
                debug!(step = step.name(), error = %e, "decode step failed");
                return Err(e);
            }
            trace!(step = step.name(), in_len = data.len(), out_len = out.len(), "decode step");
            data = out;
        }
        debug!(chain = %self, ?order, in_len = input.len(), out_len = data.len(), "chain decoded");
        Ok(data)
    }
}

impl Default for TransformChain {
    /// The `gz>b64` pipe written by the message encoder.
    fn default() -> Self {
        Self { steps: vec![Step::Gzip, Step::Base64] }
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", STEP_SEPARATOR)?;
            }
            f.write_str(step.name())?;
        }
        Ok(())
    }
}

impl FromStr for TransformChain {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransformChain::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CHAIN;

    #[test]
    fn default_chain_renders_encoder_declaration() {
        assert_eq!(TransformChain::default().to_string(), DEFAULT_CHAIN);
        assert_eq!(TransformChain::parse(DEFAULT_CHAIN).unwrap(), TransformChain::default());
    }

    #[test]
    fn empty_segments_are_unknown_steps() {
        for text in ["", "gz>>b64", "b64>"] {
            let err = TransformChain::parse(text).unwrap_err();
            assert!(matches!(err, TransformError::UnknownStep { ref name } if name.is_empty()), "{text}");
        }
    }

    #[test]
    fn from_empty_steps_is_noop() {
        let chain = TransformChain::from_steps(Vec::new());
        assert_eq!(chain.steps(), &[Step::Noop]);
        assert!(!chain.is_empty());
    }

    #[test]
    fn reverse_order_inverts_forward_encode() {
        let chain = TransformChain::parse("gz>b64>none").unwrap();
        let encoded = chain.encode(b"round trip", None).unwrap();
        let decoded = chain.decode(&encoded, ChainOrder::Reverse).unwrap();
        assert_eq!(decoded, b"round trip");
    }
}
