//! codec/config.rs
//! Encode and decode knobs.

use crate::constants::{DEFAULT_CONTENT_TYPE, DEFAULT_GZIP_LEVEL};
use crate::transform::{ChainOrder, TransformChain};
use crate::types::Ecv1Error;

/// Decode-side configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// How a declared chain's decode meaning is walked.
    /// - `Literal` (default) → steps run as listed.
    /// - `Reverse` → steps run last-to-first.
    pub order: ChainOrder,
}

impl CodecConfig {
    pub fn new(order: Option<ChainOrder>) -> Self {
        Self { order: order.unwrap_or_default() }
    }

    pub fn reverse() -> Self {
        Self { order: ChainOrder::Reverse }
    }
}

/// Encode-side configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Chain applied forward in listed order, and declared as `t=`.
    pub chain: TransformChain,
    /// Declared as `ct=`.
    pub content_type: String,
    /// gzip level for `gz` steps; the gzip codec maps out-of-range values to the default.
    pub level: u32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            chain: TransformChain::default(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            level: DEFAULT_GZIP_LEVEL,
        }
    }
}

impl EncodeOptions {
    pub fn new(chain: Option<&str>, content_type: Option<&str>, level: Option<u32>) -> Result<Self, Ecv1Error> {
        let chain = match chain {
            Some(text) => TransformChain::parse(text)?,
            None => TransformChain::default(),
        };
        Ok(Self {
            chain,
            content_type: content_type.unwrap_or(DEFAULT_CONTENT_TYPE).to_string(),
            level: level.unwrap_or(DEFAULT_GZIP_LEVEL),
        })
    }
}
