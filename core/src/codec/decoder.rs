//! codec/decoder.rs
//! Chain-driven decoding of envelopes.
//!
//! `chain_decode` walks the declared chain literally: `gz>b64` gunzips the
//! raw payload first. An envelope from `encode_message` therefore fails here
//! with a gzip error unless `ChainOrder::Reverse` is requested.

use tracing::debug;

use crate::codec::config::CodecConfig;
use crate::envelope::parse_envelope;
use crate::transform::{ChainOrder, TransformChain};
use crate::types::Ecv1Error;

/// Decode `payload` by applying each step of `chain` in listed order.
pub fn chain_decode(chain: &str, payload: &str) -> Result<String, Ecv1Error> {
    chain_decode_with(chain, payload, ChainOrder::Literal)
}

pub fn chain_decode_with(chain: &str, payload: &str, order: ChainOrder) -> Result<String, Ecv1Error> {
    let chain = TransformChain::parse(chain)?;
    let bytes = chain.decode(payload.as_bytes(), order)?;
    Ok(String::from_utf8(bytes)?)
}

/// Parse an envelope and decode its declared chain literally.
pub fn decode_envelope(text: &str) -> Result<String, Ecv1Error> {
    decode_envelope_with(text, &CodecConfig::default())
}

pub fn decode_envelope_with(text: &str, config: &CodecConfig) -> Result<String, Ecv1Error> {
    let envelope = parse_envelope(text)?;
    debug!(chain = %envelope.transform, order = ?config.order, "decoding envelope");
    chain_decode_with(&envelope.transform, &envelope.payload, config.order)
}
