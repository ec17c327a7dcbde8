//! codec/encoder.rs
//! Message encoder and its hardcoded companion decoder.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::codec::config::EncodeOptions;
use crate::constants::ATTRIBUTE_SEPARATOR;
use crate::envelope::{encode_envelope, split_envelope, Envelope};
use crate::transform::{ChainOrder, Step, TransformChain};
use crate::types::Ecv1Error;

/// Encode a message as `EC v1\nt=gz>b64;ct=json\n<base64>`.
///
/// The message is serialized as compact JSON, keeping the key order of the
/// source value.
pub fn encode_message<T: Serialize + ?Sized>(message: &T) -> Result<String, Ecv1Error> {
    encode_with(message, &EncodeOptions::default())
}

/// Encode a message with a caller-chosen chain and content type.
pub fn encode_with<T: Serialize + ?Sized>(message: &T, options: &EncodeOptions) -> Result<String, Ecv1Error> {
    let json = serde_json::to_string(message)?;
    encode_text_with(&json, options)
}

/// Wrap arbitrary text. Forward steps run in listed order; the result must be
/// a single line of UTF-8.
pub fn encode_text_with(text: &str, options: &EncodeOptions) -> Result<String, Ecv1Error> {
    let ct = &options.content_type;
    if ct.contains(ATTRIBUTE_SEPARATOR) || ct.contains('\n') || ct.contains('\r') {
        return Err(Ecv1Error::InvalidContentType { value: ct.clone() });
    }

    let bytes = options.chain.encode(text.as_bytes(), Some(options.level))?;
    let payload = String::from_utf8(bytes)?;
    if payload.contains('\n') || payload.contains('\r') {
        return Err(Ecv1Error::MultilinePayload);
    }

    debug!(chain = %options.chain, ct = %ct, payload_len = payload.len(), "message encoded");
    Ok(encode_envelope(&Envelope::new(&options.chain, ct, payload)))
}

/// Decode an envelope produced by `encode_message`.
///
/// The declaration line is not consulted: the payload is always
/// base64-decoded and then gunzipped.
pub fn decode_message(text: &str) -> Result<Value, Ecv1Error> {
    decode_message_as(text)
}

/// `decode_message` into a typed value.
pub fn decode_message_as<T: DeserializeOwned>(text: &str) -> Result<T, Ecv1Error> {
    let lines = split_envelope(text)?;
    let fixed = TransformChain::from_steps(vec![Step::Base64, Step::Gzip]);
    let bytes = fixed.decode(lines.payload.as_bytes(), ChainOrder::Literal)?;
    let json = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&json)?)
}
