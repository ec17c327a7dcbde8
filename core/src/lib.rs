//! ecv1-core
//!
//! EC v1 envelope codec: a three-line text envelope declaring a chain of
//! reversible transforms (`gz`, `b64`, `none`) over an in-memory payload.
//! No CLI, no file I/O.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Wire layers
pub mod transform;
pub mod envelope;

// Message operations
pub mod codec;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{
        chain_decode, chain_decode_with, decode_envelope, decode_envelope_with,
        decode_message, decode_message_as, encode_message, encode_text_with, encode_with,
        validate_envelope, validate_envelope_with, CodecConfig, EncodeOptions,
        ValidationFailure, ValidationReport,
    };
    pub use crate::envelope::{parse_envelope, Envelope};
    pub use crate::transform::{ChainOrder, Step, TransformChain};
    pub use crate::types::Ecv1Error;
}
