//! codec/mod.rs
//! Message-level operations over envelopes.
//!
//! - `encoder`: `encode_message` (fixed `gz>b64`) and `decode_message`
//!   (fixed base64-then-gunzip, declaration ignored).
//! - `decoder`: chain-driven decoding of arbitrary envelopes.
//! - `validate`: decode plus JSON check, with a printable report.

pub mod config;
pub mod encoder;
pub mod decoder;
pub mod validate;

pub use config::*;
pub use encoder::*;
pub use decoder::*;
pub use validate::*;
