//! envelope/mod.rs
//! The three-line EC v1 text envelope.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
