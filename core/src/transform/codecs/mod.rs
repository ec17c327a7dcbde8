//! transform/codecs/mod.rs
//! One codec per step in the vocabulary.

pub mod b64;
pub mod gzip;
pub mod noop;

pub use self::b64::*;
pub use self::gzip::*;
pub use self::noop::*;
