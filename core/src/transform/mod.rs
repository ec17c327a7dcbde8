//! transform/mod.rs
//! Reversible transform steps and ordered chains.
//!
//! Notes:
//! - The step vocabulary is closed (`b64`, `gz`, `none`); dispatch is an
//!   exhaustive match on `Step`.
//! - Registry resolves wire names and builds per-step codecs.
//! - Chains hold whole buffers; nothing here streams.

pub mod types;
pub mod registry;
pub mod codecs;
pub mod chain;

pub use types::*;
pub use registry::*;
pub use chain::*;
