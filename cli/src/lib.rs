//! ecv1-cli
//!
//! Shared plumbing for the `ecv1` and `ecv1-chain-decode` binaries.

pub mod io;
pub mod logging;
