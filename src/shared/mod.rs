/// Shared utilities used across all layers
///
/// Error types and the crate-wide `Result` alias live here.
pub mod error;
mod result;

pub use result::Result;
