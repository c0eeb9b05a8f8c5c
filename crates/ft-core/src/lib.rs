//! ft-core: stable foundation for flowtrace.
//!
//! Contains:
//! - numeric (Real + residual tolerance + float helpers)
//! - ids (stable compact IDs for nodes and arcs)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FtError, FtResult};
pub use ids::*;
pub use numeric::*;
