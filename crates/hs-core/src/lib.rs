//! hs-core: stable foundation for the heat sink toolbox.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + interpolation)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HsError, HsResult};
pub use numeric::*;
pub use units::*;
