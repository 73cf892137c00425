//! hs-fans: fan characteristic curves for the heat sink toolbox.
//!
//! Provides:
//! - `FanCurve`: a named, immutable pressure-vs-flow characteristic with a
//!   piecewise-linear interpolant that can be queried at any flow
//! - `FanFrame`: outer dimensions of a square axial fan frame
//! - `FanCatalog`: the process-wide, read-only set of fans a study may pick from
//!
//! # Example
//!
//! ```
//! use hs_fans::{FanCurve, SampleUnits};
//! use hs_core::units::m3ph;
//!
//! let fan = FanCurve::from_datasheet(
//!     "demo",
//!     &[(0.0, 100.0), (10.0, 80.0), (20.0, 40.0), (30.0, 0.0)],
//!     SampleUnits::CubicMeterPerHourPascal,
//! )
//! .unwrap();
//!
//! let p = fan.pressure_at(m3ph(15.0));
//! assert!((p.value - 60.0).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod curve;
pub mod error;

// Re-exports
pub use catalog::FanCatalog;
pub use curve::{FanCurve, FanFrame, SampleUnits};
pub use error::{FanError, FanResult};
