//! hs-geometry: extruded-fin heat sink geometry and its hydraulic model.
//!
//! Provides:
//! - `Geometry`: validated fin array + base plate + inlet duct description
//! - Volume metrics used to rank designs
//! - `SystemCurve` implementations giving pressure drop as a function of flow
//!
//! All system curves are deterministic, side-effect free and `Send + Sync`,
//! so one curve can be queried from many solver threads.
//!
//! # Example
//!
//! ```
//! use hs_geometry::{AirProperties, Geometry, GeometryParams, HeatSinkCurve, SystemCurve};
//! use hs_core::units::{m3ps, mm};
//!
//! let geometry = Geometry::new(GeometryParams {
//!     channel_count: 5,
//!     fin_thickness: mm(1.0),
//!     fin_height: mm(30.0),
//!     base_width: mm(40.0),
//!     base_length: mm(100.0),
//!     base_thickness: mm(3.0),
//!     ..GeometryParams::default()
//! })
//! .unwrap();
//!
//! let curve = HeatSinkCurve::new(&geometry, &AirProperties::default()).unwrap();
//! let dp = curve.pressure_drop(m3ps(0.005));
//! assert!(dp.value > 0.0);
//! ```

pub mod air;
pub mod channel;
pub mod error;
pub mod geometry;
pub mod system_curve;
pub mod volume;

// Re-exports
pub use air::AirProperties;
pub use error::{GeometryError, GeometryResult};
pub use geometry::{DuctGeometry, Geometry, GeometryLimits, GeometryParams, Material};
pub use system_curve::{HeatSinkCurve, QuadraticCurve, SystemCurve};
pub use volume::VolumeMetric;
