//! hs-thermal: sink-to-ambient thermal resistance of a fan-cooled heat sink.
//!
//! The resistance network is
//!
//! ```text
//! R_total = R_spreading + R_conductive + R_convective + R_air_heating
//! ```
//!
//! where the convective part is the film resistance 1/(h·A) of the ideal-fin
//! area, the air heating part is the rest of the ideal-fin air-side
//! resistance (the stream warms up along the channels), the conductive part is 1-D base conduction plus the penalty of finite fin
//! efficiency, and spreading corrects for a heat source smaller than the base.

pub mod convection;
pub mod error;
pub mod fin;
pub mod model;
pub mod properties;
pub mod spreading;

pub use convection::FlowRegime;
pub use error::ThermalError;
pub use model::{HeatSource, ThermalModel, ThermalResult};
pub use properties::{CorrelationConstants, prandtl_number};
pub use spreading::{SpreadingPlate, SpreadingResistance, spreading_resistance};
