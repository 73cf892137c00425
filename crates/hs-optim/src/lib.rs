//! hs-optim: geometry × fan design sweeps and Pareto filtering.
//!
//! Every (geometry, fan) pair is evaluated independently: solve the operating
//! point, evaluate the thermal network, measure volume. Pairs that cannot be
//! evaluated are recorded with a reason and skipped. The surviving design
//! points are reduced to the front that is non-dominated in
//! (volume, thermal resistance).

pub mod error;
pub mod evaluate;
pub mod pareto;
pub mod space;
pub mod sweep;

pub use error::{OptimError, OptimResult, PairError};
pub use evaluate::{DesignPoint, Evaluator, evaluate_pair};
pub use pareto::{Objectives, ParetoFront, dominates, front_indices};
pub use space::{GeometryAxes, GeometrySpace};
pub use sweep::{Optimization, SkipReason, SkippedPair, SweepReport, optimize};
