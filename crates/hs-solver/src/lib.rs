//! hs-solver: fan / system curve intersection.
//!
//! The operating point is where the static pressure a fan delivers equals the
//! pressure drop of the air path. The fan curve falls and the system curve
//! rises with flow, so there is at most one crossing; it is bracketed on the
//! fan's sampled flow range and refined by bisection.

pub mod error;
pub mod solve;

pub use error::{SolverError, SolverResult};
pub use solve::{OperatingPoint, SolverConfig, solve};
