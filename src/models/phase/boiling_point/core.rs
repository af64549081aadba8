//! Boiling point estimation from the Clausius–Clapeyron relation.
//!
//! A [`Molecule`] holds one calibration (a normal boiling point, possibly
//! derived from an off-standard observation) and an active
//! [`VaporizationEnthalpy`](crate::support::vaporization::VaporizationEnthalpy)
//! estimate, and evaluates its boiling point at any pressure in domain.

mod curve;
mod error;
mod molecule;
mod observation;

pub use curve::{BoilingCurve, CurvePoint, PressureSweep, Spacing, SweepError};
pub use error::{BoilingPointError, InputError};
pub use molecule::{DEFAULT_NORMAL_BOILING_POINT_K, Molecule};
pub use observation::Observation;
