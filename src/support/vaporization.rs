//! Vaporization toolkit.
//!
//! Estimating a boiling point away from standard pressure needs two pieces:
//!
//! - **An enthalpy of vaporization**: [`VaporizationEnthalpy`] is a fixed
//!   catalog of empirical rules that estimate ΔH from the normal boiling point.
//! - **A vapor pressure relation**: [`clausius_clapeyron`] provides the
//!   closed-form relation between boiling temperature and pressure, plus its
//!   inversion back to the normal boiling point.
//!
//! # Example
//!
//! ```
//! use boiling_point_models::support::vaporization::{VaporizationEnthalpy, clausius_clapeyron};
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::torr,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let tb = ThermodynamicTemperature::new::<kelvin>(373.15);
//! let dh = VaporizationEnthalpy::Water.estimate(tb);
//!
//! let t = clausius_clapeyron::boiling_point(tb, dh, Pressure::new::<torr>(1.0)).unwrap();
//! assert!(t < tb);
//! ```

pub mod clausius_clapeyron;
mod estimate;

pub use estimate::{UnknownEstimateError, VaporizationEnthalpy};
