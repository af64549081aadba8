//! # Boiling Point Models
//!
//! Estimates how a substance's boiling point varies with pressure using the
//! Clausius–Clapeyron relation and a heuristic molar enthalpy of vaporization.
//!
//! ## Crate layout
//!
//! - [`models`]: The [`Molecule`](models::phase::boiling_point::Molecule) model
//!   and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use boiling_point_models::models::phase::boiling_point::{Molecule, VaporizationEnthalpy};
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::torr,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let mut water = Molecule::new("Water");
//! water.set_normal_boiling_point(ThermodynamicTemperature::new::<kelvin>(373.15))?;
//! water.set_estimate(VaporizationEnthalpy::Water)?;
//!
//! let t = water.boiling_point_at(Pressure::new::<torr>(1.0))?;
//! assert!((t.get::<kelvin>() - 247.78).abs() < 0.01);
//! # Ok::<(), boiling_point_models::models::phase::boiling_point::BoilingPointError>(())
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
