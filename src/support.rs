//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints such as [`StrictlyPositive`](constraint::StrictlyPositive).
//! - [`units`]: Reference constants and extensions to [`uom`].
//! - [`vaporization`]: Enthalpy of vaporization estimates and Clausius–Clapeyron relations.

pub mod constraint;
pub mod units;
pub mod vaporization;
