//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (temperature, pressure,
//! molar enthalpy). This module provides the reference constants the
//! Clausius–Clapeyron relation is written against.
//!
//! ## Standard pressure
//!
//! Boiling points are calibrated against a standard atmosphere of exactly
//! 760 Torr:
//!
//! ```
//! use boiling_point_models::support::units::standard_pressure;
//! use uom::si::pressure::torr;
//!
//! assert_eq!(standard_pressure().get::<torr>(), 760.0);
//! ```

use uom::si::{
    f64::{MolarHeatCapacity, Pressure},
    pressure::torr,
};

/// Molar gas constant, J/(mol·K) in SI.
pub type MolarGasConstant = MolarHeatCapacity;

/// Standard pressure in Torr.
pub const STANDARD_PRESSURE_TORR: f64 = 760.0;

/// Molar gas constant in J/(mol·K), to four significant figures.
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314;

/// Returns the standard pressure (760 Torr).
#[must_use]
pub fn standard_pressure() -> Pressure {
    Pressure::new::<torr>(STANDARD_PRESSURE_TORR)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{pressure::atmosphere, ratio::ratio};

    #[test]
    fn standard_pressure_is_about_one_atmosphere() {
        assert_relative_eq!(
            standard_pressure().get::<atmosphere>(),
            1.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn standard_pressure_ratio_is_exactly_one() {
        let p = Pressure::new::<torr>(760.0);
        assert_eq!((p / standard_pressure()).get::<ratio>(), 1.0);
    }
}
