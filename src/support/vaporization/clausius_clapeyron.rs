//! Closed-form Clausius–Clapeyron relations.
//!
//! With a constant enthalpy of vaporization `ΔH`, the integrated
//! Clausius–Clapeyron equation relates the boiling temperature `T` at
//! pressure `p` to the normal boiling point `Tb` at standard pressure `p₀`:
//!
//! ```text
//! 1/T = 1/Tb − (R/ΔH) · ln(p/p₀)
//! ```
//!
//! The relation only yields a physical temperature while the right-hand side
//! stays positive, which bounds the usable pressure from above.
//! Functions here return `None` past that bound instead of a negative or
//! infinite temperature.
//!
//! Callers are responsible for passing strictly positive, finite
//! temperatures and pressures.

use uom::si::{
    f64::{MolarEnergy, Pressure, ThermodynamicTemperature},
    molar_energy::joule_per_mole,
    molar_heat_capacity::joule_per_kelvin_mole,
    pressure::torr,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::units::{GAS_CONSTANT_J_PER_MOL_K, MolarGasConstant, standard_pressure};

/// Returns `ln(p/p₀)` for a pressure relative to standard pressure.
///
/// Exactly zero when `pressure` was built from the same value as
/// [`standard_pressure`].
#[must_use]
pub fn ln_pressure_ratio(pressure: Pressure) -> f64 {
    (pressure / standard_pressure()).get::<ratio>().ln()
}

/// Computes the boiling temperature at `pressure`.
///
/// At standard pressure the normal boiling point is returned unchanged.
///
/// Returns `None` if `pressure` is at or beyond [`max_pressure`], or if
/// `enthalpy` is not positive.
#[must_use]
pub fn boiling_point(
    normal_boiling_point: ThermodynamicTemperature,
    enthalpy: MolarEnergy,
    pressure: Pressure,
) -> Option<ThermodynamicTemperature> {
    let dh = enthalpy.get::<joule_per_mole>();
    if dh.is_nan() || dh <= 0.0 {
        return None;
    }

    let ln_ratio = ln_pressure_ratio(pressure);
    if ln_ratio == 0.0 {
        return Some(normal_boiling_point);
    }

    let tb = normal_boiling_point.get::<kelvin>();
    let inverse_t = (1.0 / tb) - (ln_ratio * GAS_CONSTANT_J_PER_MOL_K / dh);
    let t = 1.0 / inverse_t;

    (t > 0.0 && t.is_finite()).then(|| ThermodynamicTemperature::new::<kelvin>(t))
}

/// Returns the pressure at which [`boiling_point`] stops being physical.
///
/// This is `p₀ · exp(ΔH / (R·Tb))`, or zero when `enthalpy` is not positive
/// since no pressure is then in domain.
#[must_use]
pub fn max_pressure(
    normal_boiling_point: ThermodynamicTemperature,
    enthalpy: MolarEnergy,
) -> Pressure {
    let tb = normal_boiling_point.get::<kelvin>();
    let dh = enthalpy.get::<joule_per_mole>();
    if dh.is_nan() || dh <= 0.0 {
        return Pressure::new::<torr>(0.0);
    }
    standard_pressure() * (dh / (GAS_CONSTANT_J_PER_MOL_K * tb)).exp()
}

/// Recovers the normal boiling point from one observed boiling point.
///
/// The enthalpy is taken as `coefficient · T`, which makes the inversion
/// linear:
///
/// ```text
/// Tb = T · (1 − (R / coefficient) · ln(p/p₀))
/// ```
///
/// This is exact only for enthalpy rules proportional to temperature.
///
/// Returns `None` if the observed pressure is at or beyond
/// [`max_observed_pressure`], where the recovered temperature would not be
/// positive.
#[must_use]
pub fn normal_boiling_point(
    observed_temperature: ThermodynamicTemperature,
    observed_pressure: Pressure,
    coefficient: MolarGasConstant,
) -> Option<ThermodynamicTemperature> {
    let t = observed_temperature.get::<kelvin>();
    let k = coefficient.get::<joule_per_kelvin_mole>();
    let tb = t * (1.0 - GAS_CONSTANT_J_PER_MOL_K / k * ln_pressure_ratio(observed_pressure));

    (tb > 0.0 && tb.is_finite()).then(|| ThermodynamicTemperature::new::<kelvin>(tb))
}

/// Returns the observed pressure beyond which [`normal_boiling_point`] fails.
///
/// This is `p₀ · exp(coefficient / R)`, independent of the observed temperature.
#[must_use]
pub fn max_observed_pressure(coefficient: MolarGasConstant) -> Pressure {
    let k = coefficient.get::<joule_per_kelvin_mole>();
    standard_pressure() * (k / GAS_CONSTANT_J_PER_MOL_K).exp()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn kelvin_temp(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(t)
    }

    fn trouton(tb: ThermodynamicTemperature) -> MolarEnergy {
        MolarEnergy::new::<joule_per_mole>(85.0 * tb.get::<kelvin>())
    }

    fn trouton_coefficient() -> MolarGasConstant {
        MolarGasConstant::new::<joule_per_kelvin_mole>(85.0)
    }

    #[test]
    fn standard_pressure_returns_normal_boiling_point() {
        let tb = kelvin_temp(351.39);
        let t = boiling_point(tb, trouton(tb), standard_pressure()).unwrap();
        assert_eq!(t, tb);
    }

    #[test]
    fn water_at_one_torr() {
        let tb = kelvin_temp(373.15);
        let dh = MolarEnergy::new::<joule_per_mole>(109.0 * 373.15);

        let t = boiling_point(tb, dh, Pressure::new::<torr>(1.0)).unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 247.782_49, max_relative = 1e-6);
    }

    #[test]
    fn lower_pressure_lowers_boiling_point() {
        let tb = kelvin_temp(300.0);
        let dh = trouton(tb);

        let mut previous = tb;
        for p in [500.0, 100.0, 10.0, 1.0, 0.1, 1e-6] {
            let t = boiling_point(tb, dh, Pressure::new::<torr>(p)).unwrap();
            assert!(t < previous);
            assert!(t.get::<kelvin>() > 0.0);
            previous = t;
        }
    }

    #[test]
    fn max_pressure_bounds_the_domain() {
        let tb = kelvin_temp(300.0);
        let dh = trouton(tb);
        let limit = max_pressure(tb, dh);

        // 760 · exp(85 / 8.314)
        assert_relative_eq!(limit.get::<torr>(), 20_937_187.9, max_relative = 1e-6);

        assert!(boiling_point(tb, dh, limit * 0.999).is_some());
        assert!(boiling_point(tb, dh, limit * 1.001).is_none());
        assert!(boiling_point(tb, dh, limit * 10.0).is_none());
    }

    #[test]
    fn non_positive_enthalpy_has_no_domain() {
        let tb = kelvin_temp(0.01);

        for dh in [0.0, -1.0e-3] {
            let dh = MolarEnergy::new::<joule_per_mole>(dh);
            assert_eq!(max_pressure(tb, dh), Pressure::new::<torr>(0.0));
            assert!(boiling_point(tb, dh, standard_pressure()).is_none());
            assert!(boiling_point(tb, dh, Pressure::new::<torr>(1.0)).is_none());
            assert!(boiling_point(tb, dh, Pressure::new::<torr>(1e-9)).is_none());
        }
    }

    #[test]
    fn inversion_recovers_normal_boiling_point() {
        let t = normal_boiling_point(
            kelvin_temp(350.0),
            Pressure::new::<torr>(400.0),
            trouton_coefficient(),
        )
        .unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 371.973_301_45, max_relative = 1e-9);
    }

    #[test]
    fn inversion_at_standard_pressure_is_identity() {
        let t =
            normal_boiling_point(kelvin_temp(320.0), standard_pressure(), trouton_coefficient())
                .unwrap();
        assert_relative_eq!(t.get::<kelvin>(), 320.0);
    }

    #[test]
    fn inversion_past_max_observed_pressure() {
        let limit = max_observed_pressure(trouton_coefficient());
        assert_relative_eq!(limit.get::<torr>(), 20_937_187.9, max_relative = 1e-6);

        let t = kelvin_temp(500.0);
        assert!(normal_boiling_point(t, limit * 0.99, trouton_coefficient()).is_some());
        assert!(normal_boiling_point(t, limit * 1.01, trouton_coefficient()).is_none());
    }
}
