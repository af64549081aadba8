use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::torr,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, PositiveFinite},
    units::standard_pressure,
};

use super::InputError;

/// A boiling point observed at a known pressure.
///
/// Both the temperature (in absolute units) and the pressure are guaranteed
/// to be strictly positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
}

impl Observation {
    /// Constructs a validated observation.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if either value is not strictly positive
    /// and finite.
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, InputError> {
        Ok(Self {
            temperature: check_temperature(temperature)?,
            pressure: check_pressure(pressure)?,
        })
    }

    /// Constructs an observation at standard pressure.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the temperature is not strictly positive
    /// and finite.
    pub fn at_standard_pressure(
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, InputError> {
        Ok(Self {
            temperature: check_temperature(temperature)?,
            pressure: standard_pressure(),
        })
    }

    /// Constructs an observation without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure both values are strictly positive and finite.
    #[must_use]
    pub fn new_unchecked(temperature: ThermodynamicTemperature, pressure: Pressure) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// Returns the observed boiling temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the pressure of the observation.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Returns `true` if the observation was made at standard pressure.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        self.pressure == standard_pressure()
    }
}

/// Checks that an absolute temperature is strictly positive and finite.
fn check_temperature(
    temperature: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, InputError> {
    PositiveFinite::check(&temperature.get::<kelvin>())
        .map_err(|source| InputError::Temperature {
            temperature,
            source,
        })?;
    Ok(temperature)
}

/// Checks that a pressure is strictly positive and finite.
pub(super) fn check_pressure(pressure: Pressure) -> Result<Pressure, InputError> {
    PositiveFinite::check(&pressure.get::<torr>())
        .map_err(|source| InputError::Pressure { pressure, source })?;
    Ok(pressure)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::support::constraint::ConstraintError;

    #[test]
    fn valid_observation() {
        let t = ThermodynamicTemperature::new::<kelvin>(350.0);
        let p = Pressure::new::<torr>(400.0);

        let observation = Observation::new(t, p).unwrap();
        assert_eq!(observation.temperature(), t);
        assert_eq!(observation.pressure(), p);
        assert!(!observation.is_standard());
    }

    #[test]
    fn standard_observation() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(100.0);
        let observation = Observation::at_standard_pressure(t).unwrap();
        assert!(observation.is_standard());
        assert_eq!(observation.pressure().get::<torr>(), 760.0);
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let p = Pressure::new::<torr>(400.0);

        let zero = ThermodynamicTemperature::new::<kelvin>(0.0);
        assert!(matches!(
            Observation::new(zero, p),
            Err(InputError::Temperature {
                source: ConstraintError::Zero,
                ..
            })
        ));

        let below_absolute_zero = ThermodynamicTemperature::new::<degree_celsius>(-300.0);
        assert!(matches!(
            Observation::new(below_absolute_zero, p),
            Err(InputError::Temperature {
                source: ConstraintError::Negative,
                ..
            })
        ));
    }

    #[test]
    fn rejects_infinite_temperature() {
        let infinite = ThermodynamicTemperature::new::<kelvin>(f64::INFINITY);

        assert!(matches!(
            Observation::new(infinite, Pressure::new::<torr>(400.0)),
            Err(InputError::Temperature {
                source: ConstraintError::Infinite,
                ..
            })
        ));
        assert!(matches!(
            Observation::at_standard_pressure(infinite),
            Err(InputError::Temperature {
                source: ConstraintError::Infinite,
                ..
            })
        ));
    }

    #[test]
    fn rejects_invalid_pressure() {
        let t = ThermodynamicTemperature::new::<kelvin>(350.0);

        for (p, expected) in [
            (0.0, ConstraintError::Zero),
            (-10.0, ConstraintError::Negative),
            (f64::NAN, ConstraintError::NotANumber),
            (f64::INFINITY, ConstraintError::Infinite),
        ] {
            let err = Observation::new(t, Pressure::new::<torr>(p)).unwrap_err();
            assert!(matches!(err, InputError::Pressure { source, .. } if source == expected));
        }
    }
}
