use tracing::{debug, trace};
use uom::si::{
    f64::{MolarEnergy, Pressure, ThermodynamicTemperature},
    pressure::torr,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    units::standard_pressure,
    vaporization::{VaporizationEnthalpy, clausius_clapeyron},
};

use super::{
    BoilingCurve, BoilingPointError, CurvePoint, Observation, PressureSweep,
    observation::check_pressure,
};

/// Default normal boiling point, in Kelvin, of a new [`Molecule`].
pub const DEFAULT_NORMAL_BOILING_POINT_K: f64 = 273.0;

/// How the normal boiling point of a [`Molecule`] was last set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Calibration {
    /// Supplied directly; independent of the enthalpy estimate.
    Direct,
    /// Derived from an off-standard observation under the active estimate.
    Observed,
}

/// A chemical species whose boiling point is estimated as a function of pressure.
///
/// A molecule is calibrated either directly with its normal boiling point
/// ([`set_normal_boiling_point`](Self::set_normal_boiling_point)) or from a
/// boiling point observed at another pressure
/// ([`derive_normal_boiling_point`](Self::derive_normal_boiling_point)).
///
/// When calibrated from an observation, the normal boiling point always
/// agrees with that observation under the active [`VaporizationEnthalpy`]:
/// changing the estimate recalibrates.
///
/// # Example
///
/// ```
/// use boiling_point_models::models::phase::boiling_point::{Molecule, VaporizationEnthalpy};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::torr,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let mut ethanol = Molecule::new("Ethanol");
/// ethanol.derive_normal_boiling_point(
///     ThermodynamicTemperature::new::<kelvin>(350.0),
///     Pressure::new::<torr>(400.0),
/// )?;
///
/// let tb = ethanol.normal_boiling_point().get::<kelvin>();
/// assert!((tb - 371.97).abs() < 0.01);
///
/// ethanol.set_estimate(VaporizationEnthalpy::Water)?;
/// assert!(ethanol.normal_boiling_point().get::<kelvin>() < tb);
/// # Ok::<(), boiling_point_models::models::phase::boiling_point::BoilingPointError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    name: String,
    normal_boiling_point: ThermodynamicTemperature,
    reference: Observation,
    calibration: Calibration,
    estimate: VaporizationEnthalpy,
}

impl Molecule {
    /// Creates a molecule with a 273 K normal boiling point and Trouton's rule.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let normal_boiling_point =
            ThermodynamicTemperature::new::<kelvin>(DEFAULT_NORMAL_BOILING_POINT_K);
        Self {
            name: name.into(),
            normal_boiling_point,
            reference: Observation::new_unchecked(normal_boiling_point, standard_pressure()),
            calibration: Calibration::Direct,
            estimate: VaporizationEnthalpy::default(),
        }
    }

    /// Creates a molecule with a known normal boiling point and estimate.
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::InvalidInput`] if `normal_boiling_point`
    /// is not strictly positive and finite.
    pub fn with_normal_boiling_point(
        name: impl Into<String>,
        normal_boiling_point: ThermodynamicTemperature,
        estimate: VaporizationEnthalpy,
    ) -> Result<Self, BoilingPointError> {
        let reference = Observation::at_standard_pressure(normal_boiling_point)?;
        Ok(Self {
            name: name.into(),
            normal_boiling_point,
            reference,
            calibration: Calibration::Direct,
            estimate,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the boiling point at standard pressure.
    #[must_use]
    pub fn normal_boiling_point(&self) -> ThermodynamicTemperature {
        self.normal_boiling_point
    }

    /// Returns the active enthalpy of vaporization estimate.
    #[must_use]
    pub fn estimate(&self) -> VaporizationEnthalpy {
        self.estimate
    }

    /// Returns the observation the normal boiling point was last calibrated from.
    ///
    /// After a direct calibration this is the normal boiling point at standard pressure.
    #[must_use]
    pub fn reference_observation(&self) -> Observation {
        self.reference
    }

    /// Returns `true` if the normal boiling point was derived from an observation.
    #[must_use]
    pub fn is_calibrated_from_observation(&self) -> bool {
        self.calibration == Calibration::Observed
    }

    /// Returns the estimated enthalpy of vaporization at the normal boiling point.
    #[must_use]
    pub fn enthalpy_of_vaporization(&self) -> MolarEnergy {
        self.estimate.estimate(self.normal_boiling_point)
    }

    /// Sets the normal boiling point directly.
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::InvalidInput`] if `normal_boiling_point`
    /// is not strictly positive and finite. The molecule is left unchanged.
    pub fn set_normal_boiling_point(
        &mut self,
        normal_boiling_point: ThermodynamicTemperature,
    ) -> Result<(), BoilingPointError> {
        self.reference = Observation::at_standard_pressure(normal_boiling_point)?;
        self.normal_boiling_point = normal_boiling_point;
        self.calibration = Calibration::Direct;

        debug!(
            molecule = %self.name,
            tb_kelvin = normal_boiling_point.get::<kelvin>(),
            "normal boiling point set directly"
        );
        Ok(())
    }

    /// Derives the normal boiling point from a boiling point observed at `pressure`.
    ///
    /// Uses the active estimate, except that the T-H-E rule is replaced by
    /// Trouton's rule for the inversion.
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::InvalidInput`] if `temperature` or
    /// `pressure` is not strictly positive and finite, or
    /// [`BoilingPointError::OutOfDomain`] if `pressure` is so high that the
    /// derived normal boiling point would not be positive.
    /// On error the molecule is left unchanged.
    pub fn derive_normal_boiling_point(
        &mut self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<(), BoilingPointError> {
        let observation = Observation::new(temperature, pressure)?;
        let normal_boiling_point = derive(&self.name, observation, self.estimate)?;

        self.normal_boiling_point = normal_boiling_point;
        self.reference = observation;
        self.calibration = Calibration::Observed;
        Ok(())
    }

    /// Changes the enthalpy of vaporization estimate.
    ///
    /// If the molecule was calibrated from an observation, the normal boiling
    /// point is recalibrated under the new estimate.
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::OutOfDomain`] if recalibration fails under
    /// the new estimate. The molecule is left unchanged.
    pub fn set_estimate(
        &mut self,
        estimate: VaporizationEnthalpy,
    ) -> Result<(), BoilingPointError> {
        let previous = self.estimate;
        self.estimate = estimate;

        if let Err(error) = self.recalibrate() {
            self.estimate = previous;
            return Err(error);
        }
        Ok(())
    }

    /// Re-derives the normal boiling point from the reference observation.
    ///
    /// Does nothing after a direct calibration, since the normal boiling point
    /// does not depend on the estimate.
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::OutOfDomain`] if the reference observation
    /// is out of domain under the active estimate.
    pub fn recalibrate(&mut self) -> Result<(), BoilingPointError> {
        if self.calibration == Calibration::Direct {
            return Ok(());
        }

        self.normal_boiling_point = derive(&self.name, self.reference, self.estimate)?;
        Ok(())
    }

    /// Computes the boiling point at `pressure`.
    ///
    /// At standard pressure this is exactly the normal boiling point.
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::InvalidInput`] if `pressure` is not
    /// strictly positive and finite, or [`BoilingPointError::OutOfDomain`] if
    /// `pressure` is at or above [`max_pressure`](Self::max_pressure).
    /// Every pressure is out of domain when the estimated enthalpy is not
    /// positive, which the T-H-E rule gives for `Tb ≤ e^-4.4 K`.
    pub fn boiling_point_at(
        &self,
        pressure: Pressure,
    ) -> Result<ThermodynamicTemperature, BoilingPointError> {
        let pressure = check_pressure(pressure)?;

        let enthalpy = self.enthalpy_of_vaporization();
        clausius_clapeyron::boiling_point(self.normal_boiling_point, enthalpy, pressure).ok_or_else(
            || BoilingPointError::OutOfDomain {
                pressure,
                limit: clausius_clapeyron::max_pressure(self.normal_boiling_point, enthalpy),
            },
        )
    }

    /// Returns the pressure above which [`boiling_point_at`](Self::boiling_point_at)
    /// is out of domain.
    ///
    /// Zero if the estimated enthalpy is not positive.
    #[must_use]
    pub fn max_pressure(&self) -> Pressure {
        clausius_clapeyron::max_pressure(self.normal_boiling_point, self.enthalpy_of_vaporization())
    }

    /// Samples the boiling point over every pressure in `sweep`.
    ///
    /// Out-of-domain pressures are collected in [`BoilingCurve::excluded`].
    ///
    /// # Errors
    ///
    /// Returns [`BoilingPointError::InvalidInput`] if the sweep yields a
    /// pressure that is not strictly positive and finite.
    pub fn boiling_curve(&self, sweep: &PressureSweep) -> Result<BoilingCurve, BoilingPointError> {
        let mut curve = BoilingCurve::default();

        for pressure in sweep.pressures() {
            match self.boiling_point_at(pressure) {
                Ok(temperature) => curve.points.push(CurvePoint {
                    pressure,
                    temperature,
                }),
                Err(BoilingPointError::OutOfDomain { .. }) => {
                    trace!(
                        molecule = %self.name,
                        pressure_torr = pressure.get::<torr>(),
                        "excluding out-of-domain pressure from curve"
                    );
                    curve.excluded.push(pressure);
                }
                Err(error) => return Err(error),
            }
        }

        Ok(curve)
    }
}

impl Default for Molecule {
    fn default() -> Self {
        Self::new("Molecule")
    }
}

/// Derives a normal boiling point from a validated observation.
fn derive(
    name: &str,
    observation: Observation,
    estimate: VaporizationEnthalpy,
) -> Result<ThermodynamicTemperature, BoilingPointError> {
    // The T-H-E rule is not linear in temperature, so it cannot be inverted
    // in closed form. Trouton's rule stands in for the inversion only; the
    // molecule keeps the T-H-E rule for evaluating boiling points.
    let inversion = if estimate.is_linear() {
        estimate
    } else {
        debug!(
            molecule = %name,
            estimate = %estimate,
            "using Trouton's rule to invert a non-linear estimate"
        );
        VaporizationEnthalpy::TroutonsRule
    };

    let coefficient = inversion.coefficient();
    let normal_boiling_point = clausius_clapeyron::normal_boiling_point(
        observation.temperature(),
        observation.pressure(),
        coefficient,
    )
    .ok_or_else(|| BoilingPointError::OutOfDomain {
        pressure: observation.pressure(),
        limit: clausius_clapeyron::max_observed_pressure(coefficient),
    })?;

    debug!(
        molecule = %name,
        observed_kelvin = observation.temperature().get::<kelvin>(),
        observed_torr = observation.pressure().get::<torr>(),
        estimate = %estimate,
        tb_kelvin = normal_boiling_point.get::<kelvin>(),
        "normal boiling point derived from observation"
    );
    Ok(normal_boiling_point)
}
