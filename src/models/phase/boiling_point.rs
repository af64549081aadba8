//! Boiling point models.
//!
//! This module provides the [`Molecule`] model and a [`twine_core::Model`]
//! adapter, [`BoilingCurveModel`], that evaluates a molecule's boiling point
//! at a given pressure. The computational core is in the internal `core` module.

mod core;

pub use self::core::{
    BoilingCurve, BoilingPointError, CurvePoint, DEFAULT_NORMAL_BOILING_POINT_K, InputError,
    Molecule, Observation, PressureSweep, Spacing, SweepError,
};
pub use crate::support::vaporization::{UnknownEstimateError, VaporizationEnthalpy};

use twine_core::Model;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Model adapter mapping a pressure to a molecule's boiling point.
///
/// Borrows the molecule, so the calibration cannot change while the model is
/// in use.
#[derive(Debug, Clone, Copy)]
pub struct BoilingCurveModel<'a> {
    molecule: &'a Molecule,
}

impl<'a> BoilingCurveModel<'a> {
    #[must_use]
    pub fn new(molecule: &'a Molecule) -> Self {
        Self { molecule }
    }

    #[must_use]
    pub fn molecule(&self) -> &'a Molecule {
        self.molecule
    }
}

impl Model for BoilingCurveModel<'_> {
    type Input = Pressure;
    type Output = ThermodynamicTemperature;
    type Error = BoilingPointError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.molecule.boiling_point_at(*input)
    }
}
