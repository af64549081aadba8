use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

/// Errors that can occur while calibrating or evaluating a boiling point model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoilingPointError {
    /// A temperature or pressure was not strictly positive.
    #[error("invalid input")]
    InvalidInput(#[from] InputError),

    /// The pressure lies outside the model's valid range for the current calibration.
    ///
    /// For boiling point evaluation this means the Clausius–Clapeyron
    /// denominator is no longer positive. For calibration it means the
    /// recovered normal boiling point would not be positive.
    #[error("out of domain: pressure={pressure:?} must be below limit={limit:?}")]
    OutOfDomain {
        /// Pressure that was requested or observed.
        pressure: Pressure,

        /// Largest pressure the model can accept, exclusive.
        limit: Pressure,
    },
}

/// A rejected model input.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("invalid temperature {temperature:?}")]
    Temperature {
        temperature: ThermodynamicTemperature,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid pressure {pressure:?}")]
    Pressure {
        pressure: Pressure,
        #[source]
        source: ConstraintError,
    },
}
