use thiserror::Error;
use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::torr,
};

use super::{InputError, observation::check_pressure};

/// Spacing of the pressures in a [`PressureSweep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    /// Uniformly spaced pressures.
    #[default]
    Linear,
    /// Uniformly spaced in `ln(p)`.
    Logarithmic,
}

/// Errors returned when defining a [`PressureSweep`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SweepError {
    /// A bound was not strictly positive.
    #[error("invalid sweep bound")]
    Bound(#[from] InputError),

    /// A sweep needs at least two points.
    #[error("sweep must have at least 2 points, got {num_points}")]
    TooFewPoints { num_points: usize },

    /// The start and end pressures are equal.
    #[error("sweep start and end must differ: {pressure:?}")]
    EmptyRange { pressure: Pressure },
}

/// A set of pressures at which to sample a boiling curve.
///
/// Both bounds are included and guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureSweep {
    start: Pressure,
    end: Pressure,
    num_points: usize,
    spacing: Spacing,
}

impl PressureSweep {
    /// Defines a validated sweep from `start` to `end`, inclusive.
    ///
    /// `start` may be greater than `end`, in which case pressures decrease.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if a bound is not strictly positive and
    /// finite, if the bounds are equal, or if fewer than two points are
    /// requested.
    pub fn new(
        start: Pressure,
        end: Pressure,
        num_points: usize,
        spacing: Spacing,
    ) -> Result<Self, SweepError> {
        let start = check_pressure(start)?;
        let end = check_pressure(end)?;

        if num_points < 2 {
            return Err(SweepError::TooFewPoints { num_points });
        }
        if start == end {
            return Err(SweepError::EmptyRange { pressure: start });
        }

        Ok(Self {
            start,
            end,
            num_points,
            spacing,
        })
    }

    #[must_use]
    pub fn start(&self) -> Pressure {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Pressure {
        self.end
    }

    #[must_use]
    pub fn num_points(&self) -> usize {
        self.num_points
    }

    #[must_use]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// Returns the sweep pressures in order from `start` to `end`.
    ///
    /// The endpoints are reproduced exactly.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pressures(&self) -> Vec<Pressure> {
        let last = self.num_points - 1;
        let start = self.start.get::<torr>();
        let end = self.end.get::<torr>();

        let mut pressures: Vec<Pressure> = match self.spacing {
            Spacing::Linear => {
                let step = (end - start) / last as f64;
                (0..self.num_points)
                    .map(|i| Pressure::new::<torr>(start + i as f64 * step))
                    .collect()
            }
            Spacing::Logarithmic => {
                let (ln_start, ln_end) = (start.ln(), end.ln());
                let step = (ln_end - ln_start) / last as f64;
                (0..self.num_points)
                    .map(|i| Pressure::new::<torr>((ln_start + i as f64 * step).exp()))
                    .collect()
            }
        };

        pressures[0] = self.start;
        pressures[last] = self.end;
        pressures
    }
}

/// Samples 0.10 to 6.99 Torr in 0.01 Torr steps.
impl Default for PressureSweep {
    fn default() -> Self {
        Self {
            start: Pressure::new::<torr>(0.1),
            end: Pressure::new::<torr>(6.99),
            num_points: 690,
            spacing: Spacing::Linear,
        }
    }
}

/// One evaluated point on a boiling curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

/// Boiling temperatures sampled over a [`PressureSweep`].
///
/// Pressures where the model is out of domain are listed in `excluded`
/// rather than given a point.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoilingCurve {
    pub points: Vec<CurvePoint>,
    pub excluded: Vec<Pressure>,
}

impl BoilingCurve {
    /// Returns `true` if every sweep pressure produced a point.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.excluded.is_empty()
    }
}
