use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Absolute temperatures in Kelvin and absolute pressures must both satisfy
/// this constraint before they enter a Clausius–Clapeyron calculation.
///
/// # Examples
///
/// ```
/// use boiling_point_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(273.0).unwrap();
/// assert_eq!(x.into_inner(), 273.0);
///
/// let y = StrictlyPositive::new(760.0).unwrap();
/// assert_eq!(y.into_inner(), 760.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Pressure, pressure::torr};

    #[test]
    fn kelvin_values() {
        assert!(StrictlyPositive::check(&273.15).is_ok());
        assert!(StrictlyPositive::check(&1e-300).is_ok());
        assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(
            StrictlyPositive::check(&-40.0),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn pressures() {
        let p = Pressure::new::<torr>(400.0);
        let constrained = StrictlyPositive::new(p).unwrap();
        assert_eq!(constrained.as_ref(), &p);

        assert_eq!(
            StrictlyPositive::new(Pressure::new::<torr>(0.0)).unwrap_err(),
            ConstraintError::Zero
        );
        assert_eq!(
            StrictlyPositive::new(Pressure::new::<torr>(-1.0)).unwrap_err(),
            ConstraintError::Negative
        );
    }
}
