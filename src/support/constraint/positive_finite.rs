use super::{Constraint, ConstraintError, StrictlyPositive};

/// Marker type enforcing that a float is strictly positive and finite.
///
/// [`StrictlyPositive`] accepts `+∞`, which has no meaning as an absolute
/// temperature or pressure. Check quantities with this marker on their SI
/// value before they enter a calculation.
///
/// # Examples
///
/// ```
/// use boiling_point_models::support::constraint::{Constrained, PositiveFinite};
///
/// assert!(Constrained::<f64, PositiveFinite>::new(373.15).is_ok());
/// assert!(Constrained::<f64, PositiveFinite>::new(f64::INFINITY).is_err());
/// assert!(Constrained::<f64, PositiveFinite>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PositiveFinite;

impl Constraint<f64> for PositiveFinite {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        if value.is_infinite() {
            return Err(ConstraintError::Infinite);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_positive_values() {
        assert!(PositiveFinite::check(&1e-300).is_ok());
        assert!(PositiveFinite::check(&f64::MAX).is_ok());
    }

    #[test]
    fn rejected_values() {
        assert_eq!(
            PositiveFinite::check(&f64::INFINITY),
            Err(ConstraintError::Infinite)
        );
        assert_eq!(
            PositiveFinite::check(&f64::NEG_INFINITY),
            Err(ConstraintError::Negative)
        );
        assert_eq!(PositiveFinite::check(&0.0), Err(ConstraintError::Zero));
        assert_eq!(
            PositiveFinite::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
