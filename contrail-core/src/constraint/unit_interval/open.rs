use std::cmp::Ordering;

use crate::constraint::{Constrained, Constraint, ConstraintError};

use super::UnitBounds;

/// Marker type enforcing that a value lies in the open unit interval: `0 < x < 1`.
///
/// Requires `T: UnitBounds`.
/// Efficiencies that appear as `1 − η` in a denominator use this marker, since
/// both endpoints make the expression degenerate.
///
/// # Examples
///
/// Using with `f64`:
///
/// ```
/// use contrail_core::constraint::{Constrained, UnitIntervalOpen};
///
/// let a = Constrained::<_, UnitIntervalOpen>::new(0.308).unwrap();
/// assert_eq!(a.into_inner(), 0.308);
///
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// assert!(UnitIntervalOpen::new(f64::NAN).is_err());
/// ```
///
/// Using with `uom::si::f64::Ratio`:
///
/// ```
/// use contrail_core::constraint::UnitIntervalOpen;
/// use uom::si::{f64::Ratio, ratio::percent};
///
/// let eta = UnitIntervalOpen::new(Ratio::new::<percent>(30.8)).unwrap();
/// assert!((eta.as_ref().value - 0.308).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if 0 < value < 1.
    ///
    /// # Errors
    ///
    /// Fails if the value is outside the open unit interval:
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
