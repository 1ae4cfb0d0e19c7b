use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Works with any `T: PartialOrd + Zero`, including `f64` and `uom` quantities
/// such as `Pressure` or `AvailableEnergy`.
///
/// # Examples
///
/// ```
/// use contrail_core::constraint::StrictlyPositive;
/// use uom::si::{f64::Pressure, pressure::hectopascal};
///
/// let p = StrictlyPositive::new(Pressure::new::<hectopascal>(220.0)).unwrap();
/// assert_eq!(p.into_inner().value, 22_000.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Zero`] if the value equals zero.
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
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
