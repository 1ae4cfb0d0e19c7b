mod open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use open::UnitIntervalOpen;

/// Types that have a zero and a one, and can be ordered.
///
/// Implemented for `f64` and `uom::si::f64::Ratio`.
pub trait UnitBounds: PartialOrd + Sized {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
