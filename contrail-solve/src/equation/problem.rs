/// A scalar equation `f(x) = 0` with a known derivative.
///
/// Implementors define the residual `f(x)` and its derivative `f'(x)`.
/// Both are plain `f64` functions of the solver variable; any units are the
/// implementor's concern.
pub trait DifferentiableEquation {
    /// Returns the residual `f(x)`.
    fn residual(&self, x: f64) -> f64;

    /// Returns the derivative `f'(x)`.
    fn derivative(&self, x: f64) -> f64;
}

impl<T: DifferentiableEquation + ?Sized> DifferentiableEquation for &T {
    fn residual(&self, x: f64) -> f64 {
        (**self).residual(x)
    }

    fn derivative(&self, x: f64) -> f64 {
        (**self).derivative(x)
    }
}
