/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last step satisfied the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
    /// The derivative vanished or was not finite, so no step could be taken.
    ZeroDerivative,
    /// A step produced a non-finite iterate or residual.
    NonFiniteStep,
}

/// The result of a Newton-Raphson solve.
///
/// `x` is always a finite iterate: the initial guess at worst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Residual at `x`.
    pub residual: f64,
    /// Number of completed steps.
    pub iters: usize,
}

impl Solution {
    /// Returns `true` if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
