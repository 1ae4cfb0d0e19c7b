use thiserror::Error;

/// Errors that prevent the Newton-Raphson solver from starting.
///
/// Running out of iterations is not an error; see [`Status`](super::Status).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("initial guess is not finite: {x}")]
    NonFiniteGuess { x: f64 },

    #[error("non-finite residual {residual} at initial guess x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}
