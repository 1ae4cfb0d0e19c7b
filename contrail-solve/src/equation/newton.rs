mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use contrail_core::Observer;
use tracing::{debug, trace};

use crate::equation::DifferentiableEquation;

/// Control actions supported by the Newton-Raphson solver.
pub enum Action {
    /// Stop the solver and keep the current iterate.
    StopEarly,
}

/// Iteration event emitted by the Newton-Raphson solver after each step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate after the step.
    pub x: f64,
    /// Step that was applied, `x_prev − x`.
    pub step: f64,
    /// Residual at the new iterate.
    pub residual: f64,
}

/// Refines `x0` toward a root of `equation` with Newton-Raphson steps
/// `x ← x − f(x)/f'(x)`.
///
/// The solver never fails once started. If the iteration cap is reached, or a
/// step cannot be taken, the returned [`Solution`] holds the last finite
/// iterate and a [`Status`] explaining why it stopped.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if the initial guess or its
/// residual is not finite.
pub fn solve<E, Obs>(
    equation: &E,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: DifferentiableEquation,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !x0.is_finite() {
        return Err(Error::NonFiniteGuess { x: x0 });
    }

    let mut x = x0;
    let mut residual = equation.residual(x);
    if !residual.is_finite() {
        return Err(Error::NonFiniteResidual { x, residual });
    }

    for iter in 1..=config.max_iters {
        let slope = equation.derivative(x);
        if slope == 0.0 || !slope.is_finite() {
            return Ok(finish(Status::ZeroDerivative, x, residual, iter - 1));
        }

        let step = residual / slope;
        let next = x - step;
        let next_residual = equation.residual(next);
        if !next.is_finite() || !next_residual.is_finite() {
            return Ok(finish(Status::NonFiniteStep, x, residual, iter - 1));
        }

        x = next;
        residual = next_residual;
        trace!(iter, x, step, residual, "newton step");

        let event = Event {
            iter,
            x,
            step,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, x, residual, iter));
        }

        if step.abs() <= config.x_abs_tol {
            return Ok(finish(Status::Converged, x, residual, iter));
        }
    }

    Ok(finish(Status::MaxIters, x, residual, config.max_iters))
}

fn finish(status: Status, x: f64, residual: f64, iters: usize) -> Solution {
    if status != Status::Converged {
        debug!(?status, x, residual, iters, "newton refinement stopped");
    }
    Solution {
        status,
        x,
        residual,
        iters,
    }
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, or if the initial guess or its
/// residual is not finite.
pub fn solve_unobserved<E: DifferentiableEquation>(
    equation: &E,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, x0, config, ())
}
