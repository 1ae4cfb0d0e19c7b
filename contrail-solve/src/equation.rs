//! Solvers for scalar equations, finding `x` such that `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson refinement from an initial guess

mod problem;

pub use problem::DifferentiableEquation;

pub mod newton;
