//! Numerical solvers for the contrail workspace.

pub mod equation;
