//! Kelvin-valued views of the liquid saturation curve for the root finders.

use contrail_solve::equation::newton::{self, Config};
use contrail_solve::equation::DifferentiableEquation;
use contrail_thermo::saturation::{
    saturation_pressure_liquid, saturation_pressure_liquid_curvature,
    saturation_pressure_liquid_slope,
};
use tracing::debug;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

fn at(t: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(t)
}

/// Saturation pressure in Pa at `t` kelvin.
pub(crate) fn pressure(t: f64) -> f64 {
    saturation_pressure_liquid(at(t)).value
}

/// Slope in Pa/K at `t` kelvin.
pub(crate) fn slope(t: f64) -> f64 {
    saturation_pressure_liquid_slope(at(t)).value
}

/// Curvature in Pa/K² at `t` kelvin.
pub(crate) fn curvature(t: f64) -> f64 {
    saturation_pressure_liquid_curvature(at(t)).value
}

/// Refines `seed` and falls back to it if the solver cannot start.
pub(crate) fn refine_or_seed<E: DifferentiableEquation>(
    equation: &E,
    seed: ThermodynamicTemperature,
    config: &Config,
    quantity: &'static str,
) -> ThermodynamicTemperature {
    match newton::solve_unobserved(equation, seed.get::<kelvin>(), config) {
        Ok(solution) => at(solution.x),
        Err(error) => {
            debug!(quantity, %error, "refinement not started, keeping seed");
            seed
        }
    }
}
