//! Threshold temperature `T_LM`.
//!
//! `T_LM` is the ambient temperature at which a mixing line of slope `G`
//! touches the liquid saturation curve tangentially, so it solves
//! `de_w/dT(T_LM) = G`.

use contrail_core::Observer;
use contrail_solve::equation::{
    DifferentiableEquation,
    newton::{self, Action, Config, Event, Solution},
};
use contrail_thermo::units::VaporPressureSlope;
use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::curve;

/// Offset below which the Schumann fit has no real logarithm, in Pa/K.
const FIT_OFFSET: f64 = 0.053;

/// Estimates `T_LM` with the Schumann (1996) fit:
///
/// ```text
/// T_LM / °C = −46.46 + 9.43·ln(G − 0.053) + 0.72·ln²(G − 0.053)
/// ```
///
/// The estimate is within a few hundredths of a kelvin of the tangency point
/// for the gradients of real fuels. It is NaN for `G ≤ 0.053 Pa/K`.
#[must_use]
pub fn estimate_liquid_threshold_temperature(
    gradient: VaporPressureSlope,
) -> ThermodynamicTemperature {
    let x = (gradient.value - FIT_OFFSET).ln();
    ThermodynamicTemperature::new::<degree_celsius>(-46.46 + 9.43 * x + 0.72 * x * x)
}

/// Tangency between the mixing line and the saturation curve.
struct Tangency {
    gradient: f64,
}

impl DifferentiableEquation for Tangency {
    fn residual(&self, t: f64) -> f64 {
        curve::slope(t) - self.gradient
    }

    fn derivative(&self, t: f64) -> f64 {
        curve::curvature(t)
    }
}

/// Refines a `T_LM` guess with Newton-Raphson and reports how it went.
///
/// The returned [`Solution`] holds the refined temperature in kelvin and the
/// residual `de_w/dT − G` in Pa/K.
///
/// # Errors
///
/// Returns a [`newton::Error`] if `config` is invalid or `initial` is not a
/// finite temperature.
pub fn refine_threshold_temperature<Obs>(
    gradient: VaporPressureSlope,
    initial: ThermodynamicTemperature,
    config: &Config,
    observer: Obs,
) -> Result<Solution, newton::Error>
where
    Obs: Observer<Event, Action>,
{
    let equation = Tangency {
        gradient: gradient.value,
    };
    newton::solve(&equation, initial.get::<kelvin>(), config, observer)
}

/// Refines a `T_LM` guess with the default Newton policy.
///
/// Never fails: an unusable seed is returned unchanged, and a refinement that
/// stops early yields its last finite iterate.
#[must_use]
pub fn newton_iter_tlm(
    gradient: VaporPressureSlope,
    initial: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    refine(gradient, initial, &Config::default())
}

fn refine(
    gradient: VaporPressureSlope,
    initial: ThermodynamicTemperature,
    config: &Config,
) -> ThermodynamicTemperature {
    let equation = Tangency {
        gradient: gradient.value,
    };
    curve::refine_or_seed(&equation, initial, config, "threshold temperature")
}

/// `T_LM` from the estimate, refined when `iterate` is set.
pub(crate) fn threshold_temperature(
    gradient: VaporPressureSlope,
    iterate: bool,
    config: &Config,
) -> ThermodynamicTemperature {
    let estimate = estimate_liquid_threshold_temperature(gradient);
    if iterate {
        refine(gradient, estimate, config)
    } else {
        estimate
    }
}
