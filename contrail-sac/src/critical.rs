//! Critical temperature `T_LC`.
//!
//! At `T_LC` the mixing line through the ambient point `(T, U·e_w(T))` passes
//! through the tangency point `(T_LM, e_w(T_LM))`:
//!
//! ```text
//! f(T) = e_w(T_LM) − U·e_w(T) − G·(T_LM − T) = 0,   T ≤ T_LM
//! ```

use contrail_core::Observer;
use contrail_solve::equation::{
    DifferentiableEquation,
    newton::{self, Action, Config, Event, Solution, Status},
};
use contrail_thermo::units::VaporPressureSlope;
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::curve;

/// Estimates `T_LC` by linearizing `ln e_w` around `T_LM`.
///
/// With `b = G / e_w(T_LM)` and `y = b·(T_LM − T)` the condition becomes
/// `1 − y = U·exp(−y)`. Expanding the exponential to second order gives
///
/// ```text
/// y = (√((1 − U)² + 2U(1 − U)) − (1 − U)) / U
/// ```
///
/// and `T_LC ≈ T_LM − y/b`. A humidity of one or more returns `T_LM`, and a
/// non-positive humidity takes the dry limit `y = 1`.
#[must_use]
pub fn estimate_critical_temperature(
    threshold: ThermodynamicTemperature,
    gradient: VaporPressureSlope,
    relative_humidity: Ratio,
) -> ThermodynamicTemperature {
    let u = relative_humidity.get::<ratio>();
    if u >= 1.0 {
        return threshold;
    }

    let t_lm = threshold.get::<kelvin>();
    let b = gradient.value / curve::pressure(t_lm);

    // Rationalized so that `U → 0` is well conditioned.
    let y = if u <= 0.0 {
        1.0
    } else {
        2.0 * (1.0 - u) / ((1.0 - u * u).sqrt() + 1.0 - u)
    };

    ThermodynamicTemperature::new::<kelvin>(t_lm - y / b)
}

/// Mixing line through the tangency point, as a function of ambient temperature.
struct CriticalMixingLine {
    gradient: f64,
    threshold: f64,
    threshold_pressure: f64,
    humidity: f64,
}

impl CriticalMixingLine {
    fn new(
        gradient: VaporPressureSlope,
        threshold: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Self {
        let threshold = threshold.get::<kelvin>();
        Self {
            gradient: gradient.value,
            threshold,
            threshold_pressure: curve::pressure(threshold),
            humidity: relative_humidity.get::<ratio>(),
        }
    }
}

impl DifferentiableEquation for CriticalMixingLine {
    fn residual(&self, t: f64) -> f64 {
        self.threshold_pressure
            - self.humidity * curve::pressure(t)
            - self.gradient * (self.threshold - t)
    }

    fn derivative(&self, t: f64) -> f64 {
        self.gradient - self.humidity * curve::slope(t)
    }
}

/// Refines a `T_LC` guess with Newton-Raphson and reports how it went.
///
/// The returned [`Solution`] holds the refined temperature in kelvin and the
/// residual of the critical mixing line in Pa. For a humidity of one or more
/// the answer is `T_LM` itself, reported as converged after zero iterations.
///
/// # Errors
///
/// Returns a [`newton::Error`] if `config` is invalid or `initial` is not a
/// finite temperature.
pub fn refine_critical_temperature<Obs>(
    gradient: VaporPressureSlope,
    threshold: ThermodynamicTemperature,
    relative_humidity: Ratio,
    initial: ThermodynamicTemperature,
    config: &Config,
    observer: Obs,
) -> Result<Solution, newton::Error>
where
    Obs: Observer<Event, Action>,
{
    if relative_humidity.get::<ratio>() >= 1.0 {
        return Ok(Solution {
            status: Status::Converged,
            x: threshold.get::<kelvin>(),
            residual: 0.0,
            iters: 0,
        });
    }

    let equation = CriticalMixingLine::new(gradient, threshold, relative_humidity);
    newton::solve(&equation, initial.get::<kelvin>(), config, observer)
}

/// Refines a `T_LC` guess with the default Newton policy.
///
/// Never fails: an unusable seed is returned unchanged, and a refinement that
/// stops early yields its last finite iterate.
#[must_use]
pub fn newton_iter_tlc(
    gradient: VaporPressureSlope,
    threshold: ThermodynamicTemperature,
    relative_humidity: Ratio,
    initial: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    refine(
        gradient,
        threshold,
        relative_humidity,
        initial,
        &Config::default(),
    )
}

fn refine(
    gradient: VaporPressureSlope,
    threshold: ThermodynamicTemperature,
    relative_humidity: Ratio,
    initial: ThermodynamicTemperature,
    config: &Config,
) -> ThermodynamicTemperature {
    if relative_humidity.get::<ratio>() >= 1.0 {
        return threshold;
    }
    let equation = CriticalMixingLine::new(gradient, threshold, relative_humidity);
    curve::refine_or_seed(&equation, initial, config, "critical temperature")
}

/// `T_LC` from the estimate, refined when `iterate` is set.
pub(crate) fn critical_temperature(
    gradient: VaporPressureSlope,
    threshold: ThermodynamicTemperature,
    relative_humidity: Ratio,
    iterate: bool,
    config: &Config,
) -> ThermodynamicTemperature {
    let estimate = estimate_critical_temperature(threshold, gradient, relative_humidity);
    if iterate {
        refine(gradient, threshold, relative_humidity, estimate, config)
    } else {
        estimate
    }
}
