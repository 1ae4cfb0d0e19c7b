use contrail_solve::equation::newton;
use contrail_thermo::units::VaporPressureSlope;
use tracing::{debug, trace};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{AmbientState, EngineParameters, critical, humidity, mixing_line, threshold};

/// Configuration for [`Evaluator`].
///
/// Both refinements are on by default. Turning off `iterate_critical` leaves
/// `T_LC` at its closed-form estimate, which is a few tenths of a kelvin off
/// and lets the two verdicts disagree near the critical temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(default))]
pub struct SacConfig {
    /// Refine `T_LM` with Newton-Raphson.
    pub iterate_threshold: bool,
    /// Refine `T_LC` with Newton-Raphson.
    pub iterate_critical: bool,
    /// Policy shared by both refinements.
    pub newton: newton::Config,
}

impl Default for SacConfig {
    fn default() -> Self {
        Self {
            iterate_threshold: true,
            iterate_critical: true,
            newton: newton::Config::default(),
        }
    }
}

/// Everything the criterion computes for one ambient state and engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Mixing-line gradient `G`.
    pub gradient: VaporPressureSlope,
    /// Threshold temperature `T_LM`.
    pub threshold_temperature: ThermodynamicTemperature,
    /// Critical temperature `T_LC` at the ambient humidity.
    pub critical_temperature: ThermodynamicTemperature,
    /// Critical relative humidity `U_LC` at the ambient temperature.
    pub critical_relative_humidity: Ratio,
    /// `T ≤ T_LC`, or saturated ambient air (`RH ≥ 1`) at any temperature.
    pub forms_by_temperature: bool,
    /// `RH ≥ U_LC`
    pub forms_by_humidity: bool,
}

impl Evaluation {
    /// Returns `true` if both decision paths reach the same verdict.
    #[must_use]
    pub fn agrees(&self) -> bool {
        self.forms_by_temperature == self.forms_by_humidity
    }
}

/// Applies the Schmidt-Appleman Criterion with a fixed configuration.
///
/// # Example
///
/// ```
/// use contrail_sac::{AmbientState, EngineParameters, Evaluator, Fuel};
/// use uom::si::{
///     f64::{Pressure, Ratio, ThermodynamicTemperature},
///     pressure::hectopascal,
///     ratio::percent,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let ambient = AmbientState::new(
///     Pressure::new::<hectopascal>(220.0),
///     ThermodynamicTemperature::new::<degree_celsius>(-59.0),
///     Ratio::new::<percent>(42.0),
/// )?;
/// let engine = EngineParameters::for_fuel(Fuel::Kerosene, Ratio::new::<percent>(30.8))?;
///
/// let evaluation = Evaluator::default().evaluate(&ambient, &engine);
/// assert!(evaluation.forms_by_temperature);
/// assert!(evaluation.agrees());
/// # Ok::<(), contrail_sac::SacError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Evaluator {
    config: SacConfig,
}

impl Evaluator {
    #[must_use]
    pub fn new(config: SacConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SacConfig {
        &self.config
    }

    /// Evaluates both decision paths.
    ///
    /// `U_LC` is computed from the same `T_LM` as `T_LC`, so the two verdicts
    /// follow one threshold policy. Saturated or supersaturated air forms a
    /// contrail by either test, since `U_LC` never exceeds one.
    #[must_use]
    pub fn evaluate(&self, ambient: &AmbientState, engine: &EngineParameters) -> Evaluation {
        let config = &self.config;
        let saturated = Ratio::new::<ratio>(1.0);

        let gradient = mixing_line::gradient(ambient.constrained_pressure(), engine);
        let threshold_temperature =
            threshold::threshold_temperature(gradient, config.iterate_threshold, &config.newton);
        let critical_temperature = critical::critical_temperature(
            gradient,
            threshold_temperature,
            ambient.relative_humidity(),
            config.iterate_critical,
            &config.newton,
        );
        let critical_relative_humidity = humidity::critical_relative_humidity(
            gradient,
            threshold_temperature,
            ambient.temperature(),
        );

        let evaluation = Evaluation {
            gradient,
            threshold_temperature,
            critical_temperature,
            critical_relative_humidity,
            forms_by_temperature: ambient.relative_humidity() >= saturated
                || ambient.temperature() <= critical_temperature,
            forms_by_humidity: ambient.relative_humidity() >= critical_relative_humidity,
        };

        trace!(
            gradient = gradient.value,
            t_lm = threshold_temperature.get::<kelvin>(),
            t_lc = critical_temperature.get::<kelvin>(),
            u_lc = critical_relative_humidity.get::<ratio>(),
            forms_by_temperature = evaluation.forms_by_temperature,
            forms_by_humidity = evaluation.forms_by_humidity,
            "sac evaluation"
        );
        if !evaluation.agrees() {
            debug!(
                temperature = ambient.temperature().get::<kelvin>(),
                relative_humidity = ambient.relative_humidity().get::<ratio>(),
                t_lc = critical_temperature.get::<kelvin>(),
                u_lc = critical_relative_humidity.get::<ratio>(),
                "temperature and humidity verdicts disagree"
            );
        }

        evaluation
    }
}

/// Evaluates the criterion once with `config`.
#[must_use]
pub fn evaluate(
    ambient: &AmbientState,
    engine: &EngineParameters,
    config: &SacConfig,
) -> Evaluation {
    Evaluator::new(*config).evaluate(ambient, engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        f64::Pressure, pressure::hectopascal, ratio::percent,
        thermodynamic_temperature::degree_celsius,
    };

    use crate::{
        Fuel,
        critical::estimate_critical_temperature,
        threshold::estimate_liquid_threshold_temperature,
    };

    fn ambient(celsius: f64, rh_percent: f64) -> AmbientState {
        AmbientState::new(
            Pressure::new::<hectopascal>(220.0),
            ThermodynamicTemperature::new::<degree_celsius>(celsius),
            Ratio::new::<percent>(rh_percent),
        )
        .expect("valid ambient state")
    }

    fn kerosene() -> EngineParameters {
        EngineParameters::for_fuel(Fuel::Kerosene, Ratio::new::<percent>(30.8))
            .expect("valid efficiency")
    }

    #[test]
    fn cold_cruise_forms_contrail() {
        let evaluation = Evaluator::default().evaluate(&ambient(-59.0, 42.0), &kerosene());

        assert_relative_eq!(evaluation.gradient.value, 1.4918, max_relative = 1e-4);
        assert_relative_eq!(
            evaluation.threshold_temperature.get::<degree_celsius>(),
            -42.898,
            epsilon = 0.01
        );
        assert_relative_eq!(
            evaluation.critical_temperature.get::<degree_celsius>(),
            -50.630,
            epsilon = 0.01
        );
        assert!(evaluation.forms_by_temperature);
        assert!(evaluation.forms_by_humidity);
        assert!(evaluation.critical_relative_humidity.get::<ratio>() < 0.42);
    }

    #[test]
    fn warm_air_forms_no_contrail() {
        let evaluation = Evaluator::default().evaluate(&ambient(-30.0, 42.0), &kerosene());

        assert!(!evaluation.forms_by_temperature);
        assert!(!evaluation.forms_by_humidity);
        assert_eq!(evaluation.critical_relative_humidity.get::<ratio>(), 1.0);
        assert!(evaluation.agrees());
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let evaluator = Evaluator::default();
        let (state, engine) = (ambient(-50.5, 42.0), kerosene());

        let first = evaluator.evaluate(&state, &engine);
        let second = evaluator.evaluate(&state, &engine);
        assert_eq!(first, second);
        assert_eq!(
            first.critical_temperature.value.to_bits(),
            second.critical_temperature.value.to_bits()
        );
    }

    #[test]
    fn switches_fall_back_to_estimates() {
        let (state, engine) = (ambient(-50.5, 42.0), kerosene());
        let config = SacConfig {
            iterate_threshold: false,
            iterate_critical: false,
            ..SacConfig::default()
        };

        let evaluation = evaluate(&state, &engine, &config);
        let t_lm = estimate_liquid_threshold_temperature(evaluation.gradient);
        assert_eq!(evaluation.threshold_temperature, t_lm);
        assert_eq!(
            evaluation.critical_temperature,
            estimate_critical_temperature(t_lm, evaluation.gradient, state.relative_humidity())
        );
    }

    #[test]
    fn switches_are_independent() {
        let (state, engine) = (ambient(-50.5, 42.0), kerosene());
        let both = Evaluator::default().evaluate(&state, &engine);

        let threshold_only = evaluate(
            &state,
            &engine,
            &SacConfig {
                iterate_critical: false,
                ..SacConfig::default()
            },
        );
        assert_eq!(threshold_only.threshold_temperature, both.threshold_temperature);
        assert_ne!(threshold_only.critical_temperature, both.critical_temperature);
        assert_eq!(
            threshold_only.critical_relative_humidity,
            both.critical_relative_humidity
        );
    }

    #[test]
    fn saturated_air_puts_critical_at_threshold() {
        let evaluation = Evaluator::default().evaluate(&ambient(-45.0, 100.0), &kerosene());
        assert_eq!(
            evaluation.critical_temperature,
            evaluation.threshold_temperature
        );
    }

    #[test]
    fn warm_humid_air_forms_no_contrail() {
        for (celsius, rh) in [(-35.0, 90.0), (-30.0, 70.0), (-20.0, 60.0)] {
            let evaluation = Evaluator::default().evaluate(&ambient(celsius, rh), &kerosene());

            assert!(!evaluation.forms_by_temperature, "{celsius} °C, {rh} %");
            assert!(!evaluation.forms_by_humidity, "{celsius} °C, {rh} %");
        }
    }

    #[test]
    fn supersaturated_air_forms_at_any_temperature() {
        for (celsius, rh) in [(-35.0, 110.0), (-20.0, 100.0), (-60.0, 105.0)] {
            let evaluation = Evaluator::default().evaluate(&ambient(celsius, rh), &kerosene());

            assert!(evaluation.forms_by_temperature, "{celsius} °C, {rh} %");
            assert!(evaluation.forms_by_humidity, "{celsius} °C, {rh} %");
        }
    }

    proptest! {
        #[test]
        fn verdicts_agree_away_from_the_critical_temperature(
            celsius in -70.0_f64..-10.0,
            rh in 0.0_f64..0.99,
            fuel in prop_oneof![
                Just(Fuel::Kerosene),
                Just(Fuel::Methane),
                Just(Fuel::Hydrogen),
            ],
            iterate_threshold in any::<bool>()
        ) {
            let state = AmbientState::new(
                Pressure::new::<hectopascal>(220.0),
                ThermodynamicTemperature::new::<degree_celsius>(celsius),
                Ratio::new::<ratio>(rh),
            )
            .expect("valid ambient state");
            let engine = EngineParameters::for_fuel(fuel, Ratio::new::<percent>(30.8))
                .expect("valid efficiency");
            let config = SacConfig {
                iterate_threshold,
                ..SacConfig::default()
            };

            let evaluation = evaluate(&state, &engine, &config);
            let margin = (state.temperature().get::<kelvin>()
                - evaluation.critical_temperature.get::<kelvin>())
            .abs();
            if margin > 0.05 {
                prop_assert!(evaluation.agrees(), "{evaluation:?}");
            }
        }
    }
}
