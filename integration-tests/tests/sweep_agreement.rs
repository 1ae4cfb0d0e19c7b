//! Both decision paths across the kerosene critical temperature.
//!
//! The sweep crosses `T_LC ≈ −50.6 °C` in 0.02 K steps, so it hits the region
//! where an unrefined `T_LC` and the humidity test can disagree.

use contrail_sac::{Evaluation, Evaluator, Fuel, SacConfig};
use integration_tests::{
    init_tracing,
    reference::{cruise, engine},
};
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

const START: f64 = -52.0;
const STEP: f64 = 0.02;
const POINTS: usize = 151;

fn sweep(config: SacConfig) -> Vec<Evaluation> {
    let evaluator = Evaluator::new(config);
    let kerosene = engine(Fuel::Kerosene).unwrap();
    let base = cruise(ThermodynamicTemperature::new::<degree_celsius>(START)).unwrap();

    (0..POINTS)
        .map(|i| {
            let celsius = START + STEP * i as f64;
            let ambient =
                base.with_temperature(ThermodynamicTemperature::new::<degree_celsius>(celsius));
            evaluator.evaluate(&ambient, &kerosene)
        })
        .collect()
}

fn agreement(evaluations: &[Evaluation]) -> f64 {
    let agreeing = evaluations.iter().filter(|e| e.agrees()).count();
    agreeing as f64 / evaluations.len() as f64
}

#[test]
fn verdicts_agree_with_both_refinements() {
    init_tracing();
    let evaluations = sweep(SacConfig::default());

    assert_eq!(evaluations.len(), POINTS);
    assert!(agreement(&evaluations) >= 0.95);
}

#[test]
fn verdicts_agree_with_estimated_threshold() {
    init_tracing();
    let evaluations = sweep(SacConfig {
        iterate_threshold: false,
        ..SacConfig::default()
    });

    assert!(agreement(&evaluations) >= 0.95);
}

#[test]
fn sweep_crosses_the_critical_temperature() {
    let evaluations = sweep(SacConfig::default());

    assert!(evaluations.first().is_some_and(|e| e.forms_by_temperature));
    assert!(evaluations.last().is_some_and(|e| !e.forms_by_temperature));
}

#[test]
fn refining_critical_temperature_never_hurts_agreement() {
    init_tracing();
    let refined = sweep(SacConfig::default());
    let estimated = sweep(SacConfig {
        iterate_critical: false,
        ..SacConfig::default()
    });

    assert!(agreement(&refined) >= agreement(&estimated));
    assert!(estimated.iter().any(|e| !e.agrees()));
}
