//! Schmidt-Appleman Criterion for contrail formation behind aircraft.
//!
//! An exhaust plume mixes with ambient air along a straight line in vapor
//! pressure and temperature space. A contrail forms when that line reaches
//! liquid-water saturation. Two equivalent tests are provided:
//!
//! - temperature: the ambient temperature is at or below the critical
//!   temperature `T_LC` for the ambient humidity,
//! - humidity: the ambient humidity is at or above the critical relative
//!   humidity `U_LC` for the ambient temperature.
//!
//! [`Evaluator`] runs both and reports whether they agree.

mod ambient;
mod critical;
mod curve;
mod engine;
mod error;
mod evaluator;
mod humidity;
mod mixing_line;
mod threshold;

pub use ambient::AmbientState;
pub use critical::{estimate_critical_temperature, newton_iter_tlc, refine_critical_temperature};
pub use engine::{EngineParameters, Fuel};
pub use error::SacError;
pub use evaluator::{Evaluation, Evaluator, SacConfig, evaluate};
pub use humidity::critical_relative_humidity_liquid;
pub use mixing_line::mixing_line_gradient;
pub use threshold::{
    estimate_liquid_threshold_temperature, newton_iter_tlm, refine_threshold_temperature,
};
