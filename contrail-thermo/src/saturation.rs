//! Saturation vapor pressure over a plane surface of liquid water.
//!
//! Uses the Sonntag (1994) fit:
//!
//! ```text
//! ln(e_w / hPa) = a/T + b + c·T + d·T² + f·ln(T)
//! ```
//!
//! The fit targets roughly 150–330 K, but every function here is a plain
//! closed-form evaluation defined for any positive temperature.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::hectopascal,
    thermodynamic_temperature::kelvin,
};

use crate::units::{
    VaporPressureCurvature, VaporPressureSlope, pascal_per_kelvin, pascal_per_square_kelvin,
};

const A: f64 = -6096.9385;
const B: f64 = 16.635794;
const C: f64 = -2.711193e-2;
const D: f64 = 1.673952e-5;
const F: f64 = 2.433502;

/// Returns the saturation vapor pressure over liquid water.
#[must_use]
pub fn saturation_pressure_liquid(temperature: ThermodynamicTemperature) -> Pressure {
    Pressure::new::<hectopascal>(pressure_hpa(temperature.get::<kelvin>()))
}

/// Returns `de_w/dT`, the slope of the liquid saturation curve.
#[must_use]
pub fn saturation_pressure_liquid_slope(
    temperature: ThermodynamicTemperature,
) -> VaporPressureSlope {
    let t = temperature.get::<kelvin>();
    pascal_per_kelvin(pressure_pa(t) * log_slope(t))
}

/// Returns `d²e_w/dT²`, the curvature of the liquid saturation curve.
#[must_use]
pub fn saturation_pressure_liquid_curvature(
    temperature: ThermodynamicTemperature,
) -> VaporPressureCurvature {
    let t = temperature.get::<kelvin>();
    let g = log_slope(t);
    pascal_per_square_kelvin(pressure_pa(t) * (g * g + log_curvature(t)))
}

fn pressure_hpa(t: f64) -> f64 {
    (A / t + B + C * t + D * t * t + F * t.ln()).exp()
}

fn pressure_pa(t: f64) -> f64 {
    100.0 * pressure_hpa(t)
}

/// `d(ln e_w)/dT`
fn log_slope(t: f64) -> f64 {
    -A / (t * t) + C + 2.0 * D * t + F / t
}

/// `d²(ln e_w)/dT²`
fn log_curvature(t: f64) -> f64 {
    2.0 * A / (t * t * t) + 2.0 * D - F / (t * t)
}
