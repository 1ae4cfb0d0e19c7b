//! Reference cruise conditions from Schumann (1996), table 2.

use contrail_sac::{AmbientState, EngineParameters, Fuel, SacError};
use uom::si::{
    f64::{Pressure, Ratio, ThermodynamicTemperature},
    pressure::hectopascal,
    ratio::percent,
};

/// Published results for one fuel at the reference cruise condition.
#[derive(Debug, Clone, Copy)]
pub struct Expected {
    pub fuel: Fuel,
    /// Mixing-line gradient in Pa/K.
    pub gradient: f64,
    /// Threshold temperature in °C.
    pub threshold_temperature: f64,
    /// Critical temperature in °C.
    pub critical_temperature: f64,
}

pub const EXPECTED: [Expected; 3] = [
    Expected {
        fuel: Fuel::Kerosene,
        gradient: 1.49,
        threshold_temperature: -42.9,
        critical_temperature: -50.6,
    },
    Expected {
        fuel: Fuel::Methane,
        gradient: 2.31,
        threshold_temperature: -38.3,
        critical_temperature: -46.3,
    },
    Expected {
        fuel: Fuel::Hydrogen,
        gradient: 3.82,
        threshold_temperature: -32.7,
        critical_temperature: -41.2,
    },
];

/// Overall propulsion efficiency used throughout the table.
#[must_use]
pub fn efficiency() -> Ratio {
    Ratio::new::<percent>(30.8)
}

/// 220 hPa, 42 % relative humidity, at the given temperature.
///
/// # Errors
///
/// Propagates [`AmbientState::new`] errors.
pub fn cruise(temperature: ThermodynamicTemperature) -> Result<AmbientState, SacError> {
    AmbientState::new(
        Pressure::new::<hectopascal>(220.0),
        temperature,
        Ratio::new::<percent>(42.0),
    )
}

/// Engine parameters for `fuel` at the reference efficiency.
///
/// # Errors
///
/// Propagates [`EngineParameters::for_fuel`] errors.
pub fn engine(fuel: Fuel) -> Result<EngineParameters, SacError> {
    EngineParameters::for_fuel(fuel, efficiency())
}
