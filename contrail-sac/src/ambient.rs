use contrail_core::constraint::{Constrained, StrictlyPositive};
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::SacError;

/// Simultaneous ambient observations at one point and time.
///
/// `relative_humidity` is over liquid water and may exceed one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientState {
    pressure: Constrained<Pressure, StrictlyPositive>,
    temperature: ThermodynamicTemperature,
    relative_humidity: Ratio,
}

impl AmbientState {
    /// Bundles an ambient observation.
    ///
    /// # Errors
    ///
    /// Returns [`SacError::InvalidParameter`] if `pressure` is not strictly positive.
    pub fn new(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> Result<Self, SacError> {
        let pressure = StrictlyPositive::new(pressure).map_err(SacError::invalid("pressure"))?;
        Ok(Self {
            pressure,
            temperature,
            relative_humidity,
        })
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure.into_inner()
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn relative_humidity(&self) -> Ratio {
        self.relative_humidity
    }

    /// Returns a copy of this state at a different temperature.
    #[must_use]
    pub fn with_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    pub(crate) fn constrained_pressure(&self) -> Constrained<Pressure, StrictlyPositive> {
        self.pressure
    }
}
