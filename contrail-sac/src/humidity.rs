use contrail_solve::equation::newton::Config;
use contrail_thermo::{
    saturation::saturation_pressure_liquid,
    units::{TemperatureOps, VaporPressureSlope},
};
use uom::si::{
    f64::{AvailableEnergy, Pressure, Ratio, ThermodynamicTemperature},
    ratio::ratio,
};

use crate::{SacError, mixing_line::mixing_line_gradient, threshold::threshold_temperature};

/// Computes the critical relative humidity `U_LC` over liquid water.
///
/// This is the smallest ambient humidity at which a contrail forms at the
/// given temperature. At or below `T_LM` it follows from the tangency
/// condition:
///
/// ```text
/// U_LC = (G·(T − T_LM) + e_w(T_LM)) / e_w(T)
/// ```
///
/// Above `T_LM` the saturation curve is steeper than the mixing line at every
/// temperature the plume passes through, so only saturated air forms a
/// contrail and the result is one.
///
/// `T_LM` comes from the closed-form estimate when `approximate_tlm` is set,
/// and is refined with the default Newton policy otherwise.
///
/// # Errors
///
/// Returns [`SacError::InvalidParameter`] under the same conditions as
/// [`mixing_line_gradient`].
pub fn critical_relative_humidity_liquid(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
    efficiency: Ratio,
    ei_h2o: Ratio,
    q: AvailableEnergy,
    approximate_tlm: bool,
) -> Result<Ratio, SacError> {
    let gradient = mixing_line_gradient(pressure, efficiency, ei_h2o, q)?;
    let threshold = threshold_temperature(gradient, !approximate_tlm, &Config::default());
    Ok(critical_relative_humidity(gradient, threshold, temperature))
}

pub(crate) fn critical_relative_humidity(
    gradient: VaporPressureSlope,
    threshold: ThermodynamicTemperature,
    temperature: ThermodynamicTemperature,
) -> Ratio {
    if temperature > threshold {
        return Ratio::new::<ratio>(1.0);
    }
    let vapor = gradient * temperature.minus(threshold) + saturation_pressure_liquid(threshold);
    vapor / saturation_pressure_liquid(temperature)
}
