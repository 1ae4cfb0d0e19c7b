use contrail_core::constraint::{Constrained, StrictlyPositive};
use contrail_thermo::{
    air::{DryAir, molar_mass_ratio},
    units::VaporPressureSlope,
};
use uom::si::{
    f64::{AvailableEnergy, Pressure, Ratio},
    ratio::ratio,
};

use crate::{EngineParameters, SacError};

/// Computes the slope `G` of the exhaust mixing line in vapor pressure and
/// temperature space:
///
/// ```text
/// G = EI_H2O · c_p · p / (ε · Q · (1 − η))
/// ```
///
/// # Errors
///
/// Returns [`SacError::InvalidParameter`] if `pressure`, `q`, or `ei_h2o` is
/// not strictly positive, or if `efficiency` is not strictly between 0 and 1.
pub fn mixing_line_gradient(
    pressure: Pressure,
    efficiency: Ratio,
    ei_h2o: Ratio,
    q: AvailableEnergy,
) -> Result<VaporPressureSlope, SacError> {
    let pressure = StrictlyPositive::new(pressure).map_err(SacError::invalid("pressure"))?;
    let engine = EngineParameters::new(q, ei_h2o, efficiency)?;
    Ok(gradient(pressure, &engine))
}

pub(crate) fn gradient(
    pressure: Constrained<Pressure, StrictlyPositive>,
    engine: &EngineParameters,
) -> VaporPressureSlope {
    let retained = Ratio::new::<ratio>(1.0) - engine.efficiency();
    engine.ei_h2o() * DryAir::cp() * pressure.into_inner()
        / (molar_mass_ratio() * engine.lhv() * retained)
}
