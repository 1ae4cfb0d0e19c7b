use contrail_core::constraint::{Constrained, StrictlyPositive, UnitIntervalOpen};
use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Ratio},
    ratio::ratio,
};

use crate::SacError;

/// Fuels tabulated by Schumann (1996).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuel {
    Kerosene,
    Methane,
    Hydrogen,
}

impl Fuel {
    /// Lower heating value.
    #[must_use]
    pub fn lhv(self) -> AvailableEnergy {
        let mj_per_kg = match self {
            Fuel::Kerosene => 43.0,
            Fuel::Methane => 50.0,
            Fuel::Hydrogen => 120.0,
        };
        AvailableEnergy::new::<joule_per_kilogram>(mj_per_kg * 1.0e6)
    }

    /// Water vapor emission index, kg of water per kg of fuel.
    #[must_use]
    pub fn ei_h2o(self) -> Ratio {
        Ratio::new::<ratio>(match self {
            Fuel::Kerosene => 1.25,
            Fuel::Methane => 2.24,
            Fuel::Hydrogen => 8.94,
        })
    }
}

/// Fuel and propulsion parameters that set the mixing-line gradient.
///
/// Every field is validated on construction, so a value of this type always
/// yields a finite, positive gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineParameters {
    lhv: Constrained<AvailableEnergy, StrictlyPositive>,
    ei_h2o: Constrained<Ratio, StrictlyPositive>,
    efficiency: Constrained<Ratio, UnitIntervalOpen>,
}

impl EngineParameters {
    /// Validates and bundles engine parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SacError::InvalidParameter`] if `lhv` or `ei_h2o` is not
    /// strictly positive, or if `efficiency` is not strictly between 0 and 1.
    pub fn new(lhv: AvailableEnergy, ei_h2o: Ratio, efficiency: Ratio) -> Result<Self, SacError> {
        Ok(Self::from_constrained(
            StrictlyPositive::new(lhv).map_err(SacError::invalid("lhv"))?,
            StrictlyPositive::new(ei_h2o).map_err(SacError::invalid("ei_h2o"))?,
            UnitIntervalOpen::new(efficiency).map_err(SacError::invalid("efficiency"))?,
        ))
    }

    /// Bundles parameters that were validated elsewhere.
    #[must_use]
    pub fn from_constrained(
        lhv: Constrained<AvailableEnergy, StrictlyPositive>,
        ei_h2o: Constrained<Ratio, StrictlyPositive>,
        efficiency: Constrained<Ratio, UnitIntervalOpen>,
    ) -> Self {
        Self {
            lhv,
            ei_h2o,
            efficiency,
        }
    }

    /// Uses the tabulated heating value and emission index of `fuel`.
    ///
    /// # Errors
    ///
    /// Returns [`SacError::InvalidParameter`] if `efficiency` is not strictly
    /// between 0 and 1.
    pub fn for_fuel(fuel: Fuel, efficiency: Ratio) -> Result<Self, SacError> {
        Self::new(fuel.lhv(), fuel.ei_h2o(), efficiency)
    }

    #[must_use]
    pub fn lhv(&self) -> AvailableEnergy {
        self.lhv.into_inner()
    }

    #[must_use]
    pub fn ei_h2o(&self) -> Ratio {
        self.ei_h2o.into_inner()
    }

    /// Overall propulsion efficiency.
    #[must_use]
    pub fn efficiency(&self) -> Ratio {
        self.efficiency.into_inner()
    }
}
