//! Fixed properties of the two species on an exhaust mixing line.

use uom::si::{
    f64::{MolarMass, Ratio, SpecificHeatCapacity},
    molar_mass::kilogram_per_mole,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

/// Marker type for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DryAir;

impl DryAir {
    /// Isobaric specific heat capacity used along the mixing line.
    #[must_use]
    pub fn cp() -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1004.0)
    }

    #[must_use]
    pub fn molar_mass() -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(28.9644e-3)
    }
}

/// Marker type for water vapor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaterVapor;

impl WaterVapor {
    #[must_use]
    pub fn molar_mass() -> MolarMass {
        MolarMass::new::<kilogram_per_mole>(18.01528e-3)
    }
}

/// Ratio of the molar masses of water vapor and dry air, `ε ≈ 0.622`.
#[must_use]
pub fn molar_mass_ratio() -> Ratio {
    WaterVapor::molar_mass() / DryAir::molar_mass()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    #[test]
    fn epsilon_matches_textbook_value() {
        assert_relative_eq!(molar_mass_ratio().get::<ratio>(), 0.622, epsilon = 1e-3);
    }
}
