use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Pressure, TemperatureInterval, ThermodynamicTemperature},
        pressure::pascal,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin as abs_kelvin,
    },
    typenum::{N1, N2, P1, Z0},
};

/// Change in vapor pressure per unit temperature, Pa/K in SI.
///
/// The slope of a saturation curve and the gradient of an exhaust mixing line
/// both carry this dimension.
pub type VaporPressureSlope = Quantity<ISQ<N1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Second temperature derivative of vapor pressure, Pa/K² in SI.
pub type VaporPressureCurvature = Quantity<ISQ<N1, P1, N2, Z0, N2, Z0, Z0>, SI<f64>, f64>;

/// Constructs a [`VaporPressureSlope`] from a value in Pa/K.
#[must_use]
pub fn pascal_per_kelvin(value: f64) -> VaporPressureSlope {
    Pressure::new::<pascal>(value) / TemperatureInterval::new::<delta_kelvin>(1.0)
}

/// Constructs a [`VaporPressureCurvature`] from a value in Pa/K².
#[must_use]
pub fn pascal_per_square_kelvin(value: f64) -> VaporPressureCurvature {
    pascal_per_kelvin(value) / TemperatureInterval::new::<delta_kelvin>(1.0)
}

/// Extension method for `ThermodynamicTemperature` to compute a temperature difference.
pub trait TemperatureOps {
    /// Computes the difference `self - other` as a `TemperatureInterval`.
    ///
    /// Inputs may use any supported temperature units, with values internally
    /// converted to kelvin for calculation.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureOps for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Pressure,
        pressure::hectopascal,
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, kelvin},
    };

    #[test]
    fn slope_constructor_is_pascal_per_kelvin() {
        let slope = pascal_per_kelvin(1.49);
        assert_relative_eq!(slope.value, 1.49);

        // Multiplying back by a temperature interval yields a pressure.
        let dp: Pressure = slope * TemperatureInterval::new::<delta_kelvin>(100.0);
        assert_relative_eq!(dp.get::<hectopascal>(), 1.49);
    }

    #[test]
    fn curvature_constructor_is_pascal_per_square_kelvin() {
        let curvature = pascal_per_square_kelvin(0.2);
        let slope: VaporPressureSlope = curvature * TemperatureInterval::new::<delta_kelvin>(5.0);
        assert_relative_eq!(slope.value, 1.0);
    }

    #[test]
    fn subtract_temperatures() {
        let t1 = ThermodynamicTemperature::new::<kelvin>(230.0);
        let t2 = ThermodynamicTemperature::new::<degree_celsius>(-59.0);

        assert_relative_eq!(t2.minus(t1).get::<delta_kelvin>(), -15.85, epsilon = 1e-10);
        assert_relative_eq!(t1.minus(t2).get::<delta_celsius>(), 15.85, epsilon = 1e-10);
    }
}
