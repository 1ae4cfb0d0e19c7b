//! Moist-air thermodynamic properties for contrail formation modeling.

pub mod air;
pub mod saturation;
pub mod units;
