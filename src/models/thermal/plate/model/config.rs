use uom::si::{
    f64::{Length, ThermodynamicTemperature, Time},
    length::meter,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use crate::support::units::{ThermalDiffusivity, square_meters_per_second};

use super::super::core::{Geometry, Temperatures};

/// Physical setup of a plate simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateConfig {
    /// Duration of one ADI step.
    pub time_step: Time,

    /// Node spacing along `x`.
    pub dx: Length,

    /// Node spacing along `y`.
    pub dy: Length,

    pub diffusivity: ThermalDiffusivity,

    /// Node count along `x`, at least 2.
    pub x_nodes: usize,

    /// Node count along `y`, at least 2.
    pub y_nodes: usize,

    pub geometry: Geometry,

    /// Ceiling and inclined side temperature.
    pub ceiling: ThermodynamicTemperature,

    /// Floor temperature.
    pub floor: ThermodynamicTemperature,

    /// Starting temperature of the free nodes.
    pub initial: ThermodynamicTemperature,

    /// Ambient temperature inside the cavity.
    pub cavity: ThermodynamicTemperature,

    /// Probe value reported for nodes outside the plate.
    pub outside: ThermodynamicTemperature,
}

impl Default for PlateConfig {
    fn default() -> Self {
        Self {
            time_step: Time::new::<second>(0.015),
            dx: Length::new::<meter>(0.1),
            dy: Length::new::<meter>(0.1),
            diffusivity: square_meters_per_second(1.0),
            x_nodes: 50,
            y_nodes: 25,
            geometry: Geometry::default(),
            ceiling: ThermodynamicTemperature::new::<degree_celsius>(80.0),
            floor: ThermodynamicTemperature::new::<degree_celsius>(50.0),
            initial: ThermodynamicTemperature::new::<degree_celsius>(50.0),
            cavity: ThermodynamicTemperature::new::<degree_celsius>(50.0),
            outside: ThermodynamicTemperature::new::<degree_celsius>(0.0),
        }
    }
}

impl PlateConfig {
    /// Converts the boundary temperatures to the °C values the grid works in.
    pub(super) fn temperatures(&self) -> Temperatures {
        Temperatures {
            ceiling: self.ceiling.get::<degree_celsius>(),
            floor: self.floor.get::<degree_celsius>(),
            initial: self.initial.get::<degree_celsius>(),
            cavity: self.cavity.get::<degree_celsius>(),
            outside: self.outside.get::<degree_celsius>(),
        }
    }
}
