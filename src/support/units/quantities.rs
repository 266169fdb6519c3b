use uom::{
    si::{ISQ, Quantity, SI, area::square_meter, f64::Area, f64::Time, time::second},
    typenum::{N1, P2, Z0},
};

/// Thermal diffusivity, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Constructs a [`ThermalDiffusivity`] from a value in m²/s.
#[must_use]
pub fn square_meters_per_second(value: f64) -> ThermalDiffusivity {
    Area::new::<square_meter>(value) / Time::new::<second>(1.0)
}
