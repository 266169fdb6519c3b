use super::{Geometry, Plate, PlateParams, Temperatures};

/// Parameters of the reference run: 15 s over 1000 steps on a 0.1 m grid.
pub(super) fn params() -> PlateParams {
    PlateParams::new(0.015, 0.1, 0.1, 1.0).unwrap()
}

/// Plate with the default geometry and temperatures.
pub(super) fn plate(width: usize, height: usize) -> Plate {
    Plate::new(
        params(),
        width,
        height,
        &Geometry::default(),
        &Temperatures::default(),
    )
    .unwrap()
}

pub(super) fn plate_without_cavity(width: usize, height: usize) -> Plate {
    let geometry = Geometry {
        cavity: None,
        ..Geometry::default()
    };
    Plate::new(params(), width, height, &geometry, &Temperatures::default()).unwrap()
}
