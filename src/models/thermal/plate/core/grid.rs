//! The plate grid: flat row-major node storage and its accessors.

use super::{
    Cavity, Condition, Frame, GridError, Node, PlateParams,
    geometry::{Geometry, Layout, Temperatures, classify},
};

/// Heat-conducting plate discretized on a structured grid.
///
/// Nodes are stored row-major and indexed by `x + y·width`, with `y = 0` the
/// ceiling row. The condition of every node is fixed at construction; only
/// the current values of free nodes change afterward.
#[derive(Debug, Clone)]
pub struct Plate {
    pub(super) params: PlateParams,
    pub(super) temps: Temperatures,
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    cavity: Option<Cavity>,
}

impl Plate {
    /// Builds and classifies an `x_nodes × y_nodes` plate.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InsufficientNodes`] if either dimension is below 2.
    pub fn new(
        params: PlateParams,
        x_nodes: usize,
        y_nodes: usize,
        geometry: &Geometry,
        temps: &Temperatures,
    ) -> Result<Self, GridError> {
        if x_nodes < 2 || y_nodes < 2 {
            return Err(GridError::InsufficientNodes { x_nodes, y_nodes });
        }

        let Layout { nodes, cavity } = classify(x_nodes, y_nodes, geometry, temps);

        Ok(Self {
            params,
            temps: *temps,
            width: x_nodes,
            height: y_nodes,
            nodes,
            cavity,
        })
    }

    /// Returns the number of nodes along `x`.
    #[must_use]
    pub fn x_dim(&self) -> usize {
        self.width
    }

    /// Returns the number of nodes along `y`.
    #[must_use]
    pub fn y_dim(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn params(&self) -> &PlateParams {
        &self.params
    }

    #[must_use]
    pub fn temperatures(&self) -> &Temperatures {
        &self.temps
    }

    /// Returns the resolved cavity, if the grid is fine enough to carry one.
    #[must_use]
    pub fn cavity(&self) -> Option<Cavity> {
        self.cavity
    }

    /// Returns the node at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn node(&self, x: usize, y: usize) -> Result<&Node, GridError> {
        let i = self.index(x, y)?;
        Ok(&self.nodes[i])
    }

    /// Returns the condition of the node at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn condition(&self, x: usize, y: usize) -> Result<Condition, GridError> {
        self.node(x, y).map(Node::condition)
    }

    /// Returns the current value of the node at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn value(&self, x: usize, y: usize) -> Result<f64, GridError> {
        self.node(x, y).map(Node::current_value)
    }

    /// Returns the frozen value of the node at `(x, y)`, or `None` for a free node.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn fixed_value(&self, x: usize, y: usize) -> Result<Option<f64>, GridError> {
        self.node(x, y).map(Node::fixed_value)
    }

    /// Sets the current value of the node at `(x, y)`.
    ///
    /// Writes to Dirichlet and outside nodes are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfRange`] if the coordinate is outside the grid.
    pub fn set_value(&mut self, x: usize, y: usize, value: f64) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.nodes[i].set(value);
        Ok(())
    }

    /// Returns all nodes in row-major order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterates over current values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().map(Node::current_value)
    }

    /// Takes a snapshot of the current values.
    #[must_use]
    pub fn frame(&self) -> Frame {
        Frame::new(self.width, self.height, self.values().collect())
    }

    /// Returns `true` if `position` is inside the grid and holds a free node.
    pub(super) fn is_interior_at(&self, position: Option<(usize, usize)>) -> bool {
        position
            .and_then(|(x, y)| self.node(x, y).ok())
            .is_some_and(|node| node.condition().is_interior())
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x >= self.width || y >= self.height {
            return Err(GridError::IndexOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(x + y * self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use crate::models::thermal::plate::core::test_support::{params, plate, plate_without_cavity};

    fn kinds(plate: &Plate) -> Vec<Condition> {
        plate.nodes().iter().map(Node::condition).collect()
    }

    #[test]
    fn rejects_degenerate_grids() {
        let result = Plate::new(params(), 1, 5, &Geometry::default(), &Temperatures::default());
        assert_eq!(
            result.unwrap_err(),
            GridError::InsufficientNodes {
                x_nodes: 1,
                y_nodes: 5
            }
        );
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut plate = plate(20, 10);

        assert!(matches!(
            plate.value(20, 0),
            Err(GridError::IndexOutOfRange { x: 20, y: 0, .. })
        ));
        assert!(plate.condition(0, 10).is_err());
        assert!(plate.set_value(25, 25, 1.0).is_err());
        assert!(plate.coefs_x(20, 3).is_err());
        assert!(plate.value_for_rhs_y(3, 10).is_err());
    }

    #[test]
    fn default_layout_on_reference_grid() {
        let plate = plate(20, 10);

        // Ceiling up to the half line, then the inclined side.
        for x in 0..10 {
            assert_eq!(plate.condition(x, 0).unwrap(), Condition::Dirichlet);
            assert_relative_eq!(plate.value(x, 0).unwrap(), 80.0);
        }
        assert_eq!(plate.condition(10, 0).unwrap(), Condition::Dirichlet);
        assert_eq!(plate.condition(11, 0).unwrap(), Condition::Outside);

        // Floor.
        for x in 0..20 {
            assert_eq!(plate.condition(x, 9).unwrap(), Condition::Dirichlet);
            assert_relative_eq!(plate.value(x, 9).unwrap(), 50.0);
        }

        // Insulated left edge.
        for y in 1..9 {
            assert_eq!(plate.condition(0, y).unwrap(), Condition::NeumannX);
        }

        // Cut runs one column per row on this grid.
        assert_eq!(plate.condition(14, 4).unwrap(), Condition::Dirichlet);
        assert_eq!(plate.condition(15, 4).unwrap(), Condition::Outside);
        assert_eq!(plate.condition(13, 4).unwrap(), Condition::Interior);

        let cavity = plate.cavity().unwrap();
        assert_eq!(
            cavity,
            Cavity {
                left: 4,
                right: 10,
                top: 3,
                bottom: 7
            }
        );
        assert_eq!(plate.condition(4, 3).unwrap(), Condition::RobinXY);
        assert_eq!(plate.condition(10, 7).unwrap(), Condition::RobinXY);
        assert_eq!(plate.condition(4, 5).unwrap(), Condition::RobinX);
        assert_eq!(plate.condition(10, 5).unwrap(), Condition::RobinX);
        assert_eq!(plate.condition(7, 3).unwrap(), Condition::RobinY);
        assert_eq!(plate.condition(7, 7).unwrap(), Condition::RobinY);
        assert_eq!(plate.condition(7, 5).unwrap(), Condition::Outside);
        assert_relative_eq!(plate.value(7, 5).unwrap(), 0.0);
    }

    #[test]
    fn plate_without_cavity_has_no_robin_nodes() {
        let plate = plate_without_cavity(20, 10);
        assert!(plate.cavity().is_none());
        assert!(kinds(&plate).iter().all(|kind| !matches!(
            kind,
            Condition::RobinX | Condition::RobinY | Condition::RobinXY
        )));
    }

    #[test]
    fn coarse_grid_drops_cavity() {
        let plate = plate(6, 6);
        assert!(plate.cavity().is_none());
        assert_eq!(plate.nodes().len(), 36);
    }

    #[test]
    fn fixed_nodes_ignore_writes() {
        let mut plate = plate(20, 10);
        let fixed: Vec<(usize, usize, f64)> = (0..10)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter_map(|(x, y)| {
                let node = plate.node(x, y).unwrap();
                node.fixed_value().map(|value| (x, y, value))
            })
            .collect();
        assert!(!fixed.is_empty());

        for round in 0..5 {
            for &(x, y, _) in &fixed {
                plate.set_value(x, y, -1.0e6 * f64::from(round)).unwrap();
            }
        }

        for (x, y, value) in fixed {
            assert_eq!(plate.value(x, y).unwrap(), value);
        }
    }

    #[test]
    fn free_nodes_accept_writes() {
        let mut plate = plate(20, 10);
        plate.set_value(7, 5, 123.0).unwrap();
        plate.set_value(2, 2, 123.0).unwrap();
        assert_relative_eq!(plate.value(7, 5).unwrap(), 0.0);
        assert_relative_eq!(plate.value(2, 2).unwrap(), 123.0);
        assert_eq!(plate.fixed_value(2, 2).unwrap(), None);
        assert_eq!(plate.fixed_value(7, 5).unwrap(), Some(0.0));
    }

    #[test]
    fn frame_is_row_major() {
        let mut plate = plate(20, 10);
        plate.set_value(3, 2, 61.0).unwrap();
        let frame = plate.frame();

        assert_eq!(frame.width(), 20);
        assert_eq!(frame.height(), 10);
        assert_eq!(frame.values()[3 + 2 * 20], 61.0);
        assert_eq!(frame.get(3, 2), Some(61.0));
        assert_eq!(frame.rows().count(), 10);
    }

    proptest! {
        #[test]
        fn classification_is_deterministic(width in 6usize..80, height in 6usize..60) {
            let first = plate(width, height);
            let second = plate(width, height);
            prop_assert_eq!(kinds(&first), kinds(&second));
            prop_assert_eq!(first.nodes().len(), width * height);
        }

        #[test]
        fn free_nodes_have_free_neighbors(width in 6usize..80, height in 6usize..60) {
            let plate = plate(width, height);

            for y in 0..height {
                for x in 0..width {
                    let kind = plate.condition(x, y).unwrap();
                    if kind.is_interior() {
                        prop_assert!(x > 0 && y > 0 && x + 1 < width && y + 1 < height);
                        for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                            prop_assert_ne!(plate.condition(nx, ny).unwrap(), Condition::Outside);
                        }
                    }
                    // Every node yields coefficients along both axes.
                    if x > 0 && x + 1 < width {
                        prop_assert!(plate.coefs_x(x, y).is_ok(), "x coefs at ({}, {})", x, y);
                    }
                    if y > 0 && y + 1 < height {
                        prop_assert!(plate.coefs_y(x, y).is_ok(), "y coefs at ({}, {})", x, y);
                    }
                }
            }
        }
    }
}
