//! ADI time stepping over a plate.
//!
//! Each step is split into two implicit half-steps: every row is solved along
//! `x`, then every column is solved along `y` from the values the row sweep
//! just wrote. Within a sweep, a line only reads and writes its own nodes, so
//! the row sweep sees the state from before the step.

mod error;

pub use error::{RunError, StepError};

use tracing::trace;

use crate::support::tridiagonal::{Tdma, TridiagonalSystem};

use super::{Axis, Frame, FrameSink, Plate};

/// A plate simulation with a fixed iteration budget.
///
/// The problem owns its plate, so no other writer can touch the temperature
/// field while it is stepping. Line buffers are allocated once, sized to the
/// longer grid dimension, and reused by every sweep.
#[derive(Debug, Clone)]
pub struct Problem {
    plate: Plate,
    current_step: usize,
    n_iters: usize,
    solver_x: Tdma,
    solver_y: Tdma,
    system: TridiagonalSystem,
    solution: Vec<f64>,
}

impl Problem {
    /// Creates a problem that allows `n_iters` steps.
    #[must_use]
    pub fn new(plate: Plate, n_iters: usize) -> Self {
        let (width, height) = (plate.x_dim(), plate.y_dim());
        let len = width.max(height);
        Self {
            plate,
            current_step: 0,
            n_iters,
            solver_x: Tdma::with_len(width),
            solver_y: Tdma::with_len(height),
            system: TridiagonalSystem::new(len),
            solution: vec![0.0; len],
        }
    }

    /// Returns the number of steps taken so far.
    #[must_use]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the iteration budget.
    #[must_use]
    pub fn n_iters(&self) -> usize {
        self.n_iters
    }

    /// Returns the number of steps left in the budget.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.n_iters - self.current_step
    }

    #[must_use]
    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    /// Consumes the problem and returns its plate.
    #[must_use]
    pub fn into_plate(self) -> Plate {
        self.plate
    }

    /// Takes a snapshot of the current temperature field.
    #[must_use]
    pub fn frame(&self) -> Frame {
        self.plate.frame()
    }

    /// Advances the simulation by one timestep.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfIterations`] once the budget is exhausted.
    /// Grid and solver errors indicate an inconsistent geometry.
    pub fn step(&mut self) -> Result<(), StepError> {
        if self.current_step >= self.n_iters {
            return Err(StepError::OutOfIterations {
                n_iters: self.n_iters,
            });
        }

        trace!(step = self.current_step, "adi step");

        for y in 0..self.plate.y_dim() {
            self.sweep(Axis::X, y)?;
        }
        for x in 0..self.plate.x_dim() {
            self.sweep(Axis::Y, x)?;
        }

        self.current_step += 1;
        Ok(())
    }

    /// Sends the current frame to `sink`, then steps through the remaining
    /// budget sending one frame after every step.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Step`] if a step fails, or [`RunError::Sink`] if the
    /// sink rejects a frame.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> Result<(), RunError<S::Error>> {
        sink.record(&self.frame()).map_err(RunError::Sink)?;
        while self.remaining() > 0 {
            self.step()?;
            sink.record(&self.frame()).map_err(RunError::Sink)?;
        }
        Ok(())
    }

    /// Assembles, solves, and writes back one line along `axis`.
    fn sweep(&mut self, axis: Axis, line: usize) -> Result<(), StepError> {
        let len = match axis {
            Axis::X => self.plate.x_dim(),
            Axis::Y => self.plate.y_dim(),
        };
        let position = |i: usize| match axis {
            Axis::X => (i, line),
            Axis::Y => (line, i),
        };

        let plate = &self.plate;
        let system = &mut self.system;
        system.set_len(len);

        let [b, c] = plate.boundary_first_coefs(axis, line)?;
        let (x, y) = position(0);
        system.set_first(b, c, plate.value_for_rhs(axis, x, y)?);

        for i in 1..len - 1 {
            let (x, y) = position(i);
            system.set_row(
                i,
                plate.coefs(axis, x, y)?,
                plate.value_for_rhs(axis, x, y)?,
            );
        }

        let [a, b] = plate.boundary_last_coefs(axis, line)?;
        let (x, y) = position(len - 1);
        system.set_last(a, b, plate.value_for_rhs(axis, x, y)?);

        let solver = match axis {
            Axis::X => &mut self.solver_x,
            Axis::Y => &mut self.solver_y,
        };
        let solution = &mut self.solution[..len];
        solver.solve_system(&self.system, solution)?;

        for (i, &value) in solution.iter().enumerate() {
            let (x, y) = position(i);
            self.plate.set_value(x, y, value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::thermal::plate::core::{
        FrameRecorder,
        test_support::{plate, plate_without_cavity},
    };

    /// Checks every free node of `plate` against the boundary range.
    fn assert_bounded(plate: &Plate) {
        let temps = plate.temperatures();
        for (i, node) in plate.nodes().iter().enumerate() {
            if node.condition().is_fixed() {
                continue;
            }
            let value = node.current_value();
            assert!(
                value >= temps.floor - 1e-9 && value <= temps.ceiling + 1e-9,
                "node {i} ({:?}) left the boundary range: {value}",
                node.condition()
            );
        }
    }

    #[test]
    fn honors_iteration_budget() {
        let mut problem = Problem::new(plate(20, 10), 3);

        for _ in 0..3 {
            problem.step().unwrap();
        }
        assert_eq!(problem.current_step(), 3);
        assert_eq!(problem.remaining(), 0);
        assert_eq!(
            problem.step(),
            Err(StepError::OutOfIterations { n_iters: 3 })
        );
        assert_eq!(problem.current_step(), 3);
    }

    #[test]
    fn empty_budget_refuses_to_step() {
        let mut problem = Problem::new(plate(20, 10), 0);
        assert!(matches!(
            problem.step(),
            Err(StepError::OutOfIterations { n_iters: 0 })
        ));
    }

    #[test]
    fn stays_within_boundary_range() {
        let mut problem = Problem::new(plate(20, 10), 100);
        let mut taken = 0;
        for checkpoint in [1, 10, 100] {
            while taken < checkpoint {
                problem.step().unwrap();
                taken += 1;
            }
            assert_bounded(problem.plate());
        }
    }

    #[test]
    fn fixed_nodes_survive_stepping() {
        let initial = plate(30, 14);
        let mut problem = Problem::new(initial.clone(), 20);
        for _ in 0..20 {
            problem.step().unwrap();
        }

        for (before, after) in initial.nodes().iter().zip(problem.plate().nodes()) {
            if let Some(value) = before.fixed_value() {
                assert_eq!(after.current_value(), value);
            }
        }
    }

    #[test]
    fn heat_flows_in_from_the_ceiling() {
        let mut problem = Problem::new(plate(20, 10), 50);
        for _ in 0..50 {
            problem.step().unwrap();
        }
        let plate = problem.plate();

        let near_ceiling = plate.value(2, 1).unwrap();
        let near_floor = plate.value(2, 8).unwrap();
        assert!(near_ceiling > 60.0, "got {near_ceiling}");
        assert!(near_ceiling > near_floor);
    }

    #[test]
    fn sweeps_rows_before_columns() {
        let start = plate(16, 12);

        // Replay one step by hand through the public coefficient surface.
        let mut expected = start.clone();
        let mut tdma = Tdma::new();
        for (axis, lines, len) in [(Axis::X, 12, 16), (Axis::Y, 16, 12)] {
            for line in 0..lines {
                let position = |i: usize| match axis {
                    Axis::X => (i, line),
                    Axis::Y => (line, i),
                };
                let mut system = TridiagonalSystem::new(len);
                let [b, c] = expected.boundary_first_coefs(axis, line).unwrap();
                let (x, y) = position(0);
                system.set_first(b, c, expected.value_for_rhs(axis, x, y).unwrap());
                for i in 1..len - 1 {
                    let (x, y) = position(i);
                    system.set_row(
                        i,
                        expected.coefs(axis, x, y).unwrap(),
                        expected.value_for_rhs(axis, x, y).unwrap(),
                    );
                }
                let [a, b] = expected.boundary_last_coefs(axis, line).unwrap();
                let (x, y) = position(len - 1);
                system.set_last(a, b, expected.value_for_rhs(axis, x, y).unwrap());

                let mut solution = vec![0.0; len];
                tdma.solve_system(&system, &mut solution).unwrap();
                for (i, value) in solution.into_iter().enumerate() {
                    let (x, y) = position(i);
                    expected.set_value(x, y, value).unwrap();
                }
            }
        }

        let mut problem = Problem::new(start, 1);
        problem.step().unwrap();

        for (got, want) in problem.plate().values().zip(expected.values()) {
            assert_relative_eq!(got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn settles_to_steady_state() {
        let mut problem = Problem::new(plate_without_cavity(20, 10), 501);
        for _ in 0..500 {
            problem.step().unwrap();
        }
        let before = problem.frame();
        problem.step().unwrap();
        let after = problem.frame();

        for (a, b) in before.values().iter().zip(after.values()) {
            assert!((a - b).abs() < 1e-4, "still changing: {a} -> {b}");
        }
        assert_bounded(problem.plate());
    }

    #[test]
    fn run_records_every_step() {
        let mut problem = Problem::new(plate(20, 10), 4);
        let mut recorder = FrameRecorder::new();
        problem.run(&mut recorder).unwrap();

        let frames = recorder.into_frames();
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0], plate(20, 10).frame());
        assert_eq!(frames[4], problem.frame());
        assert_eq!(problem.remaining(), 0);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("sink full")]
    struct SinkFull;

    struct Limited(usize);

    impl FrameSink for Limited {
        type Error = SinkFull;

        fn record(&mut self, _frame: &Frame) -> Result<(), Self::Error> {
            if self.0 == 0 {
                return Err(SinkFull);
            }
            self.0 -= 1;
            Ok(())
        }
    }

    #[test]
    fn run_surfaces_sink_failures() {
        let mut problem = Problem::new(plate(20, 10), 10);
        let result = problem.run(&mut Limited(3));

        assert!(matches!(result, Err(RunError::Sink(SinkFull))));
        assert_eq!(problem.current_step(), 3);
    }
}
