//! Tridiagonal linear systems and the Thomas algorithm (TDMA).
//!
//! A tridiagonal system of size `N` is stored as four equal-length diagonals:
//!
//! - `a`: sub-diagonal (`a[0]` is ignored)
//! - `b`: main diagonal
//! - `c`: super-diagonal (`c[N-1]` is ignored)
//! - `d`: right-hand side
//!
//! [`Tdma`] solves such a system in `O(N)` time. Its scratch storage is kept
//! between calls so that repeated solves of lines with the same length never
//! allocate.
//!
//! # Example
//!
//! ```
//! use twine_plate::support::tridiagonal::Tdma;
//!
//! let a = [0.0, -1.0, -1.0];
//! let b = [2.0, 2.0, 2.0];
//! let c = [-1.0, -1.0, 0.0];
//! let d = [1.0, 0.0, 1.0];
//!
//! let mut solver = Tdma::new();
//! let mut x = [0.0; 3];
//! solver.solve(&a, &b, &c, &d, &mut x).unwrap();
//!
//! assert!((x[0] - 1.0).abs() < 1e-12);
//! assert!((x[1] - 1.0).abs() < 1e-12);
//! assert!((x[2] - 1.0).abs() < 1e-12);
//! ```

mod error;
mod system;

pub use error::{Diagonal, TridiagonalError};
pub use system::TridiagonalSystem;

use tracing::debug;

/// Thomas algorithm solver with reusable scratch storage.
///
/// The solver does not pivot.
/// It is stable for diagonally dominant systems; singular or ill-conditioned
/// systems are not detected and produce `Inf` or `NaN` in the solution.
#[derive(Debug, Clone, Default)]
pub struct Tdma {
    c_star: Vec<f64>,
    d_star: Vec<f64>,
}

impl Tdma {
    /// Creates a solver with empty scratch storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with scratch storage pre-sized for systems of length `len`.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        Self {
            c_star: vec![0.0; len],
            d_star: vec![0.0; len],
        }
    }

    /// Returns the system length the scratch storage is currently sized for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.c_star.len()
    }

    /// Returns `true` if the scratch storage has not been sized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.c_star.is_empty()
    }

    /// Solves the tridiagonal system `(a, b, c, d)` into `storage`.
    ///
    /// All lengths are checked against `b` before any arithmetic, so a
    /// rejected call leaves `storage` untouched. An empty system is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`TridiagonalError::DimensionMismatch`] if `a`, `c`, `d` or
    /// `storage` differ in length from `b`.
    pub fn solve(
        &mut self,
        a: &[f64],
        b: &[f64],
        c: &[f64],
        d: &[f64],
        storage: &mut [f64],
    ) -> Result<(), TridiagonalError> {
        let n = b.len();

        TridiagonalError::check(Diagonal::Sub, n, a.len())?;
        TridiagonalError::check(Diagonal::Super, n, c.len())?;
        TridiagonalError::check(Diagonal::Rhs, n, d.len())?;
        TridiagonalError::check(Diagonal::Storage, n, storage.len())?;

        if n == 0 {
            return Ok(());
        }

        if self.c_star.len() != n {
            debug!(from = self.c_star.len(), to = n, "resizing tdma scratch");
            self.c_star = vec![0.0; n];
            self.d_star = vec![0.0; n];
        }

        let c_star = &mut self.c_star;
        let d_star = &mut self.d_star;

        c_star[0] = c[0] / b[0];
        d_star[0] = d[0] / b[0];

        for i in 1..n {
            let w = 1.0 / (b[i] - a[i] * c_star[i - 1]);
            c_star[i] = c[i] * w;
            d_star[i] = (d[i] - a[i] * d_star[i - 1]) * w;
        }

        storage[n - 1] = d_star[n - 1];
        for i in (0..n - 1).rev() {
            storage[i] = d_star[i] - c_star[i] * storage[i + 1];
        }

        Ok(())
    }

    /// Solves a system held in a [`TridiagonalSystem`].
    ///
    /// # Errors
    ///
    /// Returns [`TridiagonalError::DimensionMismatch`] if `storage` differs in
    /// length from the system.
    pub fn solve_system(
        &mut self,
        system: &TridiagonalSystem,
        storage: &mut [f64],
    ) -> Result<(), TridiagonalError> {
        let (a, b, c, d) = system.diagonals();
        self.solve(a, b, c, d, storage)
    }
}
