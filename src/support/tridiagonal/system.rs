/// Owned storage for one tridiagonal system.
///
/// The buffers are allocated once and rewritten in place, so a single system
/// can be reused for every line of a sweep.
/// [`TridiagonalSystem::set_len`] changes the active length without releasing
/// capacity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TridiagonalSystem {
    a: Vec<f64>,
    b: Vec<f64>,
    c: Vec<f64>,
    d: Vec<f64>,
}

impl TridiagonalSystem {
    /// Creates a zeroed system of length `len`.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            a: vec![0.0; len],
            b: vec![0.0; len],
            c: vec![0.0; len],
            d: vec![0.0; len],
        }
    }

    /// Returns the active length of the system.
    #[must_use]
    pub fn len(&self) -> usize {
        self.b.len()
    }

    /// Returns `true` if the system has no equations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.b.is_empty()
    }

    /// Sets the active length to `len`, zeroing any newly exposed equations.
    pub fn set_len(&mut self, len: usize) {
        for diagonal in [&mut self.a, &mut self.b, &mut self.c, &mut self.d] {
            diagonal.resize(len, 0.0);
        }
    }

    /// Writes the first equation: `b·x[0] + c·x[1] = d`.
    ///
    /// # Panics
    ///
    /// Panics if the system is empty.
    pub fn set_first(&mut self, b: f64, c: f64, d: f64) {
        self.a[0] = 0.0;
        self.b[0] = b;
        self.c[0] = c;
        self.d[0] = d;
    }

    /// Writes an inner equation `i` from `[sub, main, super]` coefficients.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    pub fn set_row(&mut self, i: usize, [a, b, c]: [f64; 3], d: f64) {
        self.a[i] = a;
        self.b[i] = b;
        self.c[i] = c;
        self.d[i] = d;
    }

    /// Writes the last equation: `a·x[n-2] + b·x[n-1] = d`.
    ///
    /// # Panics
    ///
    /// Panics if the system is empty.
    pub fn set_last(&mut self, a: f64, b: f64, d: f64) {
        let last = self.len() - 1;
        self.a[last] = a;
        self.b[last] = b;
        self.c[last] = 0.0;
        self.d[last] = d;
    }

    /// Returns the `(a, b, c, d)` diagonals.
    #[must_use]
    pub fn diagonals(&self) -> (&[f64], &[f64], &[f64], &[f64]) {
        (&self.a, &self.b, &self.c, &self.d)
    }
}
