use std::fmt;

use thiserror::Error;

/// Identifies one of the arrays passed to a tridiagonal solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagonal {
    Sub,
    Super,
    Rhs,
    Storage,
}

impl fmt::Display for Diagonal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sub => "sub-diagonal",
            Self::Super => "super-diagonal",
            Self::Rhs => "right-hand side",
            Self::Storage => "solution storage",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while solving a tridiagonal system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TridiagonalError {
    /// An array does not match the length of the main diagonal.
    #[error("dimension mismatch for {diagonal}: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The offending array.
        diagonal: Diagonal,

        /// Length of the main diagonal.
        expected: usize,

        /// Length of the offending array.
        actual: usize,
    },
}

impl TridiagonalError {
    /// Returns a mismatch error unless `actual == expected`.
    pub(super) fn check(diagonal: Diagonal, expected: usize, actual: usize) -> Result<(), Self> {
        if actual == expected {
            Ok(())
        } else {
            Err(Self::DimensionMismatch {
                diagonal,
                expected,
                actual,
            })
        }
    }
}
