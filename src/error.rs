use thiserror::Error;

use crate::backend::Backend;

#[derive(Debug, Error)]
pub enum Error {
    /// The operands of a product are square matrices of different dimension.
    #[error("dimension mismatch: left operand is {left}x{left}, right operand is {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A flat buffer does not hold exactly `expected` values.
    #[error("expected {expected} values, found {found}")]
    SizeMismatch { found: usize, expected: usize },

    /// Row `row` has `found` entries where a square matrix needs `expected`.
    #[error("matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("cannot allocate a {dimension}x{dimension} matrix")]
    Allocation { dimension: usize },

    #[error("dimension {dimension} does not fit in a C int")]
    NativeDimension { dimension: usize },

    #[error("backend `{0}` is not available in this build")]
    BackendUnavailable(Backend),

    #[error("invalid entry {token:?} in row {row}")]
    Parse { row: usize, token: String },

    /// Two backends disagree on entry (`row`, `col`).
    #[error("verification failed at ({row}, {col}): {actual} != {expected}")]
    Verification {
        row: usize,
        col: usize,
        actual: f64,
        expected: f64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
