//! Dense matrix product.
//!
//! Every entry is computed as `C[i][j] = sum_k A[i][k] * B[k][j]`, starting from `0.0` and adding
//! terms with `k` ascending. That order fixes the rounding, so results are bit-for-bit reproducible
//! and match the native reference kernel.

use crate::matrix::{checked_len, Matrix};
use crate::{Error, Result};

/// Returns `a * b` in a freshly allocated matrix.
///
/// Fails with [`Error::DimensionMismatch`] when the operands differ in dimension. The 0x0 product
/// is valid and returns the 0x0 matrix.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dimension() != b.dimension() {
        return Err(Error::DimensionMismatch {
            left: a.dimension(),
            right: b.dimension(),
        });
    }
    let n = a.dimension();
    let mut c = Matrix::try_zero(n)?;
    accumulate(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    Ok(c)
}

/// Buffer form of [`multiply`]: writes `a * b` into `c`, all three row-major `n` x `n`.
///
/// Each slice must hold exactly `n * n` values. The previous content of `c` is ignored.
pub fn multiply_into(a: &[f64], b: &[f64], c: &mut [f64], n: usize) -> Result<()> {
    let expected = checked_len(n)?;
    for found in [a.len(), b.len(), c.len()] {
        if found != expected {
            return Err(Error::SizeMismatch { found, expected });
        }
    }
    accumulate(a, b, c, n);
    Ok(())
}

/// Lengths are checked by the callers.
pub(crate) fn accumulate(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    log::trace!("multiplying {}x{} matrices", n, n);
    for i in 0..n {
        let a_row = &a[i * n..(i + 1) * n];
        for j in 0..n {
            let mut sum = 0.0;
            for (k, &a_ik) in a_row.iter().enumerate() {
                sum += a_ik * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

impl Matrix {
    /// `self * rhs`, see [`multiply`].
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        multiply(self, rhs)
    }
}
