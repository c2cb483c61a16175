use std::fmt::{self, Display, Formatter};
use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::{Error, Result};

/// Dense square matrix of `f64` stored in row-major order.
///
/// Entry `(i, j)` lives at `i * dimension + j` of the backing buffer, which always holds
/// exactly `dimension * dimension` values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    dimension: usize,
}

/// Number of entries of a `dimension` x `dimension` matrix.
pub(crate) fn checked_len(dimension: usize) -> Result<usize> {
    dimension
        .checked_mul(dimension)
        .ok_or(Error::Allocation { dimension })
}

impl Matrix {
    /// # Panics
    ///
    /// Panics if `dimension * dimension` overflows or cannot be allocated. Use
    /// [`Matrix::try_zero`] to get an error instead.
    pub fn zero(dimension: usize) -> Self {
        let len = dimension
            .checked_mul(dimension)
            .expect("matrix dimension overflows usize");
        Self {
            data: vec![0.0; len],
            dimension,
        }
    }

    /// Allocates a zero matrix, failing with [`Error::Allocation`] instead of aborting.
    pub fn try_zero(dimension: usize) -> Result<Self> {
        let len = checked_len(dimension)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::Allocation { dimension })?;
        data.resize(len, 0.0);
        Ok(Self { data, dimension })
    }

    pub fn identity(dimension: usize) -> Self {
        let mut mat = Self::zero(dimension);
        for i in 0..dimension {
            mat[(i, i)] = 1.0;
        }
        mat
    }

    /// Wraps a row-major buffer.
    pub fn from_vec(data: Vec<f64>, dimension: usize) -> Result<Self> {
        let expected = checked_len(dimension)?;
        if data.len() != expected {
            return Err(Error::SizeMismatch {
                found: data.len(),
                expected,
            });
        }
        Ok(Self { data, dimension })
    }

    /// Builds a matrix from its rows. Every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let dimension = rows.len();
        let mut data = Vec::with_capacity(checked_len(dimension)?);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != dimension {
                return Err(Error::NotSquare {
                    row,
                    found: values.len(),
                    expected: dimension,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self { data, dimension })
    }

    /// Entries are drawn uniformly from `[0, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension * dimension` overflows. Use [`Matrix::try_random`] to get an error
    /// instead.
    pub fn random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Self {
        let len = dimension
            .checked_mul(dimension)
            .expect("matrix dimension overflows usize");
        let data = (0..len).map(|_| rng.gen::<f64>()).collect();
        Self { data, dimension }
    }

    /// Like [`Matrix::random`], failing with [`Error::Allocation`] instead of aborting.
    pub fn try_random<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Self> {
        let len = checked_len(dimension)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| Error::Allocation { dimension })?;
        data.extend((0..len).map(|_| rng.gen::<f64>()));
        Ok(Self { data, dimension })
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of entries, `dimension * dimension`.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.dimension && col < self.dimension {
            Some(self.data[row * self.dimension + col])
        } else {
            None
        }
    }

    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.dimension;
        &self.data[start..start + self.dimension]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // `max(1)` keeps `chunks` happy for the empty matrix, whose buffer is empty anyway.
        self.data.chunks(self.dimension.max(1))
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn transpose(&self) -> Self {
        let dimension = self.dimension;
        let mut data = Vec::with_capacity(self.data.len());
        for i in 0..dimension {
            for j in 0..dimension {
                data.push(self.data[j * dimension + i]);
            }
        }
        Self { data, dimension }
    }

    /// First entry, in row-major order, where `self` and `other` differ by more than `rel_tol`
    /// relative to the larger magnitude of the two.
    ///
    /// Returns `Some((0, 0))` for matrices of different dimension.
    pub fn first_difference(&self, other: &Matrix, rel_tol: f64) -> Option<(usize, usize)> {
        if self.dimension != other.dimension {
            return Some((0, 0));
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .position(|(&x, &y)| !close(x, y, rel_tol))
            .map(|index| (index / self.dimension, index % self.dimension))
    }

    pub fn approx_eq(&self, other: &Matrix, rel_tol: f64) -> bool {
        self.first_difference(other, rel_tol).is_none()
    }
}

/// NaN matches NaN; infinities only match themselves.
fn close(x: f64, y: f64, rel_tol: f64) -> bool {
    if x == y || (x.is_nan() && y.is_nan()) {
        return true;
    }
    x.is_finite() && y.is_finite() && (x - y).abs() <= rel_tol * x.abs().max(y.abs())
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.dimension, "column {} out of range", col);
        &self.data[row * self.dimension + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(col < self.dimension, "column {} out of range", col);
        &mut self.data[row * self.dimension + col]
    }
}

/// Prints the matrix the way numpy prints a 2-d array, e.g. `[[1.0 2.0]\n [3.0 4.0]]`.
///
/// The formatter precision selects the number of decimals (8 when unset).
impl Display for Matrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.dimension == 0 {
            return write!(f, "[]");
        }
        let precision = f.precision().unwrap_or(8);
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|v| format!("{:.*}", precision, v))
            .collect();
        let width = cells.iter().map(String::len).max().unwrap_or(0);

        write!(f, "[")?;
        for (i, row) in cells.chunks(self.dimension).enumerate() {
            if i > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
