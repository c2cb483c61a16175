//!# Densemul
//!
//!Dense square matrix multiplication over `f64`, usable from Rust and, through a C-compatible
//!entry point, from any language that can call a shared library.
//!
//!Matrices are stored row-major: entry `(i, j)` of an `n` x `n` matrix is at `i * n + j`.
//!
//!## Usage
//!
//!### As a library
//!
//!```rust
//! use densemul::{multiply, Matrix};
//!
//! let a = Matrix::from_rows(&[[1., 2.], [3., 4.]])?;
//! let b = Matrix::from_rows(&[[5., 6.], [7., 8.]])?;
//! let c = multiply(&a, &b)?;
//! assert_eq!(c, Matrix::from_rows(&[[19., 22.], [43., 50.]])?);
//! # Ok::<(), densemul::Error>(())
//!```
//!
//!### From C
//!
//!Link against the `cdylib` and include `include/densemul.h`:
//!
//!```c
//! multiply_matrices(a, b, c, n);
//!```
//!
//!### As an executable binary
//!```shell
//!densemul --size 5 --seed 42
//!```
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

mod backend;
mod error;
pub mod ffi;
pub mod kernel;
mod matrix;
#[cfg(feature = "native")]
pub mod native;
pub mod parse;

pub use crate::backend::Backend;
pub use crate::error::{Error, Result};
pub use crate::kernel::{multiply, multiply_into};
pub use crate::matrix::Matrix;

/// Relative tolerance used by `--verify`.
pub const VERIFY_TOLERANCE: f64 = 1e-9;

/// Multiplies two square matrices and prints the operands and the product.
#[derive(Parser, Debug, Clone)]
#[command(name = "densemul", version, about)]
pub struct Options {
    /// Dimension of generated matrices
    #[arg(short = 'n', long, default_value_t = 5)]
    pub size: usize,

    /// Seed for generated matrices, drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read the left operand from FILE instead of generating it
    #[arg(long, value_name = "FILE")]
    pub lhs: Option<PathBuf>,

    /// Read the right operand from FILE instead of generating it
    #[arg(long, value_name = "FILE")]
    pub rhs: Option<PathBuf>,

    /// Kernel computing the product: rust or native
    #[arg(long, default_value = "rust")]
    pub backend: Backend,

    /// Recompute the product with the Rust kernel and compare
    #[arg(long)]
    pub verify: bool,

    /// Digits printed after the decimal point
    #[arg(long, default_value_t = 8)]
    pub precision: usize,

    /// More output on stderr, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The command-line defaults.
impl Default for Options {
    fn default() -> Self {
        Self::parse_from(["densemul"])
    }
}

/// Reads or generates both operands, multiplies them with the selected backend and prints
/// `A`, `B` and `C` to `out`. Returns the product.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<Matrix> {
    let mut rng = match options.seed {
        Some(seed) => Pcg64::seed_from_u64(seed),
        None => Pcg64::from_entropy(),
    };

    let lhs = options.lhs.as_deref().map(load_operand).transpose()?;
    let rhs = options.rhs.as_deref().map(load_operand).transpose()?;
    // A generated operand follows the dimension of a loaded one.
    let dimension = lhs
        .as_ref()
        .or(rhs.as_ref())
        .map_or(options.size, Matrix::dimension);
    let a = match lhs {
        Some(m) => m,
        None => generate(dimension, &mut rng)?,
    };
    let b = match rhs {
        Some(m) => m,
        None => generate(dimension, &mut rng)?,
    };

    log::info!(
        "multiplying {}x{} by {}x{} with the {} backend",
        a.dimension(),
        a.dimension(),
        b.dimension(),
        b.dimension(),
        options.backend
    );
    let c = options.backend.multiply(&a, &b)?;

    if options.verify {
        verify(&a, &b, &c)?;
    }

    let precision = options.precision;
    writeln!(out, "Matrix A:")?;
    writeln!(out, "{:.*}", precision, a)?;
    writeln!(out, "\nMatrix B:")?;
    writeln!(out, "{:.*}", precision, b)?;
    writeln!(out, "\nMatrix C (A * B):")?;
    writeln!(out, "{:.*}", precision, c)?;
    Ok(c)
}

fn load_operand(path: &Path) -> Result<Matrix> {
    let m = parse::read_matrix(path)?;
    log::debug!("read {}x{} matrix from {}", m.dimension(), m.dimension(), path.display());
    Ok(m)
}

fn generate<R: Rng>(dimension: usize, rng: &mut R) -> Result<Matrix> {
    log::debug!("generating random {}x{} matrix", dimension, dimension);
    Matrix::try_random(dimension, rng)
}

fn verify(a: &Matrix, b: &Matrix, c: &Matrix) -> Result<()> {
    let expected = kernel::multiply(a, b)?;
    match c.first_difference(&expected, VERIFY_TOLERANCE) {
        None => {
            log::debug!("product verified against the rust kernel");
            Ok(())
        }
        Some((row, col)) => Err(Error::Verification {
            row,
            col,
            actual: c.get(row, col).unwrap_or(f64::NAN),
            expected: expected.get(row, col).unwrap_or(f64::NAN),
        }),
    }
}
