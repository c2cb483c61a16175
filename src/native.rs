//! Native reference kernel compiled from `csrc/matrix_multiply.c` by the build script.

use std::os::raw::c_int;

use crate::{Error, Matrix, Result};

#[allow(non_upper_case_globals)]
#[allow(non_camel_case_types)]
#[allow(non_snake_case)]
#[allow(dead_code)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

/// `a * b` computed by the C kernel. Same contract as [`crate::multiply`].
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dimension() != b.dimension() {
        return Err(Error::DimensionMismatch {
            left: a.dimension(),
            right: b.dimension(),
        });
    }
    let dimension = a.dimension();
    let n = c_int::try_from(dimension).map_err(|_| Error::NativeDimension { dimension })?;
    let mut c = Matrix::try_zero(dimension)?;
    if dimension == 0 {
        return Ok(c);
    }
    log::trace!("calling native kernel with n = {}", n);
    // SAFETY: all three buffers hold `n * n` doubles and `c` is a fresh allocation.
    unsafe {
        bindings::native_multiply_matrices(
            a.as_slice().as_ptr(),
            b.as_slice().as_ptr(),
            c.as_mut_slice().as_mut_ptr(),
            n,
        );
    }
    Ok(c)
}
