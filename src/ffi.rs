//! C entry point, declared in `include/densemul.h`.

use std::os::raw::{c_double, c_int};
use std::slice;

use crate::kernel::accumulate;

/// Writes the row-major product `a * b` of two `n` x `n` matrices into `c`.
///
/// Does nothing when `n <= 0` or any pointer is null.
///
/// # Safety
///
/// `a`, `b` and `c` must each point to `n * n` initialized, properly aligned doubles, and `c`
/// must not overlap `a` or `b`.
#[no_mangle]
pub unsafe extern "C" fn multiply_matrices(
    a: *const c_double,
    b: *const c_double,
    c: *mut c_double,
    n: c_int,
) {
    if n <= 0 || a.is_null() || b.is_null() || c.is_null() {
        return;
    }
    let n = n as usize;
    let len = match n.checked_mul(n) {
        Some(len) => len,
        None => return,
    };

    let a = slice::from_raw_parts(a, len);
    let b = slice::from_raw_parts(b, len);
    let c = slice::from_raw_parts_mut(c, len);
    accumulate(a, b, c, n);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::ptr;

    #[test]
    fn writes_into_caller_buffer() {
        let a = [1., 2., 3., 4.];
        let b = [5., 6., 7., 8.];
        let mut c = [0.; 4];
        unsafe { multiply_matrices(a.as_ptr(), b.as_ptr(), c.as_mut_ptr(), 2) };
        assert_eq!(c, [19., 22., 43., 50.]);
    }

    #[test]
    fn agrees_with_multiply() {
        let mut rng = Pcg64::seed_from_u64(3);
        let a = Matrix::random(9, &mut rng);
        let b = Matrix::random(9, &mut rng);
        let mut c = Matrix::zero(9);
        unsafe {
            multiply_matrices(
                a.as_slice().as_ptr(),
                b.as_slice().as_ptr(),
                c.as_mut_slice().as_mut_ptr(),
                9,
            )
        };
        assert_eq!(c, a.multiply(&b).unwrap());
    }

    #[test]
    fn ignores_degenerate_calls() {
        let a = [1.];
        let mut c = [42.];
        unsafe {
            multiply_matrices(a.as_ptr(), a.as_ptr(), c.as_mut_ptr(), 0);
            multiply_matrices(a.as_ptr(), a.as_ptr(), c.as_mut_ptr(), -1);
            multiply_matrices(ptr::null(), a.as_ptr(), c.as_mut_ptr(), 1);
            multiply_matrices(a.as_ptr(), a.as_ptr(), ptr::null_mut(), 1);
        }
        assert_eq!(c, [42.]);
    }
}
