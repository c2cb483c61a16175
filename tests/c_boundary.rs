use densemul::ffi::multiply_matrices;
use densemul::{multiply, multiply_into, Matrix};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_pcg::Pcg64;

#[test]
fn buffer_entry_points_agree_with_multiply() {
    let mut rng = Pcg64::seed_from_u64(21);
    for n in [1usize, 2, 5, 10] {
        let a = Matrix::random(n, &mut rng);
        let b = Matrix::random(n, &mut rng);
        let expected = multiply(&a, &b).unwrap();

        let mut via_slices = vec![0.0; n * n];
        multiply_into(a.as_slice(), b.as_slice(), &mut via_slices, n).unwrap();
        assert_eq!(via_slices, expected.as_slice());

        let mut via_c = vec![-1.0; n * n];
        unsafe {
            multiply_matrices(
                a.as_slice().as_ptr(),
                b.as_slice().as_ptr(),
                via_c.as_mut_ptr(),
                n as i32,
            );
        }
        assert_eq!(via_c, expected.as_slice());
    }
}

#[test]
fn row_major_layout() {
    // A has a single non-zero entry at (0, 1); A * A^T only has (0, 0) set.
    let a = [0., 1., 0., 0.];
    let a_t = [0., 0., 1., 0.];
    let mut c = [0.; 4];
    unsafe { multiply_matrices(a.as_ptr(), a_t.as_ptr(), c.as_mut_ptr(), 2) };
    assert_eq!(c, [1., 0., 0., 0.]);
}
