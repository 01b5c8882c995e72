use crate::scalar::Scalar;

/// Naive matrix multiplication using i-k-j loop order.
///
/// By putting the contraction index in the middle, the innermost loop
/// reads B and reads/writes C at stride 1. That alone is worth several×
/// over the textbook i-j-k order on large matrices, with no other tricks.
///
/// C is resized to m×n and zero-filled before accumulation, so the same
/// buffer can be handed back in across repeated calls.
///
/// The result is the exact IEEE accumulation in this loop order. It is
/// not guaranteed bit-identical to [`matmul_blocked`], which visits the
/// contraction index tile by tile.
///
/// [`matmul_blocked`]: crate::kernels::matmul_blocked::matmul_blocked
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
pub fn matmul_naive<T: Scalar>(a: &[T], b: &[T], c: &mut Vec<T>, m: usize, n: usize, k: usize) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);

    c.clear();
    c.resize(m * n, T::ZERO);

    for i in 0..m {
        for p in 0..k {
            let aip = a[i * k + p];
            for j in 0..n {
                c[i * n + j] += aip * b[p * n + j];
            }
        }
    }
}
