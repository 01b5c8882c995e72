use crate::scalar::Scalar;

/// Default tile edge. 128 keeps one tile of each operand comfortably
/// inside L2 for f64 at typical cache sizes.
pub const DEFAULT_BLOCK_SIZE: usize = 128;

/// Cache-blocked matrix multiplication.
///
/// Iterates over cubic tiles of the three index ranges and runs the same
/// i-k-j accumulation as [`matmul_naive`] restricted to each tile, so a
/// tile of A, B and C is reused while it is still hot. Tiles at the array
/// boundary are clipped to the remaining extent; there is no padding.
///
/// Contributions to a given C element arrive tile by tile instead of in
/// one monotonic k-sweep, so results can differ from the naive kernel in
/// the last bits. Compare against it with a tolerance, not bit-equality.
///
/// [`matmul_naive`]: crate::kernels::matmul_naive::matmul_naive
///
/// # Panics
///
/// Panics if the slice sizes don't match m, n, k, or if `bs` is zero.
///
/// # Arguments
///
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `c` - Matrix C (m × n), row-major, overwritten with A * B
/// * `m` - Rows of A and C
/// * `n` - Columns of B and C
/// * `k` - Columns of A, rows of B
/// * `bs` - Tile edge, see [`DEFAULT_BLOCK_SIZE`]
pub fn matmul_blocked<T: Scalar>(
    a: &[T],
    b: &[T],
    c: &mut Vec<T>,
    m: usize,
    n: usize,
    k: usize,
    bs: usize,
) {
    assert_eq!(a.len(), m * k, "A: expected {}x{}={} elements", m, k, m * k);
    assert_eq!(b.len(), k * n, "B: expected {}x{}={} elements", k, n, k * n);
    assert!(bs > 0, "block size must be nonzero");

    c.clear();
    c.resize(m * n, T::ZERO);

    for ii in (0..m).step_by(bs) {
        let i_max = (ii + bs).min(m);

        for pp in (0..k).step_by(bs) {
            let p_max = (pp + bs).min(k);

            for jj in (0..n).step_by(bs) {
                let j_max = (jj + bs).min(n);

                for i in ii..i_max {
                    for p in pp..p_max {
                        let aip = a[i * k + p];
                        for j in jj..j_max {
                            c[i * n + j] += aip * b[p * n + j];
                        }
                    }
                }
            }
        }
    }
}
