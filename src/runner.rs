//! Benchmark orchestration.
//!
//! For one requested operation and precision this module generates the
//! inputs, runs one discarded warm-up call, times `reps` trials, reduces
//! them to the median, and derives throughput, bandwidth and a checksum.
//! The result is a single immutable [`BenchRecord`].

use std::hint::black_box;
use std::mem::size_of;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::debug;

use crate::kernels::matmul_blocked::matmul_blocked;
use crate::kernels::matmul_naive::matmul_naive;
use crate::kernels::reduction::kahan_sum;
use crate::kernels::scan::inclusive_scan_inplace;
use crate::rng::make_random;
use crate::scalar::Scalar;
use crate::timer::Stopwatch;

/// Which kernel a run measures.
///
/// Matmul rows populate M/N/K in the result record; reduction and scan
/// rows populate the single size field instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    MatmulNaive,
    MatmulBlocked,
    Reduction,
    Scan,
}

impl Op {
    /// Label written to the `op` column of result records.
    pub fn label(self) -> &'static str {
        match self {
            Op::MatmulNaive => "matmul_naive",
            Op::MatmulBlocked => "matmul_blocked",
            Op::Reduction => "reduction",
            Op::Scan => "scan",
        }
    }
}

/// Everything one benchmark invocation needs to know.
#[derive(Debug, Clone)]
pub struct BenchParams {
    pub op: Op,
    /// Rows of A and C (matmul only).
    pub m: usize,
    /// Columns of B and C (matmul only).
    pub n: usize,
    /// Contraction length (matmul only).
    pub k: usize,
    /// Vector length (reduction and scan only).
    pub size: usize,
    /// Timed repetitions; the median is reported. Must be at least 1.
    pub reps: usize,
    /// Seed for input generation. Matmul's B operand uses seed+1.
    pub seed: u32,
    /// Tile edge for the blocked matmul variant.
    pub block_size: usize,
}

/// The reduced output of one full benchmark run.
#[derive(Debug, Clone)]
pub struct BenchRecord {
    pub timestamp: u64,
    pub op: &'static str,
    pub m: usize,
    pub n: usize,
    pub k: usize,
    pub size: usize,
    pub dtype: &'static str,
    pub reps: usize,
    pub ns_per_rep: f64,
    pub gflops: f64,
    pub gbps: f64,
    pub checksum: f64,
}

impl BenchRecord {
    /// Field names, in row order.
    pub const CSV_HEADER: &'static str =
        "timestamp,op,M,N,K,size,dtype,reps,ns_per_rep,gflops,gbps,checksum";

    /// One CSV row matching [`BenchRecord::CSV_HEADER`].
    ///
    /// The checksum uses Rust's shortest round-trip float formatting so
    /// the printed digits reproduce the exact value.
    pub fn csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{:.0},{:.6},{:.6},{}",
            self.timestamp,
            self.op,
            self.m,
            self.n,
            self.k,
            self.size,
            self.dtype,
            self.reps,
            self.ns_per_rep,
            self.gflops,
            self.gbps,
            self.checksum
        )
    }

    /// Human-readable one-liner for the console.
    pub fn status_line(&self) -> String {
        format!(
            "[{}] median {:.3} ms, {:.2} GF/s, {:.2} GB/s, checksum={}",
            self.op,
            self.ns_per_rep / 1e6,
            self.gflops,
            self.gbps,
            self.checksum
        )
    }
}

/// Runs one benchmark to completion and returns its record.
///
/// Performs no I/O; emitting the record is the caller's job.
///
/// # Panics
///
/// Panics if `params.reps` is zero.
pub fn run<T: Scalar>(params: &BenchParams) -> BenchRecord {
    assert!(params.reps >= 1, "reps must be at least 1");

    match params.op {
        Op::MatmulNaive | Op::MatmulBlocked => run_matmul::<T>(params),
        Op::Reduction => run_reduction::<T>(params),
        Op::Scan => run_scan::<T>(params),
    }
}

fn run_matmul<T: Scalar>(p: &BenchParams) -> BenchRecord {
    let (m, n, k) = (p.m, p.n, p.k);
    let blocked = p.op == Op::MatmulBlocked;

    let a = make_random::<T>(m * k, p.seed);
    let b = make_random::<T>(k * n, p.seed.wrapping_add(1));
    let mut c: Vec<T> = Vec::new();

    // Untimed warm-up; the result must stay observably used.
    matmul_once(blocked, &a, &b, &mut c, m, n, k, p.block_size);
    black_box(&c);

    // The kernel re-zeroes C itself, so the one buffer is reused.
    let mut times = Vec::with_capacity(p.reps);
    for rep in 0..p.reps {
        let sw = Stopwatch::start();
        matmul_once(blocked, &a, &b, &mut c, m, n, k, p.block_size);
        let t = sw.elapsed_s();
        debug!(rep, seconds = t, "matmul trial");
        times.push(t);
    }
    let t_med = median(&mut times);

    let flops = 2.0 * m as f64 * n as f64 * k as f64;
    // Read both operands once, read-modify-write the output once.
    let bytes = size_of::<T>() as f64 * (m * k + k * n + 2 * m * n) as f64;

    BenchRecord {
        timestamp: unix_now(),
        op: p.op.label(),
        m,
        n,
        k,
        size: 0,
        dtype: T::LABEL,
        reps: p.reps,
        ns_per_rep: t_med * 1e9,
        gflops: giga_rate(flops, t_med),
        gbps: giga_rate(bytes, t_med),
        checksum: checksum(&c),
    }
}

fn run_reduction<T: Scalar>(p: &BenchParams) -> BenchRecord {
    let x = make_random::<T>(p.size, p.seed);

    // Untimed warm-up through the same sink as the timed trials.
    let mut sink = black_box(kahan_sum(&x));

    let mut times = Vec::with_capacity(p.reps);
    for rep in 0..p.reps {
        let sw = Stopwatch::start();
        sink = black_box(kahan_sum(&x));
        let t = sw.elapsed_s();
        debug!(rep, seconds = t, "reduction trial");
        times.push(t);
    }
    let t_med = median(&mut times);

    // size-1 additions; clamped so a degenerate run reports zero, not -1.
    let flops = (p.size as f64 - 1.0).max(0.0);
    let bytes = size_of::<T>() as f64 * p.size as f64;

    BenchRecord {
        timestamp: unix_now(),
        op: p.op.label(),
        m: 0,
        n: 0,
        k: 0,
        size: p.size,
        dtype: T::LABEL,
        reps: p.reps,
        ns_per_rep: t_med * 1e9,
        gflops: giga_rate(flops, t_med),
        gbps: giga_rate(bytes, t_med),
        checksum: sink.to_f64(),
    }
}

fn run_scan<T: Scalar>(p: &BenchParams) -> BenchRecord {
    let x = make_random::<T>(p.size, p.seed);

    // Scan mutates its argument: the canonical input stays pristine and
    // every call, warm-up included, gets a fresh clone taken outside the
    // timed region.
    let mut out = x.clone();
    inclusive_scan_inplace(&mut out);
    black_box(&out);

    let mut times = Vec::with_capacity(p.reps);
    for rep in 0..p.reps {
        let mut tmp = x.clone();
        let sw = Stopwatch::start();
        inclusive_scan_inplace(&mut tmp);
        let t = sw.elapsed_s();
        debug!(rep, seconds = t, "scan trial");
        times.push(t);
        out = tmp;
    }
    let t_med = median(&mut times);

    let flops = p.size as f64;
    // One read plus one write per element.
    let bytes = size_of::<T>() as f64 * 2.0 * p.size as f64;

    BenchRecord {
        timestamp: unix_now(),
        op: p.op.label(),
        m: 0,
        n: 0,
        k: 0,
        size: p.size,
        dtype: T::LABEL,
        reps: p.reps,
        ns_per_rep: t_med * 1e9,
        gflops: giga_rate(flops, t_med),
        gbps: giga_rate(bytes, t_med),
        checksum: checksum(&out),
    }
}

fn matmul_once<T: Scalar>(
    blocked: bool,
    a: &[T],
    b: &[T],
    c: &mut Vec<T>,
    m: usize,
    n: usize,
    k: usize,
    bs: usize,
) {
    if blocked {
        matmul_blocked(a, b, c, m, n, k, bs);
    } else {
        matmul_naive(a, b, c, m, n, k);
    }
}

/// Median trial time: middle element for odd counts, lower-middle for
/// even counts. Robust against outlier trials from scheduling jitter or
/// thermal throttling, where a mean is not.
fn median(times: &mut [f64]) -> f64 {
    times.sort_by(f64::total_cmp);
    times[(times.len() - 1) / 2]
}

/// `amount / seconds`, in giga-units, zero when no time elapsed.
fn giga_rate(amount: f64, seconds: f64) -> f64 {
    if seconds > 0.0 { amount / seconds / 1e9 } else { 0.0 }
}

/// Checksum of a kernel's output: compensated f64 sum of its elements.
///
/// Accumulating in compensated double keeps the printed value stable
/// across runs even for long f32 outputs, so it works as a coarse
/// regression signal.
fn checksum<T: Scalar>(v: &[T]) -> f64 {
    let mut sum = 0.0f64;
    let mut comp = 0.0f64;

    for &x in v {
        let y = x.to_f64() - comp;
        let t = sum + y;
        comp = (t - sum) - y;
        sum = t;
    }

    sum
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn median_of_odd_count_is_middle() {
        let mut times = vec![3.0, 1.0, 2.0];
        assert_eq!(median(&mut times), 2.0);
    }

    #[test]
    fn median_of_even_count_is_lower_middle() {
        let mut times = vec![4.0, 1.0, 3.0, 2.0];
        assert_eq!(median(&mut times), 2.0);
    }

    #[test]
    fn median_of_single_trial() {
        let mut times = vec![0.5];
        assert_eq!(median(&mut times), 0.5);
    }

    #[test]
    fn zero_elapsed_gives_zero_rate() {
        assert_eq!(giga_rate(1e9, 0.0), 0.0);
        assert_eq!(giga_rate(2e9, 1.0), 2.0);
    }

    #[test]
    fn checksum_compensates_f32_accumulation() {
        // 1e8 followed by many small values: a plain f32 fold loses all
        // of them, the compensated f64 checksum keeps them.
        let mut v = vec![1.0e8f32];
        v.extend(std::iter::repeat(0.25f32).take(1000));

        let chk = checksum(&v);
        assert!((chk - (1.0e8 + 250.0)).abs() < 1.0);
    }
}
