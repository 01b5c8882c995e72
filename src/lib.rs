//! Micro-benchmarks for dense numerical kernels, built from scratch.
//!
//! I wrote this to get trustworthy numbers out of three kernels I kept
//! arguing about: dense matmul (naive i-k-j vs cache-blocked), Kahan
//! compensated summation, and an in-place inclusive prefix sum. Each run
//! times one kernel at one size, takes the median over repeated trials,
//! and appends a CSV row with throughput, bandwidth and a checksum.
//!
//! ## Usage
//!
//! ```
//! use hpcbench::{matmul_naive, make_random};
//!
//! let a = make_random::<f64>(16 * 8, 42);
//! let b = make_random::<f64>(8 * 4, 43);
//! let mut c = Vec::new();
//!
//! matmul_naive(&a, &b, &mut c, 16, 4, 8);
//! assert_eq!(c.len(), 16 * 4);
//! ```
//!
//! Full benchmark runs go through the orchestrator:
//!
//! ```
//! use hpcbench::runner::{self, BenchParams, Op};
//!
//! let params = BenchParams {
//!     op: Op::Reduction,
//!     m: 0, n: 0, k: 0,
//!     size: 1 << 12,
//!     reps: 3,
//!     seed: 42,
//!     block_size: 128,
//! };
//! let record = runner::run::<f32>(&params);
//! assert_eq!(record.op, "reduction");
//! ```
//!
//! ## What's inside
//!
//! - Four kernels: GEMM naive / GEMM blocked / Kahan sum / inclusive scan
//! - Median-of-N timing with one untimed warm-up per run
//! - Seeded, portable input generation (same seed, same bits, anywhere)
//! - Append-only CSV result rows for downstream plotting

pub mod csv;
pub mod kernels;
pub mod rng;
pub mod runner;
pub mod scalar;
pub mod timer;

pub use kernels::matmul_blocked::{DEFAULT_BLOCK_SIZE, matmul_blocked};
pub use kernels::matmul_naive::matmul_naive;
pub use kernels::reduction::kahan_sum;
pub use kernels::scan::inclusive_scan_inplace;
pub use rng::make_random;
pub use scalar::Scalar;
