//! The numeric kernels under benchmark.
//!
//! Each kernel lives in its own file, computes into an explicitly
//! designated output, and knows nothing about timing or I/O.
//!
//! Available kernels:
//! - `matmul_naive`: dense GEMM, i-k-j loop order
//! - `matmul_blocked`: dense GEMM, cache-blocked tiling
//! - `reduction`: Kahan compensated sum
//! - `scan`: in-place inclusive prefix sum

pub mod matmul_blocked;
pub mod matmul_naive;
pub mod reduction;
pub mod scan;
