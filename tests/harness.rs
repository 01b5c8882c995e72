use std::fs;

use tempfile::TempDir;

use hpcbench::csv::append_record;
use hpcbench::runner::{self, BenchParams, BenchRecord, Op};

fn small_params(op: Op) -> BenchParams {
    BenchParams {
        op,
        m: 24,
        n: 20,
        k: 28,
        size: 1000,
        reps: 3,
        seed: 7,
        block_size: 16,
    }
}

// ============================================================
// Orchestrator: reproducibility and record shape
// ============================================================

#[test]
fn test_matmul_checksum_reproducible() {
    let params = small_params(Op::MatmulNaive);

    let first = runner::run::<f32>(&params);
    let second = runner::run::<f32>(&params);

    // Timing may vary between runs; the checksum may not.
    assert_eq!(first.checksum, second.checksum);
    assert_eq!(first.op, "matmul_naive");
    assert_eq!((first.m, first.n, first.k), (24, 20, 28));
    assert_eq!(first.size, 0);
    assert_eq!(first.dtype, "float");
}

#[test]
fn test_blocked_checksum_reproducible_and_close_to_naive() {
    let naive = runner::run::<f64>(&small_params(Op::MatmulNaive));
    let blocked = runner::run::<f64>(&small_params(Op::MatmulBlocked));
    let blocked_again = runner::run::<f64>(&small_params(Op::MatmulBlocked));

    assert_eq!(blocked.checksum, blocked_again.checksum);
    assert_eq!(blocked.op, "matmul_blocked");

    // Different accumulation order: close, not necessarily identical.
    assert!((naive.checksum - blocked.checksum).abs() < 1.0e-9);
}

#[test]
fn test_reduction_record_shape() {
    let record = runner::run::<f64>(&small_params(Op::Reduction));

    assert_eq!(record.op, "reduction");
    assert_eq!((record.m, record.n, record.k), (0, 0, 0));
    assert_eq!(record.size, 1000);
    assert_eq!(record.dtype, "double");
    assert_eq!(record.reps, 3);
    assert!(record.checksum.is_finite());
    assert!(record.ns_per_rep >= 0.0);
    assert!(record.gflops >= 0.0);
    assert!(record.gbps >= 0.0);
}

#[test]
fn test_scan_checksum_reproducible() {
    let first = runner::run::<f32>(&small_params(Op::Scan));
    let second = runner::run::<f32>(&small_params(Op::Scan));

    assert_eq!(first.checksum, second.checksum);
    assert_eq!(first.op, "scan");
    assert_eq!(first.size, 1000);
}

#[test]
fn test_even_reps_run_completes() {
    let mut params = small_params(Op::Reduction);
    params.reps = 4;

    let record = runner::run::<f32>(&params);
    assert_eq!(record.reps, 4);
}

#[test]
fn test_zero_sized_runs_complete() {
    let mut params = small_params(Op::MatmulNaive);
    params.m = 0;
    params.n = 0;
    params.k = 0;
    params.size = 0;

    for op in [Op::MatmulNaive, Op::MatmulBlocked, Op::Reduction, Op::Scan] {
        params.op = op;
        let record = runner::run::<f64>(&params);

        // Degenerate loops do no work: zero checksum, zero throughput,
        // and in particular no division-by-zero artifacts.
        assert_eq!(record.checksum, 0.0, "{}", op.label());
        assert!(record.gflops >= 0.0 && record.gflops.is_finite());
        assert!(record.gbps >= 0.0 && record.gbps.is_finite());
    }
}

// ============================================================
// Record sink contract
// ============================================================

#[test]
fn test_csv_header_written_once_then_appends() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("results.csv");

    let record = runner::run::<f32>(&small_params(Op::MatmulNaive));
    append_record(&path, &record).expect("first append");
    append_record(&path, &record).expect("second append");

    let content = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], BenchRecord::CSV_HEADER);
    for row in &lines[1..] {
        assert_eq!(row.split(',').count(), 12, "row: {}", row);
    }
}

#[test]
fn test_csv_existing_content_is_never_rewritten() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("results.csv");

    fs::write(&path, "pre-existing line\n").expect("seed file");

    let record = runner::run::<f32>(&small_params(Op::Scan));
    append_record(&path, &record).expect("append");

    let content = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = content.lines().collect();

    // Non-empty destination: no header, rows only.
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "pre-existing line");
    assert!(lines[1].contains(",scan,"));
}

#[test]
fn test_csv_row_field_values() {
    let record = BenchRecord {
        timestamp: 1700000000,
        op: "reduction",
        m: 0,
        n: 0,
        k: 0,
        size: 16,
        dtype: "double",
        reps: 7,
        ns_per_rep: 1234.56,
        gflops: 1.5,
        gbps: 12.0,
        checksum: 0.125,
    };

    assert_eq!(
        record.csv_row(),
        "1700000000,reduction,0,0,0,16,double,7,1235,1.500000,12.000000,0.125"
    );
}

#[test]
fn test_status_line_shape() {
    let record = runner::run::<f64>(&small_params(Op::Reduction));
    let line = record.status_line();

    assert!(line.starts_with("[reduction] median "));
    assert!(line.contains("GF/s"));
    assert!(line.contains("checksum="));
}
