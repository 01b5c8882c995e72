//! Command-line benchmark runner.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hpcbench::DEFAULT_BLOCK_SIZE;
use hpcbench::csv;
use hpcbench::runner::{self, BenchParams, Op};

/// Micro-benchmark one numerical kernel and append the result as a CSV row.
#[derive(Debug, Parser)]
#[command(name = "hpcbench", version)]
struct Cli {
    /// Operation to benchmark
    #[arg(long, value_enum, default_value_t = OpArg::Matmul)]
    op: OpArg,

    /// Rows of A and C (matmul)
    #[arg(short = 'M', long = "M", default_value_t = 1024)]
    m: usize,

    /// Columns of B and C (matmul)
    #[arg(short = 'N', long = "N", default_value_t = 1024)]
    n: usize,

    /// Columns of A, rows of B (matmul)
    #[arg(short = 'K', long = "K", default_value_t = 1024)]
    k: usize,

    /// Vector length (reduction and scan)
    #[arg(long, default_value_t = 1 << 24)]
    size: usize,

    /// Timed repetitions per run; the median is reported
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..))]
    reps: u32,

    /// Element precision
    #[arg(long, value_enum, default_value_t = DtypeArg::Float)]
    dtype: DtypeArg,

    /// Seed for input generation
    #[arg(long, default_value_t = 42)]
    seed: u32,

    /// Output CSV path (header written on first use, rows appended after)
    #[arg(long, default_value = "results.csv")]
    out: PathBuf,

    /// Use the cache-blocked matmul variant
    #[arg(long)]
    blocked: bool,

    /// Tile edge for the blocked matmul variant
    #[arg(long, default_value_t = DEFAULT_BLOCK_SIZE)]
    block_size: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OpArg {
    Matmul,
    Reduction,
    Scan,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DtypeArg {
    Float,
    Double,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let op = match (cli.op, cli.blocked) {
        (OpArg::Matmul, false) => Op::MatmulNaive,
        (OpArg::Matmul, true) => Op::MatmulBlocked,
        (OpArg::Reduction, _) => Op::Reduction,
        (OpArg::Scan, _) => Op::Scan,
    };

    let params = BenchParams {
        op,
        m: cli.m,
        n: cli.n,
        k: cli.k,
        size: cli.size,
        reps: cli.reps as usize,
        seed: cli.seed,
        block_size: cli.block_size,
    };

    info!(op = op.label(), reps = params.reps, seed = params.seed, "running benchmark");

    let record = match cli.dtype {
        DtypeArg::Float => runner::run::<f32>(&params),
        DtypeArg::Double => runner::run::<f64>(&params),
    };

    csv::append_record(&cli.out, &record)
        .with_context(|| format!("cannot append results to {}", cli.out.display()))?;

    println!("{}", record.status_line());

    Ok(())
}
