use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

const BENCH: &str = "traversal_benchmark";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "skein workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare storage strategies on the traversal benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Where to write the markdown report
        #[arg(long, default_value = "benchmark_results/report.md")]
        output: PathBuf,

        /// Build without the `tracing` feature
        #[arg(long, default_value_t = false)]
        no_tracing: bool,
    },
}

/// `estimates.json`, trimmed to what the report reads.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// `benchmark.json`, trimmed to what the report reads.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
    Bytes(u64),
}

/// workload -> strategy -> elements per second
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            output,
            no_tracing,
        } => {
            if !report_only {
                run_benchmarks(quick, no_tracing)?;
            }
            generate_report(&output)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, no_tracing: bool) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);
    if no_tracing {
        cmd.arg("--no-default-features");
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("benchmark run failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("cannot create {}", report_path.display()))?;

    writeln!(file, "# Storage Strategy Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Strategy | Elements/s | vs slowest |")?;
    writeln!(file, "|---|---|---|---|")?;

    for (workload, strategies) in &results {
        let slowest = strategies.values().copied().fold(f64::INFINITY, f64::min);
        let mut ranked: Vec<_> = strategies.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(a.1));

        for (strategy, ops) in ranked {
            let rel = if slowest > 0.0 { ops / slowest } else { 0.0 };
            writeln!(
                file,
                "| {workload} | {strategy} | {} | **{rel:.2}x** |",
                human(*ops)
            )?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn human(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}

/// Walks `target/criterion/<workload>/<strategy>/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
            continue;
        }
        if file_name(&path).as_deref() != Some("estimates.json") {
            continue;
        }

        let Some(run_dir) = path.parent() else { continue };
        if file_name(run_dir).as_deref() != Some("new") {
            continue;
        }
        let Some(strategy_dir) = run_dir.parent() else { continue };
        let Some(workload_dir) = strategy_dir.parent() else { continue };
        let (Some(strategy), Some(workload)) = (file_name(strategy_dir), file_name(workload_dir)) else {
            continue;
        };
        if strategy == "report" || workload == "report" {
            continue;
        }

        let estimates: Estimates = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("malformed {}", path.display()))?;
        let elements = fs::read_to_string(run_dir.join("benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<BenchmarkInfo>(&content).ok())
            .and_then(|info| info.throughput)
            .map_or(1.0, |t| match t {
                Throughput::Elements(n) | Throughput::Bytes(n) => n as f64,
            });

        let time_ns = estimates.mean.point_estimate;
        if time_ns > 0.0 {
            results
                .entry(workload)
                .or_default()
                .insert(strategy, elements * 1e9 / time_ns);
        }
    }
    Ok(())
}
