use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "optcell workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the optional-vs-std benchmarks and write a report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Save criterion results under this baseline name
        #[arg(long, default_value = "new")]
        baseline: String,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "optional_benchmark";
const IMPLEMENTATIONS: &[&str] = &["optcell", "std"];

/// The subset of criterion's `estimates.json` we read.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            baseline,
            report_only,
        } => {
            if !report_only {
                run_benchmarks(quick, &baseline)?;
            }
            generate_report(&baseline)?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, baseline: &str) -> Result<()> {
    println!("Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    cmd.arg("--save-baseline").arg(baseline);

    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to spawn cargo bench")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed with {status}");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report(baseline: &str) -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    // group -> implementation -> mean ns
    let mut results: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();
    collect_results(criterion_dir, baseline, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::io::Write;
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Optional vs std::option::Option ({baseline})")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for implementation in IMPLEMENTATIONS {
        write!(file, " {implementation} (ns) |")?;
    }
    writeln!(file, " optcell / std |")?;

    write!(file, "|---|")?;
    for _ in IMPLEMENTATIONS {
        write!(file, "---|")?;
    }
    writeln!(file, "---|")?;

    for (group, timings) in &results {
        write!(file, "| {group} |")?;
        for implementation in IMPLEMENTATIONS {
            match timings.get(*implementation) {
                Some(ns) => write!(file, " {ns:.2} |")?,
                None => write!(file, " N/A |")?,
            }
        }
        match (timings.get("optcell"), timings.get("std")) {
            (Some(ours), Some(std)) if *std > 0.0 => writeln!(file, " **{:.2}x** |", ours / std)?,
            _ => writeln!(file, " - |")?,
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Reads `target/criterion/<group>/<implementation>/<baseline>/estimates.json`.
fn collect_results(
    dir: &Path,
    baseline: &str,
    results: &mut BTreeMap<String, BTreeMap<String, f64>>,
) -> Result<()> {
    for group_entry in fs::read_dir(dir)?.flatten() {
        let group_path = group_entry.path();
        let Some(group) = dir_name(&group_path) else {
            continue;
        };
        if !group_path.is_dir() || group == "report" {
            continue;
        }

        for impl_entry in fs::read_dir(&group_path)?.flatten() {
            let impl_path = impl_entry.path();
            let Some(implementation) = dir_name(&impl_path) else {
                continue;
            };
            let estimates_path = impl_path.join(baseline).join("estimates.json");
            if !estimates_path.is_file() {
                continue;
            }

            let content = fs::read_to_string(&estimates_path)?;
            let estimates: Estimates = serde_json::from_str(&content)
                .with_context(|| format!("Malformed {}", estimates_path.display()))?;

            results
                .entry(group.clone())
                .or_default()
                .insert(implementation, estimates.mean.point_estimate);
        }
    }
    Ok(())
}

fn dir_name(path: &Path) -> Option<String> {
    path.file_name()?.to_str().map(str::to_owned)
}
