//! CLI entrypoint for the rescanf conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use rescanf_harness::{
    ConformanceReport, FixtureSet, HarnessError, SlotSpec, TestRunner, VerificationSummary,
    execute_case,
};

/// Conformance tooling for rescanf.
#[derive(Debug, Parser)]
#[command(name = "rescanf-harness")]
#[command(about = "Conformance testing harness for rescanf")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the scanning engine against a fixture file.
    Verify {
        /// Fixture JSON file path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown). If omitted, prints a summary.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Fixed timestamp string for deterministic report generation.
        #[arg(long, default_value = "unspecified")]
        timestamp: String,
    },
    /// Run a single scan from the command line and print the outcome.
    Scan {
        /// Source text to scan.
        input: String,
        /// Format string.
        format: String,
        /// Destination slot kinds in binding order
        /// (char|i16|i32|i64|u16|u32|u64|f32|f64|str:<capacity>).
        #[arg(long = "slot")]
        slots: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(ok) => {
            if ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, HarnessError> {
    match cli.command {
        Command::Verify {
            fixture,
            report,
            timestamp,
        } => {
            let set = FixtureSet::from_file(&fixture)?;
            let results = TestRunner::new(set.family.clone()).run(&set);
            let summary = VerificationSummary::from_results(results);
            let all_passed = summary.all_passed();

            for result in summary.results.iter().filter(|r| !r.passed) {
                eprintln!("FAIL {}", result.case_name);
                if let Some(diff) = &result.diff {
                    eprintln!("{diff}");
                }
            }
            println!(
                "{}: {} passed, {} failed of {}",
                set.family, summary.passed, summary.failed, summary.total
            );

            if let Some(path) = report {
                let rendered = ConformanceReport {
                    title: format!("rescanf conformance: {}", set.family),
                    timestamp,
                    summary,
                }
                .to_markdown();
                std::fs::write(&path, rendered)
                    .map_err(|source| HarnessError::ReportIo { path, source })?;
            }
            Ok(all_passed)
        }
        Command::Scan {
            input,
            format,
            slots,
        } => {
            let specs = slots
                .iter()
                .map(|s| s.parse::<SlotSpec>())
                .collect::<Result<Vec<_>, _>>()?;
            let outcome = execute_case(input.as_bytes(), format.as_bytes(), &specs);
            println!("{}", outcome.render());
            Ok(true)
        }
    }
}
