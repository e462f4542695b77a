//! `kin verify` — check a snapshot's invariants and selectability.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use kin_core::errors::{PipelineError, SnapshotError};
use kin_core::types::Snapshot;
use kin_pipeline::verify::verify_snapshot;

use super::{read_input, write_json};

#[derive(Args)]
pub struct VerifyArgs {
    /// Snapshot JSON to verify.
    pub snapshot: PathBuf,

    /// Where to write the problem report when verification fails.
    #[arg(long, default_value = "variant-verification-report.json")]
    pub report: PathBuf,
}

pub fn run(args: VerifyArgs) -> Result<ExitCode, PipelineError> {
    let text = read_input(&args.snapshot)?;
    let snapshot: Snapshot =
        serde_json::from_str(&text).map_err(|e| SnapshotError::ParseError {
            path: args.snapshot.display().to_string(),
            message: e.to_string(),
        })?;

    let report = verify_snapshot(&snapshot);

    println!("Families checked: {}", report.families_checked);
    println!("Families with matching product: {}", report.families_matched);
    println!("Families without matching product: {}", report.unresolved.len());
    println!("Structural errors: {}", report.structural_errors.len());

    for error in &report.structural_errors {
        println!("  ✗ {error}");
    }
    for problem in &report.unresolved {
        println!(
            "  ✗ [{}] {} ({} variants) — no variant matches {:?}",
            problem.brand, problem.title, problem.variant_count, problem.selected_options
        );
    }

    if report.is_clean() {
        println!("✓ Snapshot verifies clean.");
        Ok(ExitCode::SUCCESS)
    } else {
        write_json(&args.report, &report, true)?;
        println!("Detailed report written to {}", args.report.display());
        Ok(ExitCode::FAILURE)
    }
}
