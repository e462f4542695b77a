//! `kin colors` — export the distinct color-axis values of a snapshot.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use kin_core::errors::{PipelineError, SnapshotError};
use kin_core::types::Snapshot;
use kin_pipeline::colors::{collect_colors, ColorInventory};

use super::{read_input, unix_now, write_json};

#[derive(Args)]
pub struct ColorsArgs {
    /// Snapshot JSON to read families from.
    pub snapshot: PathBuf,

    /// Output path for the color inventory.
    #[arg(short, long, default_value = "all-colors.json")]
    pub output: PathBuf,
}

pub fn run(args: ColorsArgs) -> Result<ExitCode, PipelineError> {
    let text = read_input(&args.snapshot)?;
    let snapshot: Snapshot =
        serde_json::from_str(&text).map_err(|e| SnapshotError::ParseError {
            path: args.snapshot.display().to_string(),
            message: e.to_string(),
        })?;

    let colors = collect_colors(&snapshot);
    let inventory = ColorInventory::new(colors, unix_now());
    write_json(&args.output, &inventory, true)?;

    println!(
        "Collected {} unique colors into {}",
        inventory.metadata.total_colors,
        args.output.display()
    );
    for (i, color) in inventory.colors.iter().take(20).enumerate() {
        println!("  {}. {color}", i + 1);
    }
    Ok(ExitCode::SUCCESS)
}
