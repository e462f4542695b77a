//! `kin build` — catalog → family snapshot.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Args;
use kin_core::config::{CliOverrides, KinConfig};
use kin_core::errors::{CatalogError, PipelineError};
use kin_core::events::EventDispatcher;
use kin_core::types::{BrandCatalog, SpecIndex, SpecRecord};
use kin_pipeline::FamilyPipeline;

use crate::progress::ConsoleProgress;

use super::{read_input, unix_now, write_json};

#[derive(Args)]
pub struct BuildArgs {
    /// Catalog JSON file: brand → array of products (flat or pre-grouped).
    pub catalog: PathBuf,

    /// Specification attributes JSON produced by `kin fetch`.
    #[arg(long)]
    pub attributes: Option<PathBuf>,

    /// Output snapshot path.
    #[arg(short, long, default_value = "families.json")]
    pub output: PathBuf,

    /// Minimum cluster size to become a family.
    #[arg(long)]
    pub min_family_size: Option<usize>,
}

pub fn run(args: BuildArgs) -> Result<ExitCode, PipelineError> {
    let overrides = CliOverrides {
        pipeline_min_family_size: args.min_family_size,
        ..Default::default()
    };
    let config = KinConfig::load(Path::new("."), Some(&overrides))?;

    let catalog_text = read_input(&args.catalog)?;
    let catalog = BrandCatalog::from_json(&catalog_text, &args.catalog.display().to_string())?;

    let specs = match &args.attributes {
        Some(path) => {
            let text = read_input(path)?;
            let records: Vec<SpecRecord> =
                serde_json::from_str(&text).map_err(|e| CatalogError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            let index = SpecIndex::from_records(&records);
            tracing::info!(
                products = records.len(),
                with_specifications = index.len(),
                "loaded specification attributes"
            );
            Some(index)
        }
        None => None,
    };

    let mut events = EventDispatcher::new();
    events.register(Arc::new(ConsoleProgress::default()));

    let pipeline = FamilyPipeline::new(&config.pipeline);
    let outcome = pipeline.run(&catalog, specs.as_ref(), &events);
    println!("{}", outcome.diagnostics);

    let snapshot = outcome.into_snapshot(unix_now());
    write_json(
        &args.output,
        &snapshot,
        config.pipeline.effective_pretty_json(),
    )?;

    let stats = &snapshot.metadata.statistics;
    println!(
        "Wrote {} families ({} products, {:.2} avg variants) to {}",
        stats.total_families,
        stats.total_products_in_families,
        stats.average_variants_per_family,
        args.output.display()
    );
    Ok(ExitCode::SUCCESS)
}
