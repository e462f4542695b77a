//! `kin fetch` — pull specification attributes for every catalog product.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Args;
use kin_core::config::{CliOverrides, KinConfig};
use kin_core::errors::{CatalogError, PipelineError};
use kin_core::events::EventDispatcher;
use kin_core::types::{BrandCatalog, Product};
use kin_fetch::{FetchJob, FileCheckpoint, HttpAttributeClient};
use serde::Serialize;

use crate::progress::ConsoleProgress;

use super::{read_input, write_json};

#[derive(Args)]
pub struct FetchArgs {
    /// Products JSON: a flat product array or a brand catalog.
    pub products: PathBuf,

    /// Attribute API base URL (overrides config).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output path for the fetched records.
    #[arg(short, long, default_value = "products_with_attributes.json")]
    pub output: PathBuf,

    /// Error report path, written only when products fail.
    #[arg(long, default_value = "attribute_fetch_errors.json")]
    pub error_report: PathBuf,

    /// Requests in flight at once (overrides config).
    #[arg(long)]
    pub concurrency: Option<usize>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchErrorEntry {
    product_code: String,
    error: String,
}

pub fn run(args: FetchArgs) -> Result<ExitCode, PipelineError> {
    let overrides = CliOverrides {
        fetch_base_url: args.base_url.clone(),
        fetch_concurrency: args.concurrency,
        ..Default::default()
    };
    let config = KinConfig::load(Path::new("."), Some(&overrides))?;

    let products = load_products(&args.products)?;
    println!("Total products to process: {}", products.len());

    let client = HttpAttributeClient::new(&config.fetch)?;
    let checkpoint = FileCheckpoint::new(temp_path(&args.output));

    let mut events = EventDispatcher::new();
    events.register(Arc::new(ConsoleProgress::default()));

    let job = FetchJob::new(&client, &config.fetch);
    let result = job.run(&products, Some(&checkpoint), &events);

    write_json(&args.output, &result.data, true)?;
    println!("Results saved to {}", args.output.display());

    if !result.is_clean() {
        let entries: Vec<FetchErrorEntry> = result
            .errors
            .iter()
            .filter_map(|e| match e {
                PipelineError::Fetch(fetch) => Some(FetchErrorEntry {
                    product_code: fetch.product_code().to_string(),
                    error: fetch.to_string(),
                }),
                _ => None,
            })
            .collect();
        write_json(&args.error_report, &entries, true)?;
        println!(
            "{} products failed; error report saved to {}",
            entries.len(),
            args.error_report.display()
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Accept either a flat product array or a full brand catalog (flattened
/// in brand order).
fn load_products(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let text = read_input(path)?;
    if let Ok(products) = serde_json::from_str::<Vec<Product>>(&text) {
        return Ok(products);
    }
    let catalog = BrandCatalog::from_json(&text, &path.display().to_string())?;
    Ok(catalog
        .brands()
        .flat_map(|(_, products)| products.iter().cloned())
        .collect())
}

/// Sibling checkpoint path: `out.json` → `out_temp.json`.
fn temp_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("fetch");
    output.with_file_name(format!("{stem}_temp.json"))
}
