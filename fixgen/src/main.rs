use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use elements::Dataset;
use generator::{generate, DEFAULT_SEED};

#[derive(Parser)]
#[command(
    name = "fixgen",
    version,
    about = "Deterministic map fixture generator"
)]
struct Cli {
    /// RNG seed for deterministic results.
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Output path for the fixture document.
    #[arg(long, default_value = "assets/test_elements_large.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let dataset = generate(cli.seed);
    write_dataset_json(&cli.out, &dataset)?;
    print_summary(&cli.out, &dataset);
    Ok(())
}

fn write_dataset_json(path: &Path, dataset: &Dataset) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(dataset).context("serialize dataset")?;
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn print_summary(path: &Path, dataset: &Dataset) {
    let summary = dataset.summary();
    println!("generated {}", path.display());
    println!("polygons: {}", summary.polygons);
    println!("custom markers: {}", summary.custom_markers);
    println!("pinned widgets: {}", summary.pinned_widgets);
    println!("lines: {}", summary.lines);
}
