//! Validate command - check a preset file without using it

use anyhow::{Context, Result};
use ichimoku_presets::PresetCatalog;
use tracing::info;

pub fn run(path: String) -> Result<()> {
    info!("Validating preset file: {}", path);

    let catalog = PresetCatalog::load_file(&path)
        .with_context(|| format!("Preset file {} is invalid", path))?;

    let builtin = PresetCatalog::builtin();
    let overridden = catalog
        .iter()
        .filter(|p| builtin.get(p.key()).is_some())
        .count();

    println!("{}: {} presets OK", path, catalog.len());
    for preset in catalog.iter() {
        println!("  {}", preset.key());
    }
    if overridden > 0 {
        println!("  ({} replace builtin presets)", overridden);
    }

    Ok(())
}
