//! Export command - write the builtin catalog as a preset file

use anyhow::{Context, Result};
use ichimoku_presets::PresetCatalog;
use std::fs;
use tracing::info;

pub fn run(output: Option<String>) -> Result<()> {
    let file = PresetCatalog::builtin().to_preset_file();
    let json = serde_json::to_string_pretty(&file)?;

    match output {
        Some(path) => {
            fs::write(&path, json + "\n")
                .with_context(|| format!("Failed to write preset file {}", path))?;
            info!("Exported {} presets to {}", file.presets.len(), path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
