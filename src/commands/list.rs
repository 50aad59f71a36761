//! List command - print the preset catalog grouped by symbol

use anyhow::{Context, Result};
use ichimoku_presets::{PresetCatalog, PresetFamily, Symbol};
use itertools::Itertools;
use tracing::info;

pub fn run(
    symbol: Option<String>,
    family: Option<PresetFamily>,
    preset_files: Vec<String>,
) -> Result<()> {
    let catalog = load_catalog(&preset_files)?;
    let symbol = symbol.map(Symbol::new);

    let presets = catalog
        .iter()
        .filter(|p| symbol.as_ref().map_or(true, |s| &p.key().symbol == s))
        .filter(|p| family.map_or(true, |f| p.key().family == f))
        .sorted_by(|a, b| {
            (&a.key().symbol, a.key().timeframe, a.key().family)
                .cmp(&(&b.key().symbol, b.key().timeframe, b.key().family))
        })
        .collect::<Vec<_>>();

    info!(presets = presets.len(), "Listing presets");

    if presets.is_empty() {
        println!("No presets match");
        return Ok(());
    }

    println!("\n{}", "=".repeat(72));
    println!(
        "{:<8} {:<5} {:<8} {:>6} {:>6} {:>6} {:>10} {:>10} {:>7}",
        "SYMBOL", "TF", "FAMILY", "TENKAN", "KIJUN", "SENKOU", "OPEN_LVL", "STOP/LIM", "SPREAD"
    );
    println!("{}", "=".repeat(72));

    for (symbol, group) in &presets.into_iter().chunk_by(|p| p.key().symbol.clone()) {
        for preset in group {
            let key = preset.key();
            let params = preset.resolve();
            let exit_level = if params.strategy.price_limit_level != 0.0 {
                format!("L {:.1}", params.strategy.price_limit_level)
            } else {
                format!("S {:.1}", params.strategy.price_stop_level)
            };
            println!(
                "{:<8} {:<5} {:<8} {:>6} {:>6} {:>6} {:>10.1} {:>10} {:>7.1}",
                symbol.as_str(),
                key.timeframe.as_str(),
                key.family.as_str(),
                params.indicator.tenkan_sen,
                params.indicator.kijun_sen,
                params.indicator.senkou_span_b,
                params.strategy.signal_open_level,
                exit_level,
                params.strategy.max_spread,
            );
        }
    }
    println!("{}", "=".repeat(72));

    Ok(())
}

/// Builtin catalog extended with each preset file, in order
fn load_catalog(preset_files: &[String]) -> Result<PresetCatalog> {
    let mut catalog = PresetCatalog::builtin().clone();
    for path in preset_files {
        catalog
            .extend_from_file(path)
            .with_context(|| format!("Failed to load preset file {}", path))?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_without_files_is_builtin() {
        let catalog = load_catalog(&[]).unwrap();
        assert_eq!(catalog.len(), PresetCatalog::builtin().len());
    }

    #[test]
    fn test_load_catalog_error_names_file() {
        let path = std::env::temp_dir()
            .join("ichimoku_presets_list_missing.json")
            .display()
            .to_string();
        let _ = std::fs::remove_file(&path);

        let err = load_catalog(&[path.clone()]).unwrap_err();
        assert_eq!(err.to_string(), format!("Failed to load preset file {}", path));
    }
}
