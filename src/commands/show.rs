//! Show command - print the resolved parameters of one preset

use anyhow::{bail, Result};
use ichimoku_presets::{Config, PresetFamily, ResolvedParams, Symbol, Timeframe};
use std::path::PathBuf;
use tracing::info;

pub fn run(
    config_path: Option<String>,
    family: Option<PresetFamily>,
    symbol: Option<String>,
    timeframe: Option<Timeframe>,
    preset_files: Vec<String>,
    format: String,
) -> Result<()> {
    // Load configuration, or build one from the flags
    let mut config = match config_path {
        Some(path) => {
            let config = Config::from_file(&path)?;
            info!("Loaded configuration from: {}", path);
            config
        }
        None => {
            let (Some(symbol), Some(timeframe)) = (symbol.as_ref(), timeframe) else {
                bail!("--symbol and --timeframe are required without --config");
            };
            Config::new(family.unwrap_or(PresetFamily::Config), symbol, timeframe)
        }
    };

    // Flags override the config file
    if let Some(family) = family {
        config.family = family;
    }
    if let Some(symbol) = symbol {
        config.symbol = Symbol::new(symbol);
    }
    if let Some(timeframe) = timeframe {
        config.timeframe = timeframe;
    }
    config
        .preset_files
        .extend(preset_files.into_iter().map(PathBuf::from));

    let catalog = config.catalog()?;
    let resolved = config.resolve(&catalog)?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&resolved)?),
        "text" => print_text(&config, &resolved),
        other => bail!("Unknown format: '{}'. Available: text, json", other),
    }

    Ok(())
}

fn print_text(config: &Config, params: &ResolvedParams) {
    let ind = &params.indicator;
    let stg = &params.strategy;

    println!("\n{}", "=".repeat(60));
    println!(
        "ICHIMOKU PRESET {}/{}/{}",
        config.family, config.symbol, config.timeframe
    );
    println!("{}", "=".repeat(60));
    println!("Indicator");
    println!("  Timeframe:          {}", ind.timeframe);
    println!("  Applied Price:      {}", ind.applied_price);
    println!("  Shift:              {}", ind.shift);
    println!("  Tenkan-sen:         {}", ind.tenkan_sen);
    println!("  Kijun-sen:          {}", ind.kijun_sen);
    println!("  Senkou Span B:      {}", ind.senkou_span_b);
    println!("  Warmup Bars:        {}", ind.warmup_bars());
    println!("Strategy");
    println!("  Lot Size:           {}", stg.lot_size);
    println!(
        "  Signal Open:        method {} / level {:.2} / filter {} / boost {}",
        stg.signal_open_method, stg.signal_open_level, stg.signal_open_filter, stg.signal_open_boost
    );
    println!(
        "  Signal Close:       method {} / level {:.2}",
        stg.signal_close_method, stg.signal_close_level
    );
    println!(
        "  Price Stop:         method {} / level {:.2}",
        stg.price_stop_method, stg.price_stop_level
    );
    println!(
        "  Price Limit:        method {} / level {:.2}",
        stg.price_limit_method, stg.price_limit_level
    );
    println!("  Tick Filter:        {}", stg.tick_filter_method);
    if stg.has_spread_filter() {
        println!("  Max Spread:         {:.1}", stg.max_spread);
    } else {
        println!("  Max Spread:         off");
    }
    println!("{}", "=".repeat(60));
}
