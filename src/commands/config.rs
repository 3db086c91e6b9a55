use anyhow::Result;
use colored::Colorize;
use price_breakdown::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the effective configuration (file plus environment overrides)
pub fn show(path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();
    println!("{}", to_toml(&cfg)?);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!(path = %path.display(), "Validating configuration file");

    let cfg = config::load_config(path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  {}: {}", "Currency".cyan(), sample_amount(&cfg)?);
    println!("  {}: {}", "Log Level".cyan(), cfg.logging.level);
    println!("  {}: {}", "Log Format".cyan(), cfg.logging.format);

    info!("Configuration validation successful");
    Ok(())
}

fn to_toml(cfg: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

/// Render a fixed amount to preview the currency format
fn sample_amount(cfg: &Config) -> Result<String> {
    Ok(price_breakdown::format_currency(1234.5, &cfg.currency)?)
}
