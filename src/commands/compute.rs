use anyhow::{Context, Result};
use price_breakdown::config::Config;
use price_breakdown::{render, BreakdownView, PriceBreakdownInput, PriceFormatter};
use std::path::Path;
use tracing::{info, warn};

/// Execute the compute command
///
/// Prints the rendered breakdown, or the raw output record as JSON.
pub fn execute(cfg: &Config, input: &PriceBreakdownInput, json: bool) -> Result<()> {
    let output = run(cfg, input, json)?;
    print!("{}", output);
    Ok(())
}

/// Execute the file command
pub fn execute_file(cfg: &Config, path: &Path, json: bool) -> Result<()> {
    info!(path = %path.display(), "Reading breakdown input");
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let input = PriceBreakdownInput::from_json(&contents)
        .with_context(|| format!("Failed to parse input file {}", path.display()))?;

    execute(cfg, &input, json)
}

fn run(cfg: &Config, input: &PriceBreakdownInput, json: bool) -> Result<String> {
    let formatter = PriceFormatter::new(cfg.currency.clone());

    let output = formatter.compute_breakdown(input).map_err(|e| {
        warn!(kind = e.kind(), "Rejected breakdown input: {}", e);
        e
    })?;

    info!(
        fulfilled_by = %input.fulfilled_by,
        range_required = output.range_required,
        "Price breakdown computed"
    );

    if json {
        let mut text = serde_json::to_string_pretty(&output)?;
        text.push('\n');
        Ok(text)
    } else {
        let view = BreakdownView::build(input, &output, &formatter)?;
        Ok(render::render_table(&view))
    }
}
