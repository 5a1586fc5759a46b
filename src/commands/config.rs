use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

use crate::configtool::AppConfig;

/// Print the effective configuration and where it comes from.
pub fn show_config<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    let config = AppConfig::load_from(path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    let source = if path.exists() { "file" } else { "defaults" };
    writeln!(out, "# {} ({})", path.display(), source)?;
    writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
    Ok(())
}

pub fn init_config<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    if path.exists() {
        bail!("Config file {} already exists", path.display());
    }
    AppConfig::default()
        .save_to(path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;
    writeln!(out, "Wrote default config to {}", path.display())?;
    Ok(())
}
