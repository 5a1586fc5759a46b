use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, ValueEnum};
use log::{info, warn};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::charset::CharacterClass;
use crate::configtool::AppConfig;
use crate::entropy::RngIndexSource;
use crate::export::{write_csv, write_json};
use crate::passgen::{GeneratedPassword, GenerationRequest, PasswordGenerator};
use crate::setclip::ClipboardSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
    Csv,
}

#[derive(Debug, Clone, Default, Args)]
pub struct GenArgs {
    /// Length of the password
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Number of passwords to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Exclude numbers
    #[arg(long, default_value_t = false)]
    pub no_numbers: bool,

    /// Exclude special characters
    #[arg(long, default_value_t = false)]
    pub no_special: bool,

    /// Avoid visually confusing characters (0 O l I 1)
    #[arg(short = 'c', long, default_value_t = false, conflicts_with = "allow_confusion")]
    pub avoid_confusion: bool,

    /// Allow confusing characters even if the config excludes them
    #[arg(long, default_value_t = false)]
    pub allow_confusion: bool,

    /// Force one character from every enabled class
    #[arg(long, default_value_t = false, conflicts_with = "no_require_all")]
    pub require_all: bool,

    /// Do not force one character from every enabled class
    #[arg(long, default_value_t = false)]
    pub no_require_all: bool,

    /// Custom special characters, replaces the built-in set
    #[arg(long)]
    pub special: Option<String>,

    /// Use URL-safe special characters (-._~)
    #[arg(short = 's', long, default_value_t = false, conflicts_with = "no_url_safe")]
    pub url_safe: bool,

    /// Use the full special set even if the config asks for URL-safe
    #[arg(long, default_value_t = false)]
    pub no_url_safe: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Copy the first password to the clipboard
    #[arg(long, default_value_t = false)]
    pub copy: bool,
}

impl GenArgs {
    /// 合并命令行参数与配置文件
    pub fn to_request(&self, config: &AppConfig) -> GenerationRequest {
        let classes = [
            (CharacterClass::Uppercase, self.no_uppercase),
            (CharacterClass::Lowercase, self.no_lowercase),
            (CharacterClass::Digit, self.no_numbers),
            (CharacterClass::Special, self.no_special),
        ]
        .into_iter()
        .filter(|(_, excluded)| !excluded)
        .map(|(class, _)| class)
        .collect();

        GenerationRequest {
            length: self.length.unwrap_or(config.default_length),
            classes,
            exclude_ambiguous: flag_override(
                self.avoid_confusion,
                self.allow_confusion,
                config.exclude_ambiguous,
            ),
            require_all: flag_override(self.require_all, self.no_require_all, config.require_all),
            count: self.count.unwrap_or(config.default_count),
        }
    }

    pub fn effective_config(&self, config: &AppConfig) -> AppConfig {
        let mut effective = config.clone();
        if let Some(special) = &self.special {
            effective.special_chars = Some(special.clone());
        }
        effective.url_safe = flag_override(self.url_safe, self.no_url_safe, config.url_safe);
        effective
    }
}

/// 命令行开关优先于配置文件，未指定时沿用配置值
fn flag_override(on: bool, off: bool, configured: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        configured
    }
}

pub fn generate_passwords<W: Write>(
    args: &GenArgs,
    config: &AppConfig,
    out: &mut W,
    clipboard: Option<&mut dyn ClipboardSink>,
) -> Result<Vec<GeneratedPassword>> {
    let effective = args.effective_config(config);
    let generator = PasswordGenerator::new(effective.charset_config()?);
    let request = args.to_request(&effective);

    let mut source = RngIndexSource::os();
    let batch = generator
        .generate_batch(&request, &mut source)
        .context("Failed to generate password")?;
    info!("generated {} password(s)", batch.len());

    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            write_batch(&mut file, &batch, args.format)?;
            writeln!(out, "Wrote {} password(s) to {}", batch.len(), path.display())?;
        }
        None => write_batch(out, &batch, args.format)?,
    }

    if let (Some(sink), Some(first)) = (clipboard, batch.first()) {
        match sink.copy_secret(first.password.as_str()) {
            Ok(()) => writeln!(
                out,
                "Copied to clipboard (cleared after {}s)",
                effective.clipboard_clear_seconds
            )?,
            Err(e) => warn!("clipboard copy failed: {:#}", e),
        }
    }

    Ok(batch)
}

fn write_batch<W: Write>(out: &mut W, batch: &[GeneratedPassword], format: OutputFormat) -> Result<()> {
    let now = Utc::now();
    match format {
        OutputFormat::Plain => {
            for (i, item) in batch.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, item.password)?;
                writeln!(
                    out,
                    "   Strength: {} (score: {})",
                    item.assessment.label, item.assessment.score
                )?;
                if !item.assessment.suggestions.is_empty() {
                    writeln!(out, "   Suggestions: {}", item.assessment.suggestions.join("; "))?;
                }
            }
        }
        OutputFormat::Json => write_json(out, batch, now)?,
        OutputFormat::Csv => write_csv(out, batch, now)?,
    }
    Ok(())
}
