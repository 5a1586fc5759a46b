//  ____              _____
// |  _ \__      __   |  ___|__  _ __ __ _  ___
// | |_) \ \ /\ / /   | |_ / _ \| '__/ _` |/ _ \
// |  __/ \ V  V /    |  _| (_) | | | (_| |  __/
// |_|     \_/\_/     |_|  \___/|_|  \__, |\___|
//                                   |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// A secure password generator written in Rust.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rpassword::read_password;
use std::io::{self, Write};
use std::path::PathBuf;

use pwforge::commands::{config, password_gen, testpass};
use pwforge::configtool::{AppConfig, resolve_config_path};
use pwforge::logging::init_logger;
use pwforge::setclip::{self, ClipboardSink, SystemClipboard};

#[derive(Debug, Parser)]
#[command(name = "pwforge", version)]
#[command(about = "A secure password generator written in Rust", long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate new random passwords
    Gen(password_gen::GenArgs),

    /// Test password strength and properties
    Testpass(testpass::TestpassArgs),

    /// Show or initialise the configuration file
    Config {
        /// Write the default configuration if none exists
        #[arg(long, default_value_t = false)]
        init: bool,
    },
}

fn read_password_from_stdin(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    read_password().context("Failed to read password")
}

fn main() -> Result<()> {
    if setclip::is_daemon() {
        init_logger(false);
        return setclip::run_daemon();
    }

    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Gen(args) => {
            let app_config = AppConfig::load_from(&config_path)
                .with_context(|| format!("Failed to load config {}", config_path.display()))?;
            let mut system_clipboard = SystemClipboard::new(app_config.clipboard_clear_seconds);
            let clipboard: Option<&mut dyn ClipboardSink> = if args.copy {
                Some(&mut system_clipboard as &mut dyn ClipboardSink)
            } else {
                None
            };
            password_gen::generate_passwords(&args, &app_config, &mut stdout, clipboard)?;
            Ok(())
        }
        Commands::Testpass(args) => {
            let app_config = AppConfig::load_from(&config_path)
                .with_context(|| format!("Failed to load config {}", config_path.display()))?;
            let generator_config = app_config.charset_config()?;
            let assessor = pwforge::StrengthAssessor::new(&generator_config);
            let password = match &args.password {
                Some(p) => p.clone(),
                None => read_password_from_stdin("Enter password to test: ")?,
            };
            testpass::test_password(&password, &args, &assessor, &mut stdout)
        }
        Commands::Config { init } => {
            if init {
                config::init_config(&config_path, &mut stdout)
            } else {
                config::show_config(&config_path, &mut stdout)
            }
        }
    }
}
