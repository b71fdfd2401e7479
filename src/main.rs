//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishblock` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use phishblock::initialization::init_logger_with;
use phishblock::{run_scan, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load PHISHBLOCK_* variables from a .env file, current directory first,
    // then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Cli::parse().into_config();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scan(config).await {
        Ok(report) => {
            println!(
                "🎉 Done: {} domain{} in blocklist ({} new from {} mail{}) in {:.1}s",
                report.total_blocked,
                if report.total_blocked == 1 { "" } else { "s" },
                report.added(),
                report.mails_read,
                if report.mails_read == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            println!("Saved to {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("phishblock error: {:#}", e);
            process::exit(1);
        }
    }
}
