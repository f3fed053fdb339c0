//! CLI for the imgfetch batched image fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imgfetch_core::config;
use std::path::PathBuf;

use commands::{run_check, run_fetch};

/// Top-level CLI for the imgfetch batched image fetcher.
#[derive(Debug, Parser)]
#[command(name = "imgfetch")]
#[command(about = "imgfetch: batched concurrent image fetcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the image URLs listed in an input file, one per line.
    Run {
        /// Input file with candidate URLs.
        input: PathBuf,

        /// Destination directory (default: current directory).
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// Lines per batch; fetches within a batch run concurrently.
        #[arg(long, value_name = "N")]
        batch_size: Option<usize>,
    },

    /// Check whether a single URL would be accepted by the validator.
    Check {
        /// Candidate URL.
        url: String,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                input,
                dest,
                batch_size,
            } => {
                if let Some(n) = batch_size {
                    cfg.batch_size = n;
                }
                let dest = match dest {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_fetch(&cfg, &input, &dest).await?;
            }
            CliCommand::Check { url } => run_check(&url),
        }

        Ok(())
    }
}
