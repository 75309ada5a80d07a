use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hangman")]
#[command(about = "🎩 Guess the word one letter at a time before the man is hanged")]
#[command(version)]
pub struct Cli {
    /// Seed for picking the secret word (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write diagnostics here instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Word-picking RNG: seeded when asked, fresh from the OS otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Set up tracing. Filter comes from RUST_LOG, defaulting to warnings only.
    pub fn init_logging(&self) -> Result<()> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        let installed = match &self.log_file {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create log file {}", path.display()))?;
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Arc::new(file))
                    .with_ansi(false)
                    .try_init()
            }
            None => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        installed
            .map_err(anyhow::Error::msg)
            .context("failed to install log subscriber")
    }
}
