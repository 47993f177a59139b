//! rgb2pal - nearest palette color lookup
//!
//! Prints the index and value of the palette entry closest to an RGB color.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rgb2pal")]
#[command(author, version, about = "Find the nearest palette color to an RGB value")]
#[command(long_about = "
Finds the palette entry perceptually closest to a 24-bit RGB color
(Euclidean distance in YUV) and prints `<index> #<hex>`.

Palette files are plain text, one `<index>=<hex RGB>` record per line;
lines starting with '#' are comments. Any other line rejects the palette.

Examples:
  rgb2pal bc5475 terminal256.palette        # prints e.g. `132 #af5f87`
  rgb2pal 0x808080 grays.palette -v         # also log the distance
  rgb2pal ffcc00 big.palette --parallel -j 4
")]
pub struct Cli {
    /// Query color as hex RGB (e.g. aa87b4)
    pub rgb: String,

    /// Palette file
    pub palette: PathBuf,

    /// Extra arguments are accepted and ignored
    #[arg(hide = true)]
    pub extra: Vec<OsString>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Number of threads for --parallel (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    pub threads: usize,

    /// Search palette entries in parallel
    #[arg(long)]
    pub parallel: bool,
}

fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(err).context("invalid arguments"),
    };

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    commands::nearest::run(cli)
}

/// Logs go to stderr; stdout carries only the result line.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
