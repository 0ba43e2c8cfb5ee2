use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

use crate::options::{DEFAULT_VIEWPORT_FRACTION, PreviewOptions};
use crate::types::Viewport;

#[derive(Parser)]
#[command(name = "imgpeek")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Read image dimensions from headers and size editor previews", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.debug {
            Level::DEBUG
        } else if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print format and dimensions of image files
    Probe {
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print a JSON array instead of one line per file
        #[arg(long)]
        json: bool,
    },

    /// Size the previews of one document from a compiler image map
    Previews {
        /// Image map JSON written by the compiler
        #[arg(short, long)]
        map: PathBuf,

        /// Document whose images should be placed
        #[arg(long)]
        document: String,

        #[arg(long)]
        viewport_width: f64,

        #[arg(long)]
        viewport_height: f64,

        /// Share of the viewport an image may occupy
        #[arg(short, long, default_value_t = DEFAULT_VIEWPORT_FRACTION)]
        fraction: f64,

        /// Probe images one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Extract source locations from compiler output (stdin if no file)
    Locate { input: Option<PathBuf> },
}

pub fn preview_settings(
    viewport_width: f64,
    viewport_height: f64,
    fraction: f64,
    sequential: bool,
) -> (Viewport, PreviewOptions) {
    let mut options = PreviewOptions::new().with_fraction(fraction);
    if sequential {
        options = options.sequential();
    }
    (Viewport::new(viewport_width, viewport_height), options)
}
