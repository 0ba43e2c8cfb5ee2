use anyhow::{Context, Result, bail};
use clap::Parser;
use serde_json::json;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use imgpeek::cli::{Cli, Commands, preview_settings};
use imgpeek::{ImageFileMap, ProbeError, diagnostics, probe};

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Probe { files, json } => run_probe(&files, json),
        Commands::Previews {
            map,
            document,
            viewport_width,
            viewport_height,
            fraction,
            sequential,
        } => {
            let (viewport, options) =
                preview_settings(viewport_width, viewport_height, fraction, sequential);
            run_previews(&map, &document, viewport, &options)
        }
        Commands::Locate { input } => run_locate(input.as_deref()),
    }
}

fn run_probe(files: &[PathBuf], as_json: bool) -> Result<()> {
    let mut io_failures = 0usize;
    let mut entries = Vec::with_capacity(files.len());

    for path in files {
        let result = probe(path);
        if let Err(ProbeError::Io(_)) = &result {
            io_failures += 1;
        }

        if as_json {
            entries.push(match &result {
                Ok(info) => json!({ "path": path, "info": info }),
                Err(e) => json!({ "path": path, "error": e.to_string() }),
            });
        } else {
            match &result {
                Ok(info) => println!("{}: {}", path.display(), info),
                Err(e) => eprintln!("{}: {}", path.display(), e),
            }
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    }

    if io_failures > 0 {
        bail!("{} of {} files could not be read", io_failures, files.len());
    }
    Ok(())
}

fn run_previews(
    map_path: &Path,
    document: &str,
    viewport: imgpeek::Viewport,
    options: &imgpeek::PreviewOptions,
) -> Result<()> {
    let map = ImageFileMap::load(map_path)
        .with_context(|| format!("Failed to load image map {}", map_path.display()))?;

    let previews = map
        .previews(document, viewport, options)
        .context("Invalid preview settings")?;

    println!("{}", serde_json::to_string_pretty(&previews)?);
    Ok(())
}

fn run_locate(input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    for location in diagnostics::locations(&text) {
        println!("{}", location);
    }
    Ok(())
}
