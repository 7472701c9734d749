//! bugsmith - Entry Point
//!
//! | Command | Output (JSON lines on stdout) |
//! |---------|-------------------------------|
//! | `bugsmith extract <paths>` | one entity snapshot per callable |
//! | `bugsmith generate <paths>` | one generated bug per line |
//! | `bugsmith modifiers` | name and explanation of every strategy |
//!
//! Logs go to stderr.

use anyhow::{Context, Result};
use bugsmith::infrastructure::config::ConfigLoader;
use bugsmith::infrastructure::discovery::discover_sources;
use bugsmith::infrastructure::generator::BugGenerator;
use bugsmith::infrastructure::logging::init_logging;
use bugsmith::providers::language::EntityExtractor;
use bugsmith::providers::modifiers::{ModifierKind, list_modifiers};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::warn;

/// Command line interface for bugsmith
#[derive(Parser, Debug)]
#[command(name = "bugsmith")]
#[command(about = "Structural bug injection for Go and Python sources")]
#[command(version)]
struct Cli {
    /// Path to configuration file (defaults to ./bugsmith.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract callables with their complexity and tags
    Extract {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Generate bugs for every eligible entity
    Generate {
        /// Files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Override the configured run seed
        #[arg(long)]
        seed: Option<u64>,
        /// Only apply these strategies (repeatable)
        #[arg(short, long = "modifier")]
        modifiers: Vec<ModifierKind>,
        /// Write JSON lines here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the built-in strategies
    Modifiers,
}

#[derive(Serialize)]
struct ModifierListing {
    name: &'static str,
    explanation: &'static str,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let (config, manifest) = loader.load_manifest().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Extract { paths } => {
            let files = discover_sources(&paths).context("Failed to discover sources")?;
            let report = EntityExtractor::new().extract_files(&files);
            let mut out = stdout();
            write_lines(&mut out, report.entities.iter().map(|e| e.info()))?;
            out.flush()?;
        }
        Commands::Generate {
            paths,
            seed,
            modifiers,
            output,
        } => {
            let mut manifest = manifest;
            if let Some(seed) = seed {
                manifest = manifest.with_seed(seed);
            }
            if !modifiers.is_empty() {
                manifest = manifest.retain(&modifiers);
            }

            let report = BugGenerator::new(manifest)
                .run(&paths)
                .context("Bug generation failed")?;
            for failure in &report.parse_failures {
                warn!(file = %failure.file.display(), "{}", failure.message);
            }

            let mut out: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create {}", path.display()))?,
                )),
                None => Box::new(stdout()),
            };
            write_lines(&mut out, &report.bugs)?;
            out.flush()?;
        }
        Commands::Modifiers => {
            let mut out = stdout();
            let listings = list_modifiers()
                .into_iter()
                .map(|(name, explanation)| ModifierListing { name, explanation });
            write_lines(&mut out, listings)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn stdout() -> BufWriter<io::StdoutLock<'static>> {
    BufWriter::new(io::stdout().lock())
}

fn write_lines<W, I, T>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    for item in items {
        serde_json::to_writer(&mut *out, &item)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}
