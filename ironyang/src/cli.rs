//! Command line interface: load YIN files, run a formatter.

use anyhow::Context;
use clap::Parser;
use ironyang_codegen::formatter::{FORMATTERS, formatter};
use ironyang_schema::{Entry, parse_yin_file, validate_entry};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Convert YIN (XML-encoded YANG) modules into another interface definition language
#[derive(Parser, Debug)]
#[command(name = "ironyang", version)]
pub struct Cli {
    /// Output format
    #[arg(short, long, default_value = "thrift")]
    pub format: String,

    /// List the available formats and exit
    #[arg(long)]
    pub list_formats: bool,

    /// Fail when a schema tree has leaves or RPCs with children
    #[arg(long)]
    pub strict: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// YIN files to convert
    #[arg(required_unless_present = "list_formats")]
    pub files: Vec<PathBuf>,
}

/// Runs the command, writing to `--out` or stdout.
///
/// # Errors
/// Returns an error if a file cannot be read or parsed, the format is
/// unknown, validation fails under `--strict`, or the output cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            let file = File::create(out)
                .with_context(|| format!("failed to create {}", out.display()))?;
            let mut writer = BufWriter::new(file);
            run_with_writer(cli, &mut writer)?;
            writer.flush()?;
            tracing::info!("Wrote {}", out.display());
            Ok(())
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            run_with_writer(cli, &mut writer)
        }
    }
}

/// Runs the command against an arbitrary writer.
///
/// # Errors
/// See [`run`].
pub fn run_with_writer(cli: &Cli, w: &mut dyn Write) -> anyhow::Result<()> {
    if cli.list_formats {
        for f in FORMATTERS {
            writeln!(w, "{:<10} {}", f.name, f.help)?;
        }
        return Ok(());
    }

    let formatter = formatter(&cli.format)?;
    let entries = load_entries(cli)?;

    tracing::debug!(
        "Formatting {} modules with '{}'",
        entries.len(),
        formatter.name
    );
    formatter.run(w, &entries)?;
    Ok(())
}

/// Loads every input file, in argument order.
fn load_entries(cli: &Cli) -> anyhow::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for path in &cli.files {
        let loaded = parse_yin_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?;

        for entry in &loaded {
            if let Err(e) = validate_entry(entry) {
                if cli.strict {
                    return Err(e).with_context(|| format!("invalid schema in {}", path.display()));
                }
                tracing::warn!("{}: {}", path.display(), e);
            }
        }

        entries.extend(loaded);
    }

    Ok(entries)
}
