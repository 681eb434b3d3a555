//! The `jsxstrip` binary.

use std::error::Error;
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use jsxstrip::{strip_markers, Mode, Options};

#[derive(Parser)]
#[command(
    name = "jsxstrip",
    version,
    about = "Remove test-instrumentation markup (data-testid, data-cy, ...) from JSX source"
)]
struct Cli {
    /// The JSX files to transform; or standard input if none passed
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Marker attribute name to strip; repeatable, replaces the defaults
    #[arg(short, long = "marker", value_name = "NAME")]
    markers: Vec<String>,

    /// Strip marker attributes only; keep emptied component wrappers
    #[arg(long)]
    keep_empty_components: bool,

    /// Write output to FILE instead of standard output (single input only)
    #[arg(short, long, value_name = "FILE", conflicts_with = "write")]
    output: Option<PathBuf>,

    /// Rewrite the input files in place
    #[arg(short, long)]
    write: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut options = Options::default();
    if !cli.markers.is_empty() {
        options.markers = cli.markers.clone();
    }
    if cli.keep_empty_components {
        options.mode = Mode::StripAttributes;
    }

    if cli.output.is_some() && cli.files.len() > 1 {
        eprintln!("--output requires a single input file");
        process::exit(2);
    }

    if cli.files.is_empty() {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        match strip_markers(&source, &options) {
            Ok(out) => emit(&cli, None, &out)?,
            Err(e) => {
                eprintln!("<stdin>: {}", e);
                process::exit(1);
            }
        }
        return Ok(());
    }

    let mut failed = false;
    for path in &cli.files {
        let source = match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                failed = true;
                continue;
            }
        };
        match strip_markers(&source, &options) {
            Ok(out) => emit(&cli, Some(path), &out)?,
            Err(e) => {
                // One bad file never aborts the rest of the batch.
                eprintln!("{}: {}", path.display(), e);
                failed = true;
            }
        }
    }
    if failed {
        process::exit(1);
    }
    Ok(())
}

fn emit(cli: &Cli, path: Option<&PathBuf>, out: &str) -> Result<(), Box<dyn Error>> {
    if let Some(path) = path.filter(|_| cli.write) {
        std::fs::write(path, out)?;
    } else if let Some(ref output) = cli.output {
        std::fs::write(output, out)?;
    } else {
        std::io::stdout().write_all(out.as_bytes())?;
    }
    Ok(())
}
