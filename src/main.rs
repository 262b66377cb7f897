use clap::Parser;
use loadplan::{TransformError, TransformerBuilder};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Converts a TMS shipper load plan XML document into load JSON
#[derive(Parser)]
#[command(name = "loadplan")]
#[command(version)]
#[command(about = "Converts a TMS shipper load plan XML document into load JSON", long_about = None)]
struct Cli {
    /// XML file to convert (omit to read from stdin)
    input: Option<PathBuf>,

    /// Write JSON to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON mapping table to use instead of the built-in one
    #[arg(short, long)]
    mapping: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Write non-ASCII characters as UTF-8 instead of \uXXXX escapes
    #[arg(long)]
    raw_unicode: bool,
}

fn main() -> Result<(), TransformError> {
    env_logger::init();
    let cli = Cli::parse();

    let mut builder = TransformerBuilder::new()
        .with_pretty(!cli.compact)
        .with_escape_non_ascii(!cli.raw_unicode);
    if let Some(path) = &cli.mapping {
        log::info!("Loading mapping table from {}", path.display());
        builder = builder.with_mapping_file(path)?;
    }
    let transformer = builder.build()?;

    let input = match &cli.input {
        Some(path) => {
            log::info!("Reading load plan from {}", path.display());
            fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let output = transformer.transform(&input)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, format!("{}\n", output))?;
            log::info!("Wrote {}", path.display());
        }
        None => writeln!(io::stdout().lock(), "{}", output)?,
    }
    Ok(())
}
