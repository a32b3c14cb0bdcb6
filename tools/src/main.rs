use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use stream::StreamEncoder;
use tools::{decode_unit_bytes, format_report_pretty, inspect_registry, load_registry};

#[derive(Parser)]
#[command(
    name = "shiftpage-tools",
    version,
    about = "shiftpage encoding, decoding, and mapping inspection"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a UTF-8 text file into a raw unit stream.
    Encode {
        /// Path to the text file.
        input: PathBuf,
        /// Mapping file; the built-in pages are used when omitted.
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Where to write the unit stream.
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Decode a raw unit stream back into UTF-8 text.
    Decode {
        /// Path to the unit stream.
        input: PathBuf,
        /// Mapping file; the built-in pages are used when omitted.
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Where to write the decoded text.
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Inspect the pages of a mapping.
    Inspect {
        /// Mapping file; the built-in pages are used when omitted.
        #[arg(long)]
        mapping: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, default_value_t = InspectFormat::Pretty)]
        format: InspectFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InspectFormat {
    Pretty,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Encode {
            input,
            mapping,
            output,
        } => {
            let registry = load_registry(mapping.as_deref())?;
            let text = fs::read_to_string(&input)
                .with_context(|| format!("read text {}", input.display()))?;

            let file = fs::File::create(&output)
                .with_context(|| format!("create output {}", output.display()))?;
            let mut encoder = StreamEncoder::new(file, &registry);
            let skipped = encoder
                .write_text(&text)
                .with_context(|| format!("write units to {}", output.display()))?;
            encoder.into_inner().context("flush output")?;

            for drop in &skipped {
                eprintln!("warning: {drop}");
            }
            if !skipped.is_empty() {
                eprintln!("warning: {} character(s) dropped", skipped.len());
            }
        }
        Command::Decode {
            input,
            mapping,
            output,
        } => {
            let registry = load_registry(mapping.as_deref())?;
            let bytes =
                fs::read(&input).with_context(|| format!("read units {}", input.display()))?;
            let decoded = decode_unit_bytes(&registry, &bytes)?;

            fs::write(&output, decoded.text.as_bytes())
                .with_context(|| format!("write text {}", output.display()))?;

            for drop in &decoded.skipped {
                eprintln!("warning: {drop}");
            }
            if !decoded.skipped.is_empty() {
                eprintln!("warning: {} unit(s) dropped", decoded.skipped.len());
            }
        }
        Command::Inspect { mapping, format } => {
            let registry = load_registry(mapping.as_deref())?;
            let report = inspect_registry(&registry);
            match format {
                InspectFormat::Pretty => print!("{}", format_report_pretty(&report)),
                InspectFormat::Json => {
                    let json = serde_json::to_string_pretty(&report).context("serialize json")?;
                    println!("{json}");
                }
            }
        }
    }
    Ok(())
}
