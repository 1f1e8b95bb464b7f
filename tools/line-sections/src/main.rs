use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{filter::FilterFn, layer::SubscriberExt, util::SubscriberInitExt};

mod input;
mod output;

use input::{read_line_file, replay};
use output::{render_json, render_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "line-sections",
    author,
    version,
    about = "Replay a line's sections and print its stations in travel order",
    long_about = "Reads a line description (name, color, sections) from a JSON file and adds \
                  the sections one by one, in file order. Sections landing inside an existing \
                  section split it; sections that are disconnected from the line or connect \
                  two stations already on it are refused.\n\n\
                  The resulting stations are printed from the first station to the last."
)]
struct Args {
    /// Input JSON file describing the line
    #[arg(short, long)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Abort on the first refused section instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = FilterFn::new(move |meta| {
        let module = meta.module_path().unwrap_or_default();
        *meta.level() <= max_level
            && (module.starts_with("subway_line") || module.starts_with("line_sections"))
    });
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }

    let file = read_line_file(&args.input)?;
    tracing::info!("Line {} ({}): {} sections", file.name, file.color, file.sections.len());

    let result = replay(&file, args.strict)?;
    if result.skipped > 0 {
        tracing::warn!("{} of {} sections were skipped", result.skipped, file.sections.len());
    }

    let stations = result
        .line
        .stations()
        .context("Sections do not form a single line")?;

    match args.format {
        OutputFormat::Text => println!("{}", render_text(&stations)),
        OutputFormat::Json => println!("{}", render_json(&result.line, &stations)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = Args::parse_from(["line-sections", "--input", "line.json", "--format", "json", "--strict"]);
        assert_eq!(args.input, PathBuf::from("line.json"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.strict);
        assert!(!args.verbose);
    }

    #[test]
    fn test_default_format() {
        let args = Args::parse_from(["line-sections", "-i", "line.json"]);
        assert_eq!(args.format, OutputFormat::Text);
    }
}
