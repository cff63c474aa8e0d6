use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use survey_catalog::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output format for the catalog
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum Format {
    /// Compact JSON array
    Json,
    /// Indented JSON array
    #[default]
    Pretty,
    /// One line per question
    Summary,
}

/// Print the travel survey questions for an external renderer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match args.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let catalog = survey_catalog::catalog();
    catalog
        .validate()
        .context("travel survey catalog is malformed")?;
    info!(questions = catalog.len(), format = ?args.format, "printing catalog");

    let output = match args.format {
        Format::Json => catalog.to_json()?,
        Format::Pretty => catalog.to_json_pretty()?,
        Format::Summary => summary(catalog),
    };

    println!("{output}");

    Ok(())
}

fn summary(catalog: &Catalog) -> String {
    catalog
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let answers = match question.kind().options() {
                Some(options) => format!("{} options", options.len()),
                None => "free text".to_string(),
            };
            format!(
                "{}. {} [{}, {}] {}",
                index + 1,
                question.id(),
                question.type_name(),
                answers,
                question.title()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
