//! plainify CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use plainify::vision::{DescribeImage, OpenAiVision};

#[derive(Parser)]
#[command(
    name = "plainify",
    version,
    about = "Convert .docx documents into structured YAML for AI processing"
)]
struct Cli {
    /// Path to the input .docx file
    input: PathBuf,

    /// Output YAML file path; defaults to the input path with a .yaml extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generate descriptions for embedded images using the OpenAI API
    #[arg(long)]
    describe_images: bool,

    /// OpenAI API key for image descriptions
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Log to stderr so piped YAML output stays clean.
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| cli.input.with_extension("yaml"));

    let describer = if cli.describe_images {
        match cli.api_key.as_deref().filter(|key| !key.is_empty()) {
            Some(key) => Some(OpenAiVision::new(key)?),
            None => {
                warn!("image descriptions requested but no API key is configured; continuing without them");
                None
            }
        }
    } else {
        None
    };

    plainify::convert_file(
        &cli.input,
        &output,
        describer.as_ref().map(|d| d as &dyn DescribeImage),
    )?;

    println!("converted {} -> {}", cli.input.display(), output.display());
    if describer.is_some() {
        println!("image descriptions included");
    }

    Ok(())
}
