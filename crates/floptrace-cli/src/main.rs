use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;

const USAGE: &str = "Usage: flop-tool [path/to/sdfg.json]";

#[derive(Parser)]
#[command(name = "flop-tool")]
#[command(about = "Print the flop analysis of a structured control-flow tree")]
#[command(version)]
struct Cli {
    /// Flop document: the control-flow tree plus its analysis results
    input: PathBuf,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Spaces per nesting level
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=16))]
    indent: u8,

    #[arg(long)]
    color: bool,

    /// Omit `file:start-end` source ranges
    #[arg(long)]
    no_debug_info: bool,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for floptrace::ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => floptrace::ReportFormat::Text,
            Format::Json => floptrace::ReportFormat::Json,
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            err.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(err) => {
            eprintln!("{}", USAGE);
            err.print()?;
            return Ok(ExitCode::from(1));
        }
    };

    init_logging(cli.verbose);
    cmd_trace(cli)?;
    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn cmd_trace(cli: Cli) -> Result<()> {
    use colored::*;
    use floptrace::PrinterConfig;
    use std::fs;
    use std::time::Instant;

    if cli.verbose {
        eprintln!("{}", " flop-tool".bright_blue().bold());
        eprintln!("{}", "=".repeat(50).bright_blue());
        eprintln!(" Input: {}", cli.input.display());
        if let Some(ref out) = cli.output {
            eprintln!(" Output: {}", out.display());
        }
        eprintln!(" Format: {:?}", cli.format);
        eprintln!();
    }

    if cli.color {
        colored::control::set_override(true);
    }

    let start = Instant::now();
    let config = PrinterConfig::default()
        .with_indent_step(usize::from(cli.indent))
        .with_colors(cli.color)
        .with_debug_info(!cli.no_debug_info)
        .with_format(cli.format.into());

    let document = floptrace::load_document(&cli.input)?;
    let report = floptrace::trace_document(&document, &config)?;

    match cli.output {
        Some(output_path) => {
            fs::write(&output_path, format!("{}\n", report))
                .with_context(|| format!("Could not write file: {}", output_path.display()))?;
            if cli.verbose {
                eprintln!(
                    "\n {} Report written to {}",
                    "SUCCESS:".bright_green().bold(),
                    output_path.display()
                );
            }
        }
        None => println!("{}", report),
    }

    if cli.verbose {
        eprintln!("   Time: {:.3}s", start.elapsed().as_secs_f64());
    }

    Ok(())
}
