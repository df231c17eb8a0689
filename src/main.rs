// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use ioc_hunter::{
    Config, FileProcessor, FileScanner, IocExtractor, IocMap, NerModel, OutputFormat,
    ProgressTracker, TailFollower, Validator, exporter,
    pipeline::progress::print_summary,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

const BANNER: &str = r#"
   ___ ___   ___   _  _          _
  |_ _/ _ \ / __| | || |_  _ _ _| |_ ___ _ _
   | | (_) | (__  | __ | || | ' \  _/ -_) '_|
  |___\___/ \___| |_||_|\_,_|_||_\__\___|_|
"#;

const SUBTITLE: &str = "Extract IPs, Domains, URLs, Hashes, and Emails from files";

#[derive(Parser)]
#[command(name = "ioc_hunter")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Extract IOC indicators from files or directories", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a file or directory and export the extracted indicators
    Scan {
        path: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long)]
        recursive: bool,

        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Follow a file live and report indicators in appended lines
    Tail { path: PathBuf },

    /// Report on the configured NER model
    Model,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ioc_hunter::utils::logging::init_logger(cli.color, cli.verbose);
    print_banner(cli.color);

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Scan {
            path,
            output,
            format,
            recursive,
            limit,
        } => {
            cmd_scan(&config, &path, output, format, recursive, limit, cli.color)?;
        }
        Commands::Tail { path } => {
            cmd_tail(&config, &path)?;
        }
        Commands::Model => {
            cmd_model(&config)?;
        }
    }

    Ok(())
}

fn print_banner(colored: bool) {
    if colored {
        println!("{}", BANNER.cyan().bold());
        println!("  {} {}\n", "v0.1.0".yellow(), SUBTITLE.italic());
    } else {
        println!("{}", BANNER);
        println!("  v0.1.0 {}\n", SUBTITLE);
    }
}

/// The classifier is mandatory: a model that cannot be loaded stops the
/// process here, before any file work starts.
fn load_extractor(config: &Config) -> Result<IocExtractor> {
    let model = NerModel::load(&config.model.path)
        .context("Cannot start without the trained NER model")?;
    Ok(IocExtractor::new(Box::new(model)))
}

#[allow(clippy::too_many_arguments)]
fn cmd_scan(
    config: &Config,
    path: &PathBuf,
    output: Option<PathBuf>,
    format: Option<OutputFormat>,
    recursive: bool,
    limit: Option<usize>,
    colored: bool,
) -> Result<()> {
    Validator::validate_scan_target(path)?;

    let extractor = load_extractor(config)?;
    let scanner = FileScanner::new(config.pipeline.clone());

    let mut files = scanner.gather(path, recursive)?;
    if let Some(limit) = limit {
        files.truncate(limit);
    }

    if files.is_empty() {
        anyhow::bail!("No files found in path: {}", path.display());
    }

    info!("Scanning {} file(s)", files.len());

    let processor = FileProcessor::new(extractor);
    let mut tracker = ProgressTracker::with_color(files.len(), colored);
    let report = processor.process_batch(&files, &mut tracker);
    tracker.finish();
    print_summary(&tracker.stats());

    let output_path = output.unwrap_or_else(|| config.output.file.clone());
    let output_format = format.unwrap_or(config.output.format);
    exporter::export(&report, &output_path, output_format, config.output.pretty)?;

    println!(
        "{}",
        ioc_hunter::utils::logging::format_success(&format!(
            "Results saved to {}",
            output_path.display()
        ))
    );
    Ok(())
}

fn cmd_tail(config: &Config, path: &PathBuf) -> Result<()> {
    Validator::validate_tail_target(path)?;

    let extractor = load_extractor(config)?;
    let processor = FileProcessor::new(extractor);

    println!(
        "{}",
        ioc_hunter::utils::logging::format_warning(&format!("Tailing file: {}", path.display()))
    );

    let mut follower = TailFollower::open(path)?;
    let interval = Duration::from_millis(config.pipeline.tail_poll_ms);

    follower.follow(interval, |line| {
        let iocs = processor.process_line(line);
        if !iocs.is_empty() {
            println!(
                "{}",
                ioc_hunter::utils::logging::format_hit(line, &render_hits(&iocs))
            );
        }
    })?;

    Ok(())
}

fn cmd_model(config: &Config) -> Result<()> {
    let model = NerModel::load(&config.model.path)
        .context("Cannot start without the trained NER model")?;

    println!("Model path: {}", config.model.path.display());
    println!("Labels: {}", model.labels().join(", "));
    println!("Vocabulary entries: {}", model.vocab_size());
    Ok(())
}

fn render_hits(iocs: &IocMap) -> String {
    iocs.iter()
        .map(|(label, values)| format!("{}: {}", label, values.join(", ")))
        .collect::<Vec<_>>()
        .join(" | ")
}
