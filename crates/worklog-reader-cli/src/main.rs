//! worklog-reader: outline, JSON model and HTML viewer for markdown worklogs.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use worklog_reader_config::Config;
use worklog_reader_engine::{
    ContextKind, IoError, Viewer, ViewerOptions, parse_context_document, parse_str, read_worklog,
    render_page, write_output,
};

#[derive(Debug, Parser)]
#[command(name = "worklog-reader", version)]
#[command(about = "Parse a project worklog into an outline, JSON model or HTML viewer", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/worklog-reader/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the section/log model as JSON
    Json {
        /// Worklog to read (defaults to the configured worklog_path)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
    /// Write the self-contained HTML viewer
    Html {
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        /// Output file (defaults to the configured output_path)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
    /// Print a PROJECT.md / ARCHITECTURE.md split into sections, as JSON
    Context {
        /// Document to read (defaults to the kind's file next to the worklog)
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,

        #[arg(long, default_value = "project", value_name = "KIND")]
        kind: ContextKind,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("Config path: {}", config_path.display());
    let config = Config::load_or_default(&config_path)?;

    match run(cli.command, &config_path, &config) {
        Err(e) if is_not_found(&e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        other => other,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command, config_path: &Path, config: &Config) -> Result<()> {
    match command {
        Command::Json { input } => {
            let input = input.unwrap_or_else(|| config.worklog_path.clone());
            let parsed = parse_str(&read_worklog(&input)?);
            println!("{}", parsed.worklog.to_json_pretty()?);
        }
        Command::Html { input, output } => {
            let input = input.unwrap_or_else(|| config.worklog_path.clone());
            let output = output.unwrap_or_else(|| config.output_path.clone());

            let parsed = parse_str(&read_worklog(&input)?);
            log::info!(
                "{}: {} sections, {} logs",
                input.display(),
                parsed.worklog.sections.len(),
                parsed.worklog.logs.len()
            );
            let html = render_page(&Viewer::new(&parsed), &viewer_options(config));
            write_output(&output, &html)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("Generated: {}", output.display());
        }
        Command::Context { input, kind } => {
            let input = input.unwrap_or_else(|| default_context_path(&config.worklog_path, kind));
            let text = read_worklog(&input)?;
            let file_name = input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| kind.file_name().to_string());
            let doc = parse_context_document(&text, kind, &file_name);
            println!("{}", doc.to_json_pretty()?);
        }
        Command::Init { force } => init_config(config_path, force)?,
    }
    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default()
        .save_to_path(config_path)
        .with_context(|| format!("writing {}", config_path.display()))?;
    println!("Wrote config: {}", config_path.display());
    Ok(())
}

fn viewer_options(config: &Config) -> ViewerOptions {
    ViewerOptions {
        title: config.viewer.title.clone(),
        log_title_width: config.viewer.log_title_width,
        section_title_width: config.viewer.section_title_width,
    }
}

/// PROJECT.md and ARCHITECTURE.md live next to the worklog.
fn default_context_path(worklog_path: &Path, kind: ContextKind) -> PathBuf {
    worklog_path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(kind.file_name())
}

fn is_not_found(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<IoError>(), Some(IoError::NotFound(_)))
}
