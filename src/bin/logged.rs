//! Command-line front end: emit log entries from shell scripts.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logged::config::{load_config, LogConfig};
use logged::{Data, Format, Logger};

#[derive(Parser)]
#[command(name = "logged")]
#[command(about = "Write structured log entries to stdout or a configured sink", long_about = None)]
struct Cli {
    /// TOML configuration file. Flags below are applied on top of it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format (json or text).
    #[arg(short, long)]
    format: Option<Format>,

    /// Module path prefix allowed to emit debug entries (repeatable).
    #[arg(short = 'n', long = "debug-namespace")]
    debug_namespaces: Vec<String>,

    /// Default annotation added to every entry, as key=value (repeatable).
    #[arg(short = 'D', long = "default", value_parser = parse_key_value)]
    defaults: Vec<(String, String)>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one info entry
    Info {
        message: String,
        /// Annotation as key=value (repeatable)
        #[arg(short, long = "data", value_parser = parse_key_value)]
        data: Vec<(String, String)>,
    },
    /// Write one debug entry on behalf of a target module
    Debug {
        /// Module path the entry is attributed to
        #[arg(short, long)]
        target: String,
        message: String,
        /// Annotation as key=value (repeatable)
        #[arg(short, long = "data", value_parser = parse_key_value)]
        data: Vec<(String, String)>,
    },
    /// Report whether debug output is enabled for a target
    Check { target: String },
    /// Write each stdin line as one entry
    Pipe {
        /// Log at debug level for this target instead of info
        #[arg(short, long)]
        target: Option<String>,
    },
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

fn build_logger(cli: &Cli) -> Result<Logger, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LogConfig::default(),
    };

    if let Some(format) = cli.format {
        config.format = format;
    }
    config.debug_namespaces.extend(cli.debug_namespaces.iter().cloned());
    config.defaults.extend(cli.defaults.iter().cloned());

    Ok(config.build()?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so they never mix with emitted entries
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logged=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let logger = build_logger(&cli)?;

    match cli.command {
        Commands::Info { message, data } => {
            let data: Data = data.into_iter().collect();
            logger.info(&message, Some(&data))?;
        }
        Commands::Debug {
            target,
            message,
            data,
        } => {
            let data: Data = data.into_iter().collect();
            if !logger.is_debug_at(&target) {
                tracing::info!(module = %target, "Debug disabled for module, entry dropped");
            }
            logger.debug_at(&target, &message, Some(&data))?;
        }
        Commands::Check { target } => {
            let enabled = logger.is_debug_at(&target);
            println!("{}", if enabled { "enabled" } else { "disabled" });
            if !enabled {
                std::process::exit(1);
            }
        }
        Commands::Pipe { target } => {
            let mut count = 0usize;
            for line in io::stdin().lock().lines() {
                let line = line?;
                match &target {
                    Some(target) => logger.debug_at(target, &line, None)?,
                    None => logger.info(&line, None)?,
                }
                count += 1;
            }
            tracing::debug!(lines = count, "Input exhausted");
        }
    }

    Ok(())
}
