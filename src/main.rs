//! lsmountable - Main Entry Point
//!
//! Prints mountable drives and partitions with their sizes, one per line.

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use lsmountable::error::{EXIT_OK, EXIT_USAGE};
use lsmountable::*;
use std::path::PathBuf;
use std::process;

/// List mountable drives and partitions
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Feed dmenu
    lsmountable | dmenu -l 10

    # Keep going past devices that cannot be read
    lsmountable --skip-unreadable

    # Machine-readable output
    lsmountable --format json

EXIT CODES:
    0   success
    1   cannot list the device directory
    2   no devices found
    3   cannot open a device
    4   cannot get the size of a device
    64  bad arguments or configuration
")]
struct Args {
    /// Directory holding the device nodes
    #[arg(short, long)]
    dev_root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Skip devices that cannot be opened or sized instead of aborting
    #[arg(short, long)]
    skip_unreadable: bool,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Don't print a diagnostic on failure
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    // Parse arguments; clap's usage code would clash with "no devices"
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(EXIT_USAGE);
            }
        },
    };

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let quiet = args.quiet;

    match run(args) {
        Ok(count) => {
            log::debug!("Listed {} device(s)", count);
            process::exit(EXIT_OK);
        }
        Err(e) => {
            if !quiet {
                eprintln!("Error: {}", e);
            }
            process::exit(e.exit_code());
        }
    }
}

fn run(args: Args) -> Result<usize> {
    // Build configuration
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::new(),
    };
    if let Some(dev_root) = args.dev_root {
        config.dev_root = dev_root;
    }
    if let Some(format) = args.format {
        config.format = format.into();
    }
    if args.skip_unreadable {
        config.skip_unreadable = true;
    }

    log::debug!("Configuration:");
    log::debug!("  Device root: {}", config.dev_root.display());
    log::debug!("  Format: {}", config.format);
    log::debug!("  Skip unreadable: {}", config.skip_unreadable);

    let lister = Lister::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    lister.run(&mut out)
}
