use clap::{CommandFactory, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::PrinterConfig;
use crate::core::Inspector;
use crate::uint160::UInt160;

pub mod formatters;

/// Upper bound for `random --count`
pub const MAX_RANDOM_COUNT: u32 = 10_000;

use formatters::CliFormatter;

#[derive(Parser)]
#[command(name = "uint160-printer")]
#[command(about = "Render 160-bit identifiers the way a debugger shows them", long_about = None)]
pub struct Cli {
    /// Read configuration from this file only
    #[arg(long = "config", short = 'c', global = true)]
    pub config_path: Option<PathBuf>,

    /// Show version information
    #[arg(long = "version", short = 'v', action = clap::ArgAction::SetTrue)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render five 32-bit limbs, most significant first
    Format {
        /// Limb values, decimal or 0x-prefixed hex
        #[arg(value_parser = parse_limb, conflicts_with = "list")]
        limbs: Vec<u32>,

        /// A limb list as dumped by a debugger, e.g. "{_M_elems = {1, 2, 3, 4, 5}}"
        #[arg(long, short = 'l')]
        list: Option<String>,
    },

    /// Parse a 40-character hex identifier and describe it
    Parse { hex: String },

    /// XOR distance between two hex identifiers
    Distance { a: String, b: String },

    /// Generate random identifiers
    Random {
        #[arg(long, short = 's')]
        seed: Option<u64>,

        /// How many identifiers to print
        #[arg(
            long,
            short = 'n',
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_RANDOM_COUNT))
        )]
        count: u32,
    },

    /// SHA-1 key of a text
    Hash { text: String },

    /// Show configuration file locations
    Config {
        /// Write the default configuration to the user config file
        #[arg(long)]
        init: bool,
    },
}

/// Parse a limb argument: decimal or `0x`-prefixed hex
fn parse_limb(arg: &str) -> Result<u32, String> {
    let parsed = match arg.strip_prefix("0x").or_else(|| arg.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => arg.parse::<u32>(),
    };

    parsed.map_err(|e| format!("invalid limb {arg:?}: {e}"))
}

fn parse_id(arg: &str) -> Result<UInt160, String> {
    arg.parse()
        .map_err(|e| format!("Error parsing identifier {arg:?}: {e}"))
}

/// Print to stdout, treating a closed pipe as success
///
/// # Errors
///
/// Returns an error if writing to stdout fails for any other reason.
pub fn safe_print(text: &str) -> Result<(), String> {
    let mut stdout = std::io::stdout().lock();

    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        Err(e) => Err(format!("Error writing output: {e}")),
    }
}

/// [`safe_print`] with a trailing newline
///
/// # Errors
///
/// Returns an error if writing to stdout fails for any other reason.
pub fn safe_println(text: &str) -> Result<(), String> {
    safe_print(&format!("{text}\n"))
}

fn load_config(cli: &Cli) -> Result<PrinterConfig, String> {
    let loaded = match &cli.config_path {
        Some(path) => PrinterConfig::load_from(path),
        None => PrinterConfig::load(),
    };

    loaded.map_err(|e| format!("Error loading configuration: {e}"))
}

/// Run the CLI application
///
/// # Errors
///
/// This function will return an error if:
/// - The configuration cannot be loaded
/// - A limb, limb list or identifier cannot be parsed
/// - The limb count is not exactly five
/// - Writing the output fails
pub fn run() -> Result<(), String> {
    let cli = Cli::parse();

    if cli.version {
        return safe_print(&crate::version::get_version_info().to_string());
    }

    let Some(command) = &cli.command else {
        let mut cmd = Cli::command();
        cmd.print_help().map_err(|e| e.to_string())?;
        return Ok(());
    };

    if let Commands::Config { init } = command {
        if *init {
            let path = PrinterConfig::create_default_config_file()
                .map_err(|e| format!("Error writing configuration: {e}"))?;
            return safe_println(&format!("Wrote {}", path.display()));
        }
        PrinterConfig::print_config_info(cli.config_path.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::debug!("Loaded configuration {config:?}");
    let show_limbs = config.display.show_limbs;
    let inspector = Inspector::new(config);

    match command {
        Commands::Format { limbs, list } => {
            let hex = match list {
                Some(text) => inspector.format_limb_list(text),
                None => inspector.format_limbs(limbs),
            }
            .map_err(|e| format!("Error formatting limbs: {e}"))?;
            safe_println(&hex)
        }
        Commands::Parse { hex } => {
            let value = parse_id(hex)?;
            let description = inspector.describe(&value);
            safe_print(&CliFormatter::format_description(&description, show_limbs))
        }
        Commands::Distance { a, b } => {
            let a = parse_id(a)?;
            let b = parse_id(b)?;
            let distance = inspector.distance(&a, &b);
            let description = inspector.describe(&distance);
            safe_print(&CliFormatter::format_description(&description, show_limbs))
        }
        Commands::Random { seed, count } => {
            let values = inspector.random_iter(*seed).take(*count as usize);
            for (i, value) in values.enumerate() {
                let hex = inspector.describe(&value).hex;
                safe_print(&CliFormatter::format_list_item(i, &hex))?;
            }
            Ok(())
        }
        Commands::Hash { text } => {
            let key = inspector.digest(text.as_bytes());
            let description = inspector.describe(&key);
            safe_print(&CliFormatter::format_description(&description, show_limbs))
        }
        Commands::Config { .. } => Ok(()),
    }
}
