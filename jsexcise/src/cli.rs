use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.jsexcise.toml):
  Create this file in your project root to set defaults.

  [jsexcise]
  file = \"web/app.js\"                        # File to edit in place
  methods = [\"showSettings\", \"hideSettings\"] # Methods to remove, in order
  backup = true                              # Keep <file>.backup

  The same keys may live under a \"jsexcise\" object in package.json.
  Command-line values override the configuration file.
";

/// Options for output formatting and verbosity.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Output a JSON report.
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output (config source, unmatched names, backup path).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "jsexcise - Remove named method blocks from a JavaScript file",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// JavaScript file to edit in place (default: web/app.js).
    pub file: Option<PathBuf>,

    /// Method to remove. Repeat to remove several, in the given order.
    #[arg(short = 'm', long = "method", value_name = "NAME")]
    pub methods: Vec<String>,

    /// Show what would be removed without touching the file.
    #[arg(long)]
    pub dry_run: bool,

    /// Save a copy of the original file as <file>.backup before writing.
    #[arg(short = 'b', long)]
    pub backup: bool,

    /// Load settings from this TOML file instead of searching for one.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output formatting options.
    #[command(flatten)]
    pub output: OutputOptions,
}
