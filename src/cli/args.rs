use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pymodscan")]
#[command(version, about = "List the importable Python modules and packages in a directory")]
pub struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Recognized module suffix, tried in the order given (repeatable)
    #[arg(short, long = "suffix", value_name = "SUFFIX", allow_hyphen_values = true)]
    pub suffixes: Vec<String>,

    /// Configuration file (default: ./.pymodscan.toml, then the user config dir)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit a JSON report
    #[arg(long)]
    pub json: bool,

    /// Sort output by module name
    #[arg(long)]
    pub sort: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
