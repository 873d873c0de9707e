use clap::Parser;
use std::path::PathBuf;

/// Replay token-ledger call scripts
#[derive(Parser, Debug)]
#[command(name = "token-ledger")]
#[command(about = "Replay token-ledger call scripts against an in-memory host", long_about = None)]
pub struct CliArgs {
    /// Input script path containing one JSON call envelope per line
    #[arg(value_name = "SCRIPT", help = "Path to the input call script (JSON lines)")]
    pub script_file: PathBuf,

    /// Abort on the first failed call instead of skipping it
    #[arg(
        long = "strict",
        help = "Abort the replay on the first failed call (default: report and continue)"
    )]
    pub strict: bool,
}
