//! Token Ledger CLI
//!
//! Replays a call script through the token engine and prints the resulting
//! ledger state.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- calls.jsonl > report.csv
//! cargo run -- --strict calls.jsonl > report.csv
//! ```
//!
//! The program reads one JSON call envelope per line from the script file,
//! dispatches each through the engine against an in-memory host, prints
//! query responses as JSON lines, and finishes with a CSV balance report,
//! all on stdout. Failed calls are reported on stderr and skipped unless
//! `--strict` is given.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed script in strict mode, etc.)

use std::fs::File;
use std::io::BufReader;
use std::process;

use rust_token_ledger::cli;
use rust_token_ledger::host::memory_engine;
use rust_token_ledger::io::{replay, write_balance_report};

fn main() {
    let args = cli::parse_args();

    let file = match File::open(&args.script_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Error: cannot open {}: {}", args.script_file.display(), e);
            process::exit(1);
        }
    };

    let mut engine = memory_engine();
    let mut stdout = std::io::stdout();

    let summary = match replay(BufReader::new(file), &mut engine, &mut stdout, args.strict) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_balance_report(engine.ledger().store(), &mut stdout) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    eprintln!(
        "{} calls applied, {} rejected",
        summary.applied, summary.rejected
    );
}
