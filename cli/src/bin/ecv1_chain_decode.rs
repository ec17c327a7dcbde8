//! ecv1-chain-decode - decode any EC v1 envelope by its declared chain.
//!
//! Steps run in listed order. Prints the decoded UTF-8 text.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use ecv1_cli::{io, logging};
use ecv1_core::prelude::*;

const USAGE: &str = "Usage: ecv1-chain-decode <encoded_file>";

#[derive(Parser, Debug)]
#[command(name = "ecv1-chain-decode")]
#[command(version, about, long_about = None)]
struct Args {
    /// Envelope file (`-` for stdin)
    encoded_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(_) => {
            println!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    logging::init(&args.log_level);

    let text = match io::read_input(&args.encoded_file) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    match decode_envelope(&text) {
        Ok(decoded) => {
            println!("{decoded}");
            ExitCode::SUCCESS
        }
        Err(Ecv1Error::InvalidHeader { .. }) => {
            println!("Invalid EC v1 header.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
