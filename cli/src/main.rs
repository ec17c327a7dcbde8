//! ecv1 - EC v1 envelope encoder/decoder
//!
//! `encode` wraps a JSON file, `decode` unwraps the fixed `gz>b64` pipe,
//! `chain` follows whatever chain an envelope declares, and `validate`
//! reports on an envelope.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecv1_cli::{io, logging};
use ecv1_core::constants::{DEFAULT_CHAIN, DEFAULT_CONTENT_TYPE, DEFAULT_GZIP_LEVEL};
use ecv1_core::prelude::*;
use serde_json::Value;

/// ecv1 - EC v1 envelope encoder/decoder
#[derive(Parser, Debug)]
#[command(name = "ecv1")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Wrap a JSON file in an EC v1 envelope
    Encode {
        /// JSON input file (`-` for stdin)
        file: PathBuf,

        /// Output file (stdout when omitted or `-`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Transform chain, applied in listed order
        #[arg(long, default_value = DEFAULT_CHAIN)]
        chain: String,

        /// Content type declared as `ct=`
        #[arg(long, default_value = DEFAULT_CONTENT_TYPE)]
        content_type: String,

        /// gzip level (0-9)
        #[arg(long, default_value_t = DEFAULT_GZIP_LEVEL)]
        level: u32,
    },

    /// Unwrap a `gz>b64` envelope and pretty-print its JSON
    Decode {
        /// Envelope file (`-` for stdin)
        file: PathBuf,

        /// Output file (stdout when omitted or `-`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decode an envelope by following its declared chain
    Chain {
        /// Envelope file (`-` for stdin)
        file: PathBuf,

        /// Output file (stdout when omitted or `-`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Walk the chain last-to-first instead of as listed
        #[arg(long)]
        reverse: bool,
    },

    /// Check an envelope and print its decoded content
    Validate {
        /// Envelope file (`-` for stdin)
        file: PathBuf,

        /// Walk the chain as listed instead of last-to-first
        #[arg(long)]
        literal: bool,
    },
}

fn encode(file: &Path, output: Option<&Path>, options: &EncodeOptions) -> Result<()> {
    let text = io::read_input(file)?;
    let message: Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    let envelope = encode_with(&message, options)?;
    io::write_output(&envelope, output)
}

fn decode(file: &Path, output: Option<&Path>) -> Result<()> {
    let text = io::read_input(file)?;
    let message = decode_message(&text)?;
    let pretty = serde_json::to_string_pretty(&message)?;
    io::write_output(&pretty, output)
}

fn chain(file: &Path, output: Option<&Path>, config: &CodecConfig) -> Result<()> {
    let text = io::read_input(file)?;
    let decoded = decode_envelope_with(&text, config)?;
    io::write_output(&decoded, output)
}

fn validate(file: &Path, config: &CodecConfig) -> Result<ExitCode> {
    let text = io::read_input(file)?;
    match validate_envelope_with(&text, config) {
        Ok(report) => {
            println!("{}", report.summary());
            io::write_output(&report.render()?, None)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("{failure}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    match &cli.command {
        Commands::Encode { file, output, chain, content_type, level } => {
            let options = EncodeOptions::new(Some(chain.as_str()), Some(content_type.as_str()), Some(*level))?;
            encode(file, output.as_deref(), &options)?;
        }
        Commands::Decode { file, output } => decode(file, output.as_deref())?,
        Commands::Chain { file, output, reverse } => {
            let order = if *reverse { ChainOrder::Reverse } else { ChainOrder::Literal };
            chain(file, output.as_deref(), &CodecConfig::new(Some(order)))?;
        }
        Commands::Validate { file, literal } => {
            let config = if *literal { CodecConfig::default() } else { CodecConfig::reverse() };
            return validate(file, &config);
        }
    }
    Ok(ExitCode::SUCCESS)
}
