//! Either samples entry point
//!
//! Runs the sample programs from the command line.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use either_core::codec;
use either_core::Either;
use either_samples::{
    applicative_sum, decode_result_record, first_line, format_square, init_tracing,
    parse_positive_integer, parse_url,
};

//-----------------------------------------------------------------------------
// Command Definition
//-----------------------------------------------------------------------------

/// Sample programs built on the Either sum type
#[derive(Debug, Parser)]
#[command(name = "either-samples", about = "Sample programs built on the Either sum type")]
struct Cli {
    /// Log level filter, overridden by RUST_LOG
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse positive integers and print their squares
    ParseInt {
        /// Inputs to parse
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Print the first line of each file
    FirstLine {
        /// Files to read
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Parse absolute URLs
    ParseUrl {
        /// URLs to parse
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Add two positive integers
    Sum { a: String, b: String },

    /// Parse an integer and print the result as a tagged JSON record
    Encode { input: String },

    /// Decode a tagged JSON record holding a string error or an integer
    Decode { json: String },
}

//-----------------------------------------------------------------------------
// Execution
//-----------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(Some(&cli.log_level), Some(cli.json_logs))?;

    match cli.command {
        Command::ParseInt { inputs } => {
            for input in inputs {
                println!("{}", format_square(&input).trace("parse-int").into_inner());
            }
        }
        Command::FirstLine { paths } => {
            for path in paths {
                first_line(&path)
                    .trace("first-line")
                    .accept(|err| eprintln!("{}", err), |line| println!("{}", line));
            }
        }
        Command::ParseUrl { urls } => {
            for url in urls {
                let parsed = parse_url(Some(&url)).map(|u| u.to_string());
                println!("{}", parsed);
            }
        }
        Command::Sum { a, b } => {
            report(applicative_sum(&a, &b).trace("sum"));
        }
        Command::Encode { input } => {
            let parsed = parse_positive_integer(&input);
            let json = codec::to_json_string(&parsed).context("failed to encode result")?;
            println!("{}", json);
        }
        Command::Decode { json } => match decode_result_record(&json) {
            Ok(decoded) => println!("{}", decoded),
            Err(message) => {
                eprintln!("{}", serde_json::to_string(&message)?);
                bail!("failed to decode record: {} [{}]", message.message, message.code);
            }
        },
    }

    Ok(())
}

fn report<T: std::fmt::Display>(result: Either<String, T>) {
    result.accept(|err| eprintln!("error: {}", err), |value| println!("{}", value));
}
