//! Sigpolicy CLI - build, validate and inspect XAdES NoticeRef values.

use clap::{Parser, Subcommand};

mod commands;
mod input;
mod output;

use commands::{build, inspect, validate};

#[derive(Parser)]
#[command(name = "sigpolicy")]
#[command(about = "Signature-policy NoticeRef tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a NoticeRef and print it as JSON
    Build {
        /// Issuing organization (omit to build a staged, invalid reference)
        #[arg(long)]
        organization: Option<String>,
        /// Notice number to append (repeatable, order is kept)
        #[arg(long = "number", allow_negative_numbers = true)]
        numbers: Vec<i32>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Validate a NoticeRef JSON document
    Validate {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Exit with error code if any validation error is found
        #[arg(long)]
        strict: bool,
    },
    /// Show the organization and notice numbers of a NoticeRef
    Inspect {
        /// Input JSON file (or stdin if not provided)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            organization,
            numbers,
            pretty,
        } => build::run(organization, numbers, pretty),
        Commands::Validate {
            input,
            json,
            strict,
        } => validate::run(input, json, strict),
        Commands::Inspect { input, json } => inspect::run(input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
