use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod codes;
pub mod envinfo;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a JSON value against one or more type descriptors.
    Check(CheckArgs),
    /// List the reserved JSON-RPC error codes.
    Codes(CodesArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Codes(args) => codes::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON value to classify.
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub value: Option<String>,
    /// Read the JSON value from a file instead.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Expected type(s), comma-separated. More than one means any-of.
    #[arg(long = "type", short = 't', value_delimiter = ',', required = true)]
    pub types: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Show only this code.
    #[arg(long, allow_hyphen_values = true)]
    pub code: Option<i64>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}
