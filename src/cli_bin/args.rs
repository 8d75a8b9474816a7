//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser)]
#[command(
    name = "yamlcast",
    version,
    about = "Convert YAML documents to typed JSON values and back",
    long_about = "yamlcast decodes YAML streams into JSON, inferring integer, float and \
                  boolean types for unquoted scalars, and encodes JSON values back into \
                  framed YAML documents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Decode a YAML stream into a JSON array with one element per document
    Decode(DecodeArgs),
    /// Encode JSON input as a framed YAML document
    Encode(EncodeArgs),
}

/// Arguments for the decode command
#[derive(Args, Debug, Clone)]
pub struct DecodeArgs {
    /// YAML file to read (stdin when omitted)
    pub file: Option<PathBuf>,

    /// YAML file whose root map seeds each document's root map
    #[arg(short, long, value_name = "FILE")]
    pub defaults: Option<PathBuf>,

    /// Print compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the encode command
#[derive(Args, Debug, Clone)]
pub struct EncodeArgs {
    /// JSON file to read (stdin when omitted); a top-level array is treated
    /// as a list of input values
    pub file: Option<PathBuf>,

    /// Nesting levels to expand before flattening containers to strings
    #[arg(long, default_value_t = 2)]
    pub depth: usize,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 4)]
    pub indent: usize,
}
