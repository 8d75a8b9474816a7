use anyhow::Result;
use clap::Parser;

mod cli_bin;

use cli_bin::args::{Cli, Commands};
use cli_bin::commands::{decode_command, encode_command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let output = match &cli.command {
        Commands::Decode(args) => decode_command(args)?,
        Commands::Encode(args) => encode_command(args)?,
    };

    println!("{}", output);
    Ok(())
}

/// `RUST_LOG` wins over the verbosity flags when it is set
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
