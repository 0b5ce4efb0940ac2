use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod decode;
mod error;
mod output;
mod roundtrip;
mod schema;
mod utils;

use error::Result;

#[derive(Parser)]
#[command(name = "elastic")]
#[command(about = "Map JSON/YAML documents through declared attribute schemas", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a document into a record of the given type
    Decode {
        #[command(flatten)]
        config: decode::Config,
    },
    /// Check that decoding then encoding a document gives it back
    Roundtrip {
        #[command(flatten)]
        config: roundtrip::Config,
    },
    /// Show the declared types and attributes of a schema
    Schema {
        #[command(flatten)]
        config: schema::Config,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Decode { config } => decode::execute(config)?,
        Commands::Roundtrip { config } => roundtrip::execute(config)?,
        Commands::Schema { config } => schema::execute(config)?,
    }

    Ok(())
}
