use clap::{Parser, Subcommand};
use std::process;
use tracing::{debug, error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover plugboard pairs by hill-climbing on index of coincidence.
    Search(cmd::search::SearchArgs),
    /// Encode or decode text on a fully specified machine.
    Encode(cmd::encode::EncodeArgs),
    /// Print the index of coincidence of some text.
    Score(cmd::score::ScoreArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("🚀 stecker {}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args),
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Score(args) => cmd::score::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
