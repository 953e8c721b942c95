use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use inkforge::config::Config;
use inkforge::scorer::Scorer;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring constants; explicit flags still win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Batch(cmd::batch::BatchArgs),
    Simulate(cmd::simulate::SimulateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let cli_config = match &cli.command {
        Commands::Score(args) => &args.config,
        Commands::Batch(args) => &args.config,
        Commands::Simulate(args) => &args.config,
    };
    // Flattened config flags live in the subcommand's matches, not the root
    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("No subcommand given");
        process::exit(2);
    };

    let config = match &cli.config {
        Some(path) => match Config::load_from_file(path) {
            Ok(mut file_config) => {
                file_config.merge_from_cli(cli_config, sub_matches);
                file_config
            }
            Err(e) => {
                error!("Failed to load config '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => {
            info!("No config file given. Using embedded defaults.");
            cli_config.clone()
        }
    };

    let scorer = match Scorer::new(config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("Invalid scoring configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, scorer),
        Commands::Batch(args) => cmd::batch::run(args, scorer),
        Commands::Simulate(args) => cmd::simulate::run(args, scorer),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
