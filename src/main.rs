mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use yamlconv::config::Config;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    yamlconv::observability::init(&config.logging);

    match cli.command {
        Commands::Handlers(args) => commands::handlers(&args.input)?,
        Commands::Value(args) => commands::value(&config, &args.converter, &args.value)?,
    }

    Ok(())
}
