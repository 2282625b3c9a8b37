//! Paytypes CLI entrypoint.

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod handlers;

use commands::{Commands, ConfigCommands};
use config::CliConfig;

#[derive(Parser)]
#[command(name = "paytypes")]
#[command(author, version, about = "Validate and inspect payment API payloads", long_about = None)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = CliConfig::load()?;

    let level = match cli.verbose {
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Validate {
            paths,
            object,
            deleted,
            strict,
        } => {
            let target = object.map(|object| handlers::Target { object, deleted });
            handlers::validate(&config, &paths, target, strict)?
        }
        Commands::Schema {
            object,
            deleted,
            out,
        } => handlers::schema(&object, deleted, out.as_deref())?,
        Commands::Export { dir } => handlers::export(&config, dir.as_deref())?,
        Commands::Objects { markdown } => handlers::objects(&config, markdown)?,
        Commands::Config { command } => match command {
            ConfigCommands::Show => handlers::show_config(&config)?,
            ConfigCommands::Set { key, value } => handlers::set_config(&key, &value)?,
        },
    }

    Ok(())
}
