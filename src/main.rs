//! Propal CLI - Track commercial proposals from draft to paid invoice

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use propal::cli::{Cli, Commands};
use propal::errors::to_exit_code;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing; --verbose and --quiet override RUST_LOG
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> propal::Result<()> {
    match cli.command {
        Some(Commands::Init { force }) => {
            propal::cli::commands::init::run(cli.cwd.as_deref(), force).await
        }
        Some(Commands::Create { client, date }) => {
            propal::cli::commands::create::run(cli.cwd.as_deref(), &client, date.as_deref()).await
        }
        Some(Commands::List { json, state }) => {
            propal::cli::commands::list::run(cli.cwd.as_deref(), json, state.as_deref()).await
        }
        Some(Commands::Show { id, json }) => {
            propal::cli::commands::show::run(cli.cwd.as_deref(), &id, json).await
        }
        Some(Commands::Item {
            id,
            tarif,
            qtt,
            detail,
        }) => propal::cli::commands::item::run(cli.cwd.as_deref(), &id, &tarif, qtt, detail).await,
        Some(Commands::Advance { id, uncheck }) => {
            propal::cli::commands::advance::run(cli.cwd.as_deref(), &id, uncheck).await
        }
        Some(Commands::Notify { id }) => {
            propal::cli::commands::notify::run(cli.cwd.as_deref(), &id).await
        }
        Some(Commands::Delete { id }) => {
            propal::cli::commands::delete::run(cli.cwd.as_deref(), &id).await
        }
        Some(Commands::Clients { json }) => {
            propal::cli::commands::clients::run(cli.cwd.as_deref(), json).await
        }
        Some(Commands::Tarifs { json }) => {
            propal::cli::commands::tarifs::run(cli.cwd.as_deref(), json).await
        }
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
