mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rawg_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "rawg")]
#[command(about = "Browse the RAWG video game database")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// RAWG API key. Falls back to the RAWG_API_KEY environment variable
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Override the API origin
    #[arg(long, global = true, hide = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List games, then show the greeting
    Games(commands::games::GamesArgs),
    /// Show a single game by ID or slug
    Game(commands::game::GameArgs),
    /// List genres
    Genres(commands::genres::GenresArgs),
    /// Show the greeting without calling the API
    Greet(commands::greet::GreetArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("rawg=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    match &cli.command {
        Commands::Games(args) => commands::games::run(args, &build_client(&cli)?, &format).await?,
        Commands::Game(args) => commands::game::run(args, &build_client(&cli)?, &format).await?,
        Commands::Genres(args) => commands::genres::run(args, &build_client(&cli)?, &format).await?,
        Commands::Greet(args) => commands::greet::run(args),
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<Client> {
    let api_key = match &cli.api_key {
        Some(key) => key.clone(),
        None => std::env::var("RAWG_API_KEY")
            .context("No API key: pass --api-key or set RAWG_API_KEY")?,
    };

    let mut builder = Client::builder().api_key(api_key);
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    Ok(builder.build()?)
}
