use anyhow::Result;
use clap::Args;
use rawg_api::Client;

use crate::commands::into_result;
use crate::output::{print_game_detail, print_json, OutputFormat};

#[derive(Args)]
pub struct GameArgs {
    /// Game ID or slug (e.g. 3498 or grand-theft-auto-v)
    pub id: String,
}

pub async fn run(args: &GameArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let game = into_result("get game", client.get_game(&args.id).await)?;

    match format {
        OutputFormat::Table => print_game_detail(&game),
        OutputFormat::Json => print_json(&game),
    }

    Ok(())
}
