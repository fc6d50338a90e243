use anyhow::Result;
use clap::Args;
use rawg_api::{Client, OrderedQuery, Query, SortDirection};

use crate::commands::into_result;
use crate::output::{print_genres_table, print_json, OutputFormat};

#[derive(Args)]
pub struct GenresArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u32,

    /// Sort field (e.g. name, games_count)
    #[arg(long)]
    pub ordering: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,
}

pub async fn run(args: &GenresArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = OrderedQuery::default()
        .with_page(args.page)
        .with_page_size(args.page_size);
    if let Some(ordering) = &args.ordering {
        query = query.with_ordering(ordering);
    }
    if args.desc {
        query = query.with_sort_direction(SortDirection::Desc);
    }

    let page = into_result("list genres", client.list_genres(&query).await)?;

    eprintln!("{} total genres", page.count);

    match format {
        OutputFormat::Table => print_genres_table(&page.results),
        OutputFormat::Json => print_json(&page.results),
    }

    Ok(())
}
