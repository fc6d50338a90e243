use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use rawg_api::{Client, GameSortBy, GamesQuery, Query, SortDirection};

use crate::commands::{greet, into_result};
use crate::output::{print_games_table, print_json, OutputFormat};

#[derive(Args)]
pub struct GamesArgs {
    /// Search by name
    #[arg(long)]
    pub search: Option<String>,

    /// Filter by genre IDs or slugs, comma-separated (e.g. action,indie)
    #[arg(long)]
    pub genres: Option<String>,

    /// Filter by platform IDs, comma-separated (e.g. 4,187)
    #[arg(long)]
    pub platforms: Option<String>,

    /// Filter by release date range: YYYY-MM-DD,YYYY-MM-DD
    #[arg(long)]
    pub dates: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page
    #[arg(long, default_value = "20")]
    pub page_size: u32,

    /// Sort field: name, released, added, created, updated, rating, metacritic
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long)]
    pub desc: bool,

    /// Name shown on the greeting
    #[arg(long, default_value = "world")]
    pub name: String,
}

pub async fn run(args: &GamesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    let outcome = client.list_games(&query).await;

    let listed = into_result("list games", outcome).map(|page| {
        tracing::info!("Fetched {} of {} games", page.results.len(), page.count);
        if page.has_next() {
            eprintln!("Page {} ({} total games, more available)", args.page, page.count);
        } else {
            eprintln!("Page {} ({} total games)", args.page, page.count);
        }
        match format {
            OutputFormat::Table => print_games_table(&page.results),
            OutputFormat::Json => print_json(&page.results),
        }
    });

    greet::render(&args.name);
    listed
}

fn build_query(args: &GamesArgs) -> Result<GamesQuery> {
    let mut query = GamesQuery::default()
        .with_page(args.page)
        .with_page_size(args.page_size);

    if let Some(search) = &args.search {
        query = query.with_search(search);
    }
    if let Some(genres) = &args.genres {
        query = query.with_genres(&split_list(genres));
    }
    if let Some(platforms) = &args.platforms {
        query = query.with_platforms(&parse_ids(platforms)?);
    }
    if let Some(dates) = &args.dates {
        let (from, to) = parse_date_range(dates)?;
        query = query.with_release_dates(from, to);
    }
    if let Some(sort_by) = &args.sort_by {
        let field = sort_by
            .parse::<GameSortBy>()
            .map_err(|_| anyhow::anyhow!("Unknown sort field: {}", sort_by))?;
        query = query.with_sort_by(field);
    }
    if args.desc {
        query = query.with_sort_direction(SortDirection::Desc);
    }

    Ok(query)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_ids(value: &str) -> Result<Vec<u32>> {
    split_list(value)
        .iter()
        .map(|id| {
            id.parse::<u32>()
                .with_context(|| format!("Invalid platform ID: {}", id))
        })
        .collect()
}

fn parse_date_range(value: &str) -> Result<(NaiveDate, NaiveDate)> {
    let Some((from, to)) = value.split_once(',') else {
        bail!("Expected a date range as YYYY-MM-DD,YYYY-MM-DD, got {}", value);
    };
    let parse = |s: &str| {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid date: {}", s))
    };
    let (from, to) = (parse(from)?, parse(to)?);
    if from > to {
        bail!("Date range starts after it ends: {}", value);
    }
    Ok((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GamesArgs {
        GamesArgs {
            search: None,
            genres: None,
            platforms: None,
            dates: None,
            page: 1,
            page_size: 20,
            sort_by: None,
            desc: false,
            name: "world".into(),
        }
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("action, indie,,"), vec!["action", "indie"]);
    }

    #[test]
    fn test_parse_ids_rejects_slugs() {
        assert_eq!(parse_ids("4,187").unwrap(), vec![4, 187]);
        assert!(parse_ids("pc").is_err());
    }

    #[test]
    fn test_parse_date_range() {
        let (from, to) = parse_date_range("2010-01-01,2018-12-31").unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2018, 12, 31).unwrap());
        assert!(parse_date_range("2018-12-31,2010-01-01").is_err());
        assert!(parse_date_range("2010-01-01").is_err());
    }

    #[test]
    fn test_build_query_defaults() {
        let pairs = build_query(&args()).unwrap().query_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("page_size", "20".to_string())]
        );
    }

    #[test]
    fn test_build_query_filters() {
        let mut a = args();
        a.search = Some("zelda".into());
        a.genres = Some("action".into());
        a.sort_by = Some("rating".into());
        a.desc = true;
        let pairs = build_query(&a).unwrap().query_pairs();
        assert!(pairs.contains(&("search", "zelda".to_string())));
        assert!(pairs.contains(&("genres", "action".to_string())));
        assert_eq!(pairs.last(), Some(&("ordering", "-rating".to_string())));
    }

    #[test]
    fn test_build_query_rejects_unknown_sort() {
        let mut a = args();
        a.sort_by = Some("popularity".into());
        assert!(build_query(&a).is_err());
    }
}
