use rawg_api::types::{Game, GameSingle, Genre};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled, Serialize)]
struct GameRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Released")]
    #[serde(rename = "Released")]
    released: String,
    #[tabled(rename = "Rating")]
    #[serde(rename = "Rating")]
    rating: String,
    #[tabled(rename = "Metacritic")]
    #[serde(rename = "Metacritic")]
    metacritic: String,
    #[tabled(rename = "Platforms")]
    #[serde(rename = "Platforms")]
    platforms: String,
    #[tabled(rename = "Genres")]
    #[serde(rename = "Genres")]
    genres: String,
}

#[derive(Tabled, Serialize)]
struct GenreRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Slug")]
    #[serde(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Games")]
    #[serde(rename = "Games")]
    games_count: u64,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Row builders --

fn build_game_rows(games: &[Game]) -> Vec<GameRow> {
    games
        .iter()
        .map(|g| GameRow {
            id: g.id,
            name: g.name.clone(),
            released: format_release(g.released, g.tba),
            rating: format_rating(g.rating, g.rating_top),
            metacritic: g.metacritic.map(|m| m.to_string()).unwrap_or_else(|| "-".into()),
            platforms: g
                .platforms
                .iter()
                .map(|p| p.platform.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            genres: g
                .genres
                .iter()
                .map(|genre| genre.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

fn build_genre_rows(genres: &[Genre]) -> Vec<GenreRow> {
    genres
        .iter()
        .map(|g| GenreRow {
            id: g.id,
            name: g.name.clone(),
            slug: g.slug.clone(),
            games_count: g.games_count,
        })
        .collect()
}

fn build_detail_rows(game: &GameSingle) -> Vec<FieldRow> {
    let join = |names: Vec<&str>| names.join(", ");
    vec![
        FieldRow {
            field: "Name",
            value: game.name.clone(),
        },
        FieldRow {
            field: "Released",
            value: format_release(game.released, game.tba),
        },
        FieldRow {
            field: "Rating",
            value: format_rating(game.rating, game.rating_top),
        },
        FieldRow {
            field: "Metacritic",
            value: game
                .metacritic
                .map(|m| m.to_string())
                .unwrap_or_else(|| "-".into()),
        },
        FieldRow {
            field: "Playtime",
            value: format!("{}h", game.playtime),
        },
        FieldRow {
            field: "Developers",
            value: join(game.developers.iter().map(|d| d.name.as_str()).collect()),
        },
        FieldRow {
            field: "Publishers",
            value: join(game.publishers.iter().map(|p| p.name.as_str()).collect()),
        },
        FieldRow {
            field: "Platforms",
            value: join(
                game.platforms
                    .iter()
                    .map(|p| p.platform.name.as_str())
                    .collect(),
            ),
        },
        FieldRow {
            field: "Website",
            value: game.website.clone().unwrap_or_default(),
        },
    ]
}

// -- Table output --

pub fn print_games_table(games: &[Game]) {
    println!("{}", Table::new(build_game_rows(games)));
}

pub fn print_genres_table(genres: &[Genre]) {
    println!("{}", Table::new(build_genre_rows(genres)));
}

pub fn print_game_detail(game: &GameSingle) {
    let mut table = Table::new(build_detail_rows(game));
    table.with(Style::rounded());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_release(released: Option<chrono::NaiveDate>, tba: bool) -> String {
    match released {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None if tba => "TBA".to_string(),
        None => "-".to_string(),
    }
}

fn format_rating(rating: f64, top: u32) -> String {
    if top == 0 {
        "-".to_string()
    } else {
        format!("{:.2}/{}", rating, top)
    }
}
