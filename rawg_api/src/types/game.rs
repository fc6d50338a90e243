//! Game records: the listing shape, the detail shape, and their nested parts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{null_as_default, Developer, Genre, Publisher, Tag};

/// A game as it appears in listings (`/api/games`, additions, series, ...).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Game {
    pub id: u64,
    pub slug: String,
    pub name: String,
    /// Release date. `None` for unreleased or undated games.
    pub released: Option<NaiveDate>,
    /// "To be announced": no release date has been published.
    pub tba: bool,
    pub background_image: Option<String>,
    pub rating: f64,
    pub rating_top: u32,
    pub ratings_count: u64,
    pub reviews_text_count: u64,
    /// Number of users who added the game to a library.
    pub added: u64,
    pub metacritic: Option<u32>,
    /// Average hours played.
    pub playtime: u32,
    pub suggestions_count: u64,
    pub updated: Option<String>,
    pub esrb_rating: Option<EsrbRating>,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<GamePlatform>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
}

/// Full game record returned by `/api/games/{id}`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameSingle {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub name_original: String,
    /// HTML description.
    pub description: String,
    pub metacritic: Option<u32>,
    pub released: Option<NaiveDate>,
    pub tba: bool,
    pub updated: Option<String>,
    pub background_image: Option<String>,
    pub background_image_additional: Option<String>,
    pub website: Option<String>,
    pub rating: f64,
    pub rating_top: u32,
    pub added: u64,
    pub playtime: u32,
    pub screenshots_count: u64,
    pub movies_count: u64,
    pub creators_count: u64,
    pub achievements_count: u64,
    pub parent_achievements_count: u64,
    pub reddit_url: Option<String>,
    pub reddit_name: Option<String>,
    pub reddit_description: Option<String>,
    pub reddit_logo: Option<String>,
    pub reddit_count: u64,
    pub twitch_count: u64,
    pub youtube_count: u64,
    pub reviews_text_count: u64,
    pub ratings_count: u64,
    pub suggestions_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub alternative_names: Vec<String>,
    pub metacritic_url: Option<String>,
    pub parents_count: u64,
    pub additions_count: u64,
    pub game_series_count: u64,
    pub esrb_rating: Option<EsrbRating>,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<GamePlatform>,
    #[serde(deserialize_with = "null_as_default")]
    pub genres: Vec<Genre>,
    #[serde(deserialize_with = "null_as_default")]
    pub developers: Vec<Developer>,
    #[serde(deserialize_with = "null_as_default")]
    pub publishers: Vec<Publisher>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

/// Abbreviated game reference embedded in genre, tag and creator records.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameRef {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub added: u64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EsrbRating {
    pub id: u64,
    pub slug: String,
    pub name: String,
}

/// A platform a game ships on, with platform-specific release data.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GamePlatform {
    pub platform: PlatformRef,
    pub released_at: Option<String>,
    pub requirements: Option<Requirements>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlatformRef {
    pub id: u64,
    pub slug: String,
    pub name: String,
}

/// PC system requirements, as free text.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Requirements {
    pub minimum: Option<String>,
    pub recommended: Option<String>,
}

/// A storefront link for a game (`/api/games/{game_pk}/stores`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GameStoreLink {
    pub id: u64,
    pub game_id: u64,
    pub store_id: u64,
    pub url: String,
}
