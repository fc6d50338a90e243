//! Catalog dimensions games are grouped by: genres, platforms, stores,
//! publishers, developers and tags.

use serde::{Deserialize, Serialize};

use super::{null_as_default, GameRef};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Genre {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub games_count: u64,
    pub image_background: Option<String>,
    /// HTML description. Only present on detail responses.
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub games: Vec<GameRef>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Platform {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub games_count: u64,
    pub image_background: Option<String>,
    pub image: Option<String>,
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub description: Option<String>,
}

/// A platform family, e.g. PlayStation for PS2 and PS4.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PlatformParent {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub platforms: Vec<Platform>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Store {
    pub id: u64,
    pub name: String,
    pub domain: Option<String>,
    pub slug: String,
    pub games_count: u64,
    pub image_background: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Publisher {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub games_count: u64,
    pub image_background: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Developer {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub games_count: u64,
    pub image_background: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tag {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// ISO 639-2 code, e.g. `eng`.
    pub language: String,
    pub games_count: u64,
    pub image_background: Option<String>,
    pub description: Option<String>,
}
