use serde::{Deserialize, Serialize};

use super::{null_as_default, GameRef};

/// A person credited on games (`/api/creators`).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Creator {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub image_background: Option<String>,
    pub games_count: u64,
    pub description: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub positions: Vec<CreatorRole>,
    #[serde(deserialize_with = "null_as_default")]
    pub games: Vec<GameRef>,
}

/// A job a creator can hold, e.g. composer or writer.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CreatorRole {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// A creator credited on one game's development team.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DevelopmentTeamMember {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub image_background: Option<String>,
    pub games_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub positions: Vec<CreatorRole>,
}
