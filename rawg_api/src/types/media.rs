//! Game-scoped media and community content.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Screenshot {
    pub id: u64,
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub is_deleted: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Achievement {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    /// Share of players who unlocked it, as the decimal string RAWG sends.
    pub percent: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Trailer {
    pub id: u64,
    pub name: String,
    pub preview: Option<String>,
    pub data: TrailerData,
}

/// Video URLs by quality.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TrailerData {
    #[serde(rename = "480")]
    pub low: Option<String>,
    pub max: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct RedditPost {
    pub id: u64,
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub url: String,
    pub username: String,
    pub username_url: String,
    pub created: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct TwitchStream {
    pub id: u64,
    pub external_id: u64,
    pub name: String,
    pub description: String,
    pub created: String,
    pub published: String,
    pub thumbnail: Option<String>,
    pub view_count: u64,
    pub language: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct YoutubeVideo {
    pub id: u64,
    pub external_id: String,
    pub channel_id: String,
    pub channel_title: String,
    pub name: String,
    pub description: String,
    pub created: String,
    pub view_count: u64,
    pub comments_count: u64,
    pub like_count: u64,
    pub dislike_count: u64,
    pub favorite_count: u64,
    /// Thumbnail URLs keyed by size, passed through untouched.
    pub thumbnails: serde_json::Value,
}
