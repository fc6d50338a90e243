mod paged;
pub use self::paged::Paged;

mod game;
pub use self::game::{
    EsrbRating, Game, GamePlatform, GameRef, GameSingle, GameStoreLink, PlatformRef, Requirements,
};

mod taxonomy;
pub use self::taxonomy::{Developer, Genre, Platform, PlatformParent, Publisher, Store, Tag};

mod creator;
pub use self::creator::{Creator, CreatorRole, DevelopmentTeamMember};

mod media;
pub use self::media::{
    Achievement, RedditPost, Screenshot, Trailer, TrailerData, TwitchStream, YoutubeVideo,
};

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
