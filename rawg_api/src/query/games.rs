use std::str::FromStr;

use chrono::NaiveDate;

use super::common::{join_list, Query, QueryCommon, QueryPair};

/// Filters for the `/api/games` listing.
///
/// List filters are sent comma-joined. Developers, publishers, genres, tags
/// and creators accept either numeric ids or slugs.
#[derive(Clone, Debug, Default)]
pub struct GamesQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
    pub parent_platforms: Vec<u32>,
    pub platforms: Vec<u32>,
    pub stores: Vec<u32>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub creators: Vec<String>,
    pub dates: Vec<(NaiveDate, NaiveDate)>,
    pub platforms_count: Option<u32>,
    pub exclude_collection: Option<u32>,
    pub exclude_additions: Option<bool>,
    pub exclude_parents: Option<bool>,
    pub exclude_game_series: Option<bool>,
    pub sort_by: Option<GameSortBy>,
}

impl Query for GamesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn query_pairs(&self) -> Vec<QueryPair> {
        let mut pairs = self.common.query_pairs();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        let lists = [
            ("parent_platforms", join_list(&self.parent_platforms)),
            ("platforms", join_list(&self.platforms)),
            ("stores", join_list(&self.stores)),
            ("developers", join_list(&self.developers)),
            ("publishers", join_list(&self.publishers)),
            ("genres", join_list(&self.genres)),
            ("tags", join_list(&self.tags)),
            ("creators", join_list(&self.creators)),
        ];
        for (name, value) in lists {
            if let Some(value) = value {
                pairs.push((name, value));
            }
        }
        if !self.dates.is_empty() {
            let ranges = self
                .dates
                .iter()
                .map(|(from, to)| format!("{},{}", from.format("%Y-%m-%d"), to.format("%Y-%m-%d")))
                .collect::<Vec<_>>()
                .join(".");
            pairs.push(("dates", ranges));
        }
        if let Some(count) = self.platforms_count {
            pairs.push(("platforms_count", count.to_string()));
        }
        if let Some(collection) = self.exclude_collection {
            pairs.push(("exclude_collection", collection.to_string()));
        }
        if let Some(flag) = self.exclude_additions {
            pairs.push(("exclude_additions", flag.to_string()));
        }
        if let Some(flag) = self.exclude_parents {
            pairs.push(("exclude_parents", flag.to_string()));
        }
        if let Some(flag) = self.exclude_game_series {
            pairs.push(("exclude_game_series", flag.to_string()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push((
                "ordering",
                self.common.sort_direction.apply(&sort_by.to_string()),
            ));
        }
        pairs
    }
}

impl GamesQuery {
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }

    pub fn with_parent_platform(mut self, id: u32) -> Self {
        self.parent_platforms.push(id);
        self
    }
    pub fn with_parent_platforms(mut self, ids: &[u32]) -> Self {
        self.parent_platforms.extend_from_slice(ids);
        self
    }

    pub fn with_platform(mut self, id: u32) -> Self {
        self.platforms.push(id);
        self
    }
    pub fn with_platforms(mut self, ids: &[u32]) -> Self {
        self.platforms.extend_from_slice(ids);
        self
    }

    pub fn with_store(mut self, id: u32) -> Self {
        self.stores.push(id);
        self
    }
    pub fn with_stores(mut self, ids: &[u32]) -> Self {
        self.stores.extend_from_slice(ids);
        self
    }

    pub fn with_developer(mut self, developer: &str) -> Self {
        self.developers.push(developer.to_string());
        self
    }
    pub fn with_developers(mut self, developers: &[String]) -> Self {
        self.developers.extend_from_slice(developers);
        self
    }

    pub fn with_publisher(mut self, publisher: &str) -> Self {
        self.publishers.push(publisher.to_string());
        self
    }
    pub fn with_publishers(mut self, publishers: &[String]) -> Self {
        self.publishers.extend_from_slice(publishers);
        self
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        self.genres.push(genre.to_string());
        self
    }
    pub fn with_genres(mut self, genres: &[String]) -> Self {
        self.genres.extend_from_slice(genres);
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }
    pub fn with_tags(mut self, tags: &[String]) -> Self {
        self.tags.extend_from_slice(tags);
        self
    }

    pub fn with_creator(mut self, creator: &str) -> Self {
        self.creators.push(creator.to_string());
        self
    }
    pub fn with_creators(mut self, creators: &[String]) -> Self {
        self.creators.extend_from_slice(creators);
        self
    }

    /// Adds an inclusive release-date range. Several ranges are OR-ed by the server.
    pub fn with_release_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.dates.push((from, to));
        self
    }

    pub fn with_platforms_count(mut self, count: u32) -> Self {
        self.platforms_count = Some(count);
        self
    }

    pub fn with_exclude_collection(mut self, collection: u32) -> Self {
        self.exclude_collection = Some(collection);
        self
    }

    pub fn with_exclude_additions(mut self, exclude: bool) -> Self {
        self.exclude_additions = Some(exclude);
        self
    }

    pub fn with_exclude_parents(mut self, exclude: bool) -> Self {
        self.exclude_parents = Some(exclude);
        self
    }

    pub fn with_exclude_game_series(mut self, exclude: bool) -> Self {
        self.exclude_game_series = Some(exclude);
        self
    }

    pub fn with_sort_by(mut self, sort_by: GameSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// Fields the games listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameSortBy {
    Name,
    Released,
    Added,
    Created,
    Updated,
    Rating,
    Metacritic,
}

impl std::fmt::Display for GameSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                GameSortBy::Name => "name",
                GameSortBy::Released => "released",
                GameSortBy::Added => "added",
                GameSortBy::Created => "created",
                GameSortBy::Updated => "updated",
                GameSortBy::Rating => "rating",
                GameSortBy::Metacritic => "metacritic",
            }
        )
    }
}

impl FromStr for GameSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(GameSortBy::Name),
            "released" => Ok(GameSortBy::Released),
            "added" => Ok(GameSortBy::Added),
            "created" => Ok(GameSortBy::Created),
            "updated" => Ok(GameSortBy::Updated),
            "rating" => Ok(GameSortBy::Rating),
            "metacritic" => Ok(GameSortBy::Metacritic),
            _ => Err(()),
        }
    }
}
