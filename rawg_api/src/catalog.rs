//! Static descriptors for every RAWG operation this crate exposes.
//!
//! Each [`Endpoint`] is plain data: a path template with `{placeholder}`
//! segments, the query parameters the operation accepts, and the shape of
//! its payload. [`Endpoint::url`] is the only behavior: it fills in the
//! template and appends the parameters a caller actually set.

use url::Url;

use crate::query::QueryPair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
        }
    }
}

/// How a parameter value is rendered on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Integer,
    String,
    /// Several values joined with commas, e.g. `4,5`.
    CommaList,
    /// `true` or `false`.
    Boolean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
}

impl Param {
    pub const fn optional(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    pub const fn required(name: &'static str, kind: ParamKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }
}

/// What an endpoint's 2xx body decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// A single record.
    Entity,
    /// A [`Paged`](crate::types::Paged) envelope of records.
    Paged,
    /// A bare JSON array of records.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path below the API origin, e.g. `/api/games/{id}`.
    pub path: &'static str,
    pub params: &'static [Param],
    pub shape: ResponseShape,
}

impl Endpoint {
    /// Names of the `{placeholder}` segments, in template order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        self.path
            .split('/')
            .filter_map(|segment| segment.strip_prefix('{')?.strip_suffix('}'))
            .collect()
    }

    pub fn param(&self, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Rejects path arguments that would not address a single segment:
    /// empty values and the dot segments `.` and `..`.
    pub fn check_path_args(&self, path_args: &[&str]) -> Result<(), String> {
        match path_args
            .iter()
            .find(|arg| matches!(**arg, "" | "." | ".."))
        {
            Some(arg) => Err(format!("{}: invalid path argument {:?}", self.name, arg)),
            None => Ok(()),
        }
    }

    /// Builds the request URL below `base`.
    ///
    /// `path_args` fill the placeholders in order and are taken literally:
    /// `%`, `/` and `\` are escaped so an argument stays within its segment.
    /// Use [`check_path_args`](Self::check_path_args) first to refuse dot
    /// segments. Only parameters this endpoint declares are appended, in
    /// the order given.
    pub fn url(&self, base: &Url, path_args: &[&str], query: &[QueryPair]) -> Url {
        let mut path = base.path().trim_end_matches('/').to_string();
        let mut args = path_args.iter();
        for segment in self.path.split('/').filter(|s| !s.is_empty()) {
            path.push('/');
            if segment.starts_with('{') && segment.ends_with('}') {
                match args.next() {
                    Some(arg) => path.push_str(&escape_segment(arg)),
                    None => tracing::warn!("{}: no value for {}", self.name, segment),
                }
            } else {
                path.push_str(segment);
            }
        }
        if args.next().is_some() {
            tracing::warn!("{}: ignoring surplus path arguments", self.name);
        }

        let mut url = base.clone();
        url.set_path(&path);
        url.set_query(None);
        url.set_fragment(None);

        let accepted: Vec<&QueryPair> = query
            .iter()
            .filter(|(name, _)| {
                let declared = self.param(name).is_some();
                if !declared {
                    tracing::warn!("{}: dropping undeclared parameter {}", self.name, name);
                }
                declared
            })
            .collect();
        for param in self.params.iter().filter(|p| p.required) {
            if !accepted.iter().any(|(name, _)| *name == param.name) {
                tracing::warn!("{}: missing required parameter {}", self.name, param.name);
            }
        }
        if !accepted.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (name, value) in accepted {
                serializer.append_pair(name, value);
            }
        }
        url
    }
}

fn escape_segment(arg: &str) -> String {
    arg.replace('%', "%25")
        .replace('/', "%2F")
        .replace('\\', "%5C")
}

const PAGE: Param = Param::optional("page", ParamKind::Integer);
const PAGE_SIZE: Param = Param::optional("page_size", ParamKind::Integer);
const ORDERING: Param = Param::optional("ordering", ParamKind::String);

const NO_PARAMS: &[Param] = &[];
const PAGINATION: &[Param] = &[PAGE, PAGE_SIZE];
const ORDERED_PAGINATION: &[Param] = &[ORDERING, PAGE, PAGE_SIZE];
const REQUIRED_PAGINATION: &[Param] = &[
    Param::required("page", ParamKind::Integer),
    Param::required("page_size", ParamKind::Integer),
];

const GAMES_FILTERS: &[Param] = &[
    PAGE,
    PAGE_SIZE,
    Param::optional("search", ParamKind::String),
    Param::optional("parent_platforms", ParamKind::CommaList),
    Param::optional("platforms", ParamKind::CommaList),
    Param::optional("stores", ParamKind::CommaList),
    Param::optional("developers", ParamKind::CommaList),
    Param::optional("publishers", ParamKind::CommaList),
    Param::optional("genres", ParamKind::CommaList),
    Param::optional("tags", ParamKind::CommaList),
    Param::optional("creators", ParamKind::CommaList),
    Param::optional("dates", ParamKind::String),
    Param::optional("platforms_count", ParamKind::Integer),
    Param::optional("exclude_collection", ParamKind::Integer),
    Param::optional("exclude_additions", ParamKind::Boolean),
    Param::optional("exclude_parents", ParamKind::Boolean),
    Param::optional("exclude_game_series", ParamKind::Boolean),
    ORDERING,
];

const fn get(
    name: &'static str,
    path: &'static str,
    params: &'static [Param],
    shape: ResponseShape,
) -> Endpoint {
    Endpoint {
        name,
        method: HttpMethod::Get,
        path,
        params,
        shape,
    }
}

// Creators
pub const LIST_CREATOR_ROLES: Endpoint =
    get("list_creator_roles", "/api/creator-roles", PAGINATION, ResponseShape::Paged);
pub const LIST_CREATORS: Endpoint =
    get("list_creators", "/api/creators", PAGINATION, ResponseShape::Paged);
pub const GET_CREATOR: Endpoint =
    get("get_creator", "/api/creators/{id}", NO_PARAMS, ResponseShape::Entity);

// Developers
pub const LIST_DEVELOPERS: Endpoint = get(
    "list_developers",
    "/api/developers",
    REQUIRED_PAGINATION,
    ResponseShape::Paged,
);
pub const GET_DEVELOPER: Endpoint =
    get("get_developer", "/api/developers/{id}", NO_PARAMS, ResponseShape::Entity);

// Games
pub const LIST_GAMES: Endpoint =
    get("list_games", "/api/games", GAMES_FILTERS, ResponseShape::Paged);
pub const LIST_GAMES_SITEMAP: Endpoint = get(
    "list_games_sitemap",
    "/api/games/sitemap",
    REQUIRED_PAGINATION,
    ResponseShape::Paged,
);
pub const LIST_GAME_ADDITIONS: Endpoint = get(
    "list_game_additions",
    "/api/games/{game_pk}/additions",
    REQUIRED_PAGINATION,
    ResponseShape::Paged,
);
pub const LIST_GAME_DEVELOPMENT_TEAM: Endpoint = get(
    "list_game_development_team",
    "/api/games/{game_pk}/development-team",
    ORDERED_PAGINATION,
    ResponseShape::Paged,
);
pub const LIST_GAME_SERIES: Endpoint = get(
    "list_game_series",
    "/api/games/{game_pk}/game-series",
    PAGINATION,
    ResponseShape::Paged,
);
pub const LIST_PARENT_GAMES: Endpoint = get(
    "list_parent_games",
    "/api/games/{game_pk}/parent-games",
    PAGINATION,
    ResponseShape::Paged,
);
pub const LIST_GAME_SCREENSHOTS: Endpoint = get(
    "list_game_screenshots",
    "/api/games/{game_pk}/screenshots",
    ORDERED_PAGINATION,
    ResponseShape::Paged,
);
pub const LIST_GAME_STORES: Endpoint = get(
    "list_game_stores",
    "/api/games/{game_pk}/stores",
    ORDERED_PAGINATION,
    ResponseShape::Paged,
);
pub const GET_GAME: Endpoint =
    get("get_game", "/api/games/{id}", NO_PARAMS, ResponseShape::Entity);
pub const LIST_GAME_ACHIEVEMENTS: Endpoint = get(
    "list_game_achievements",
    "/api/games/{id}/achievements",
    NO_PARAMS,
    ResponseShape::List,
);
pub const LIST_GAME_TRAILERS: Endpoint = get(
    "list_game_trailers",
    "/api/games/{id}/movies",
    NO_PARAMS,
    ResponseShape::Paged,
);
pub const LIST_GAME_REDDIT_POSTS: Endpoint = get(
    "list_game_reddit_posts",
    "/api/games/{id}/reddit",
    NO_PARAMS,
    ResponseShape::Paged,
);
pub const LIST_SUGGESTED_GAMES: Endpoint = get(
    "list_suggested_games",
    "/api/games/{id}/suggested",
    NO_PARAMS,
    ResponseShape::Paged,
);
pub const LIST_GAME_TWITCH_STREAMS: Endpoint = get(
    "list_game_twitch_streams",
    "/api/games/{id}/twitch",
    NO_PARAMS,
    ResponseShape::Paged,
);
pub const LIST_GAME_YOUTUBE_VIDEOS: Endpoint = get(
    "list_game_youtube_videos",
    "/api/games/{id}/youtube",
    NO_PARAMS,
    ResponseShape::Paged,
);

// Genres
pub const LIST_GENRES: Endpoint =
    get("list_genres", "/api/genres", ORDERED_PAGINATION, ResponseShape::Paged);
pub const GET_GENRE: Endpoint =
    get("get_genre", "/api/genres/{id}", NO_PARAMS, ResponseShape::Entity);

// Platforms
pub const LIST_PLATFORMS: Endpoint =
    get("list_platforms", "/api/platforms", ORDERED_PAGINATION, ResponseShape::Paged);
pub const LIST_PARENT_PLATFORMS: Endpoint = get(
    "list_parent_platforms",
    "/api/platforms/lists/parents",
    ORDERED_PAGINATION,
    ResponseShape::Paged,
);
pub const GET_PLATFORM: Endpoint =
    get("get_platform", "/api/platforms/{id}", NO_PARAMS, ResponseShape::Entity);

// Publishers
pub const LIST_PUBLISHERS: Endpoint =
    get("list_publishers", "/api/publishers", PAGINATION, ResponseShape::Paged);
pub const GET_PUBLISHER: Endpoint =
    get("get_publisher", "/api/publishers/{id}", NO_PARAMS, ResponseShape::Entity);

// Stores
pub const LIST_STORES: Endpoint =
    get("list_stores", "/api/stores", ORDERED_PAGINATION, ResponseShape::Paged);
pub const GET_STORE: Endpoint =
    get("get_store", "/api/stores/{id}", NO_PARAMS, ResponseShape::Entity);

// Tags
pub const LIST_TAGS: Endpoint = get("list_tags", "/api/tags", PAGINATION, ResponseShape::Paged);
pub const GET_TAG: Endpoint = get("get_tag", "/api/tags/{id}", NO_PARAMS, ResponseShape::Entity);

/// Every endpoint, in the order above.
pub const ENDPOINTS: &[&Endpoint] = &[
    &LIST_CREATOR_ROLES,
    &LIST_CREATORS,
    &GET_CREATOR,
    &LIST_DEVELOPERS,
    &GET_DEVELOPER,
    &LIST_GAMES,
    &LIST_GAMES_SITEMAP,
    &LIST_GAME_ADDITIONS,
    &LIST_GAME_DEVELOPMENT_TEAM,
    &LIST_GAME_SERIES,
    &LIST_PARENT_GAMES,
    &LIST_GAME_SCREENSHOTS,
    &LIST_GAME_STORES,
    &GET_GAME,
    &LIST_GAME_ACHIEVEMENTS,
    &LIST_GAME_TRAILERS,
    &LIST_GAME_REDDIT_POSTS,
    &LIST_SUGGESTED_GAMES,
    &LIST_GAME_TWITCH_STREAMS,
    &LIST_GAME_YOUTUBE_VIDEOS,
    &LIST_GENRES,
    &GET_GENRE,
    &LIST_PLATFORMS,
    &LIST_PARENT_PLATFORMS,
    &GET_PLATFORM,
    &LIST_PUBLISHERS,
    &GET_PUBLISHER,
    &LIST_STORES,
    &GET_STORE,
    &LIST_TAGS,
    &GET_TAG,
];
