//! HTTP client for the RAWG video game database API.

use std::{fmt, sync::Arc, time::Duration};

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    adapter::ApiResponseCall,
    catalog::{self, Endpoint},
    json::{DecodeError, JsonMode},
    query::{GamesQuery, OrderedQuery, PageQuery, Query, QueryPair},
    transport::{ApiKeyInterceptor, Call, CallFactory, HttpTransport, RejectedCall, Request},
    types::{
        Achievement, Creator, CreatorRole, Developer, DevelopmentTeamMember, Game, GameSingle,
        GameStoreLink, Genre, Paged, Platform, PlatformParent, Publisher, RedditPost, Screenshot,
        Store, Tag, Trailer, TwitchStream, YoutubeVideo,
    },
    ApiResponse, Error,
};

/// Production API origin.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io";

/// Request timeout applied by the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// What every endpoint method resolves to.
pub type ApiResult<T> = Result<ApiResponse<T>, DecodeError>;

/// HTTP client for the RAWG API.
///
/// Holds one shared transport, so clones are cheap and share a connection
/// pool. The API key is appended to every request by an interceptor
/// installed at construction time.
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    transport: Arc<dyn CallFactory>,
    json_mode: JsonMode,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

/// Configuration for a [`Client`].
#[derive(Clone)]
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    json_mode: JsonMode,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            json_mode: JsonMode::default(),
        }
    }
}

impl ClientBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API origin. Used for testing with wiremock.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn json_mode(mut self, json_mode: JsonMode) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(Error::MissingApiKey)?;
        let base_url = parse_base_url(&self.base_url)?;

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::HttpClient(e)
            })?;
        let transport = HttpTransport::new(http).with_interceptor(ApiKeyInterceptor::new(api_key));

        Ok(Client {
            base_url,
            transport: Arc::new(transport),
            json_mode: self.json_mode,
        })
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, Error> {
    let url = Url::parse(base_url).map_err(|e| {
        tracing::error!("Invalid base URL {}: {}", base_url, e);
        Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        }
    })?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "expected an http(s) origin".to_string(),
        });
    }
    Ok(url)
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Creates a client for the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::builder().api_key(api_key).build()
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    /// Creates a client on top of an arbitrary transport. The transport is
    /// responsible for any credential injection.
    pub fn with_transport(
        base_url: &str,
        transport: Arc<dyn CallFactory>,
        json_mode: JsonMode,
    ) -> Result<Self, Error> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            transport,
            json_mode,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Prepares a call to `endpoint` without running it, for callers that
    /// want to cancel, clone or enqueue it.
    pub fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        query: &[QueryPair],
    ) -> ApiResponseCall<T> {
        let url = endpoint.url(&self.base_url, path_args, query);
        let request = Request {
            method: endpoint.method.as_reqwest(),
            url,
        };
        let call: Box<dyn Call> = match endpoint.check_path_args(path_args) {
            Ok(()) => self.transport.new_call(request),
            Err(reason) => {
                tracing::warn!("{}", reason);
                Box::new(RejectedCall::new(request, reason))
            }
        };
        ApiResponseCall::new(call, self.json_mode.decoder::<T>())
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        path_args: &[&str],
        query: &[QueryPair],
    ) -> ApiResult<T> {
        self.call::<T>(endpoint, path_args, query).execute().await
    }

    /// Lists creator positions (jobs).
    pub async fn list_creator_roles(&self, query: &PageQuery) -> ApiResult<Paged<CreatorRole>> {
        self.get(&catalog::LIST_CREATOR_ROLES, &[], &query.query_pairs())
            .await
    }

    /// Lists game creators.
    pub async fn list_creators(&self, query: &PageQuery) -> ApiResult<Paged<Creator>> {
        self.get(&catalog::LIST_CREATORS, &[], &query.query_pairs())
            .await
    }

    /// Fetches a creator by id or slug.
    pub async fn get_creator(&self, id: &str) -> ApiResult<Creator> {
        self.get(&catalog::GET_CREATOR, &[id], &[]).await
    }

    /// Lists game developers. Both pagination parameters are mandatory here.
    pub async fn list_developers(&self, page: u32, page_size: u32) -> ApiResult<Paged<Developer>> {
        let query = PageQuery::new(page, page_size);
        self.get(&catalog::LIST_DEVELOPERS, &[], &query.query_pairs())
            .await
    }

    /// Fetches a developer by id or slug.
    pub async fn get_developer(&self, id: &str) -> ApiResult<Developer> {
        self.get(&catalog::GET_DEVELOPER, &[id], &[]).await
    }

    /// Lists games matching the given filters.
    pub async fn list_games(&self, query: &GamesQuery) -> ApiResult<Paged<Game>> {
        self.get(&catalog::LIST_GAMES, &[], &query.query_pairs())
            .await
    }

    /// Lists games for the sitemap.
    pub async fn list_games_sitemap(
        &self,
        page: u32,
        page_size: u32,
    ) -> ApiResult<Paged<GameSingle>> {
        let query = PageQuery::new(page, page_size);
        self.get(&catalog::LIST_GAMES_SITEMAP, &[], &query.query_pairs())
            .await
    }

    /// Lists DLCs, GOTY and other editions, companion apps, etc. of a game.
    pub async fn list_game_additions(
        &self,
        game_pk: &str,
        page: u32,
        page_size: u32,
    ) -> ApiResult<Paged<Game>> {
        let query = PageQuery::new(page, page_size);
        self.get(&catalog::LIST_GAME_ADDITIONS, &[game_pk], &query.query_pairs())
            .await
    }

    /// Lists the individual creators that were part of a game's development team.
    pub async fn list_game_development_team(
        &self,
        game_pk: &str,
        query: &OrderedQuery,
    ) -> ApiResult<Paged<DevelopmentTeamMember>> {
        self.get(
            &catalog::LIST_GAME_DEVELOPMENT_TEAM,
            &[game_pk],
            &query.query_pairs(),
        )
        .await
    }

    /// Lists games that are part of the same series.
    pub async fn list_game_series(&self, game_pk: &str, query: &PageQuery) -> ApiResult<Paged<Game>> {
        self.get(&catalog::LIST_GAME_SERIES, &[game_pk], &query.query_pairs())
            .await
    }

    /// Lists parent games for DLCs and editions.
    pub async fn list_parent_games(
        &self,
        game_pk: &str,
        query: &PageQuery,
    ) -> ApiResult<Paged<Game>> {
        self.get(&catalog::LIST_PARENT_GAMES, &[game_pk], &query.query_pairs())
            .await
    }

    pub async fn list_game_screenshots(
        &self,
        game_pk: &str,
        query: &OrderedQuery,
    ) -> ApiResult<Paged<Screenshot>> {
        self.get(&catalog::LIST_GAME_SCREENSHOTS, &[game_pk], &query.query_pairs())
            .await
    }

    /// Lists links to the stores that sell a game.
    pub async fn list_game_stores(
        &self,
        game_pk: &str,
        query: &OrderedQuery,
    ) -> ApiResult<Paged<GameStoreLink>> {
        self.get(&catalog::LIST_GAME_STORES, &[game_pk], &query.query_pairs())
            .await
    }

    /// Fetches the full record of a game by id or slug.
    pub async fn get_game(&self, id: &str) -> ApiResult<GameSingle> {
        self.get(&catalog::GET_GAME, &[id], &[]).await
    }

    pub async fn list_game_achievements(&self, id: &str) -> ApiResult<Vec<Achievement>> {
        self.get(&catalog::LIST_GAME_ACHIEVEMENTS, &[id], &[]).await
    }

    pub async fn list_game_trailers(&self, id: &str) -> ApiResult<Paged<Trailer>> {
        self.get(&catalog::LIST_GAME_TRAILERS, &[id], &[]).await
    }

    /// Lists the most recent posts from a game's subreddit.
    pub async fn list_game_reddit_posts(&self, id: &str) -> ApiResult<Paged<RedditPost>> {
        self.get(&catalog::LIST_GAME_REDDIT_POSTS, &[id], &[]).await
    }

    /// Lists visually similar games.
    pub async fn list_suggested_games(&self, id: &str) -> ApiResult<Paged<GameSingle>> {
        self.get(&catalog::LIST_SUGGESTED_GAMES, &[id], &[]).await
    }

    pub async fn list_game_twitch_streams(&self, id: &str) -> ApiResult<Paged<TwitchStream>> {
        self.get(&catalog::LIST_GAME_TWITCH_STREAMS, &[id], &[]).await
    }

    pub async fn list_game_youtube_videos(&self, id: &str) -> ApiResult<Paged<YoutubeVideo>> {
        self.get(&catalog::LIST_GAME_YOUTUBE_VIDEOS, &[id], &[]).await
    }

    pub async fn list_genres(&self, query: &OrderedQuery) -> ApiResult<Paged<Genre>> {
        self.get(&catalog::LIST_GENRES, &[], &query.query_pairs())
            .await
    }

    pub async fn get_genre(&self, id: u64) -> ApiResult<Genre> {
        self.get(&catalog::GET_GENRE, &[id.to_string().as_str()], &[]).await
    }

    pub async fn list_platforms(&self, query: &OrderedQuery) -> ApiResult<Paged<Platform>> {
        self.get(&catalog::LIST_PLATFORMS, &[], &query.query_pairs())
            .await
    }

    /// Lists parent platforms, e.g. PlayStation for PS2 and PS4.
    pub async fn list_parent_platforms(
        &self,
        query: &OrderedQuery,
    ) -> ApiResult<Paged<PlatformParent>> {
        self.get(&catalog::LIST_PARENT_PLATFORMS, &[], &query.query_pairs())
            .await
    }

    pub async fn get_platform(&self, id: u64) -> ApiResult<Platform> {
        self.get(&catalog::GET_PLATFORM, &[id.to_string().as_str()], &[]).await
    }

    pub async fn list_publishers(&self, query: &PageQuery) -> ApiResult<Paged<Publisher>> {
        self.get(&catalog::LIST_PUBLISHERS, &[], &query.query_pairs())
            .await
    }

    pub async fn get_publisher(&self, id: u64) -> ApiResult<Publisher> {
        self.get(&catalog::GET_PUBLISHER, &[id.to_string().as_str()], &[]).await
    }

    /// Lists video game storefronts.
    pub async fn list_stores(&self, query: &OrderedQuery) -> ApiResult<Paged<Store>> {
        self.get(&catalog::LIST_STORES, &[], &query.query_pairs())
            .await
    }

    pub async fn get_store(&self, id: u64) -> ApiResult<Store> {
        self.get(&catalog::GET_STORE, &[id.to_string().as_str()], &[]).await
    }

    pub async fn list_tags(&self, query: &PageQuery) -> ApiResult<Paged<Tag>> {
        self.get(&catalog::LIST_TAGS, &[], &query.query_pairs())
            .await
    }

    pub async fn get_tag(&self, id: u64) -> ApiResult<Tag> {
        self.get(&catalog::GET_TAG, &[id.to_string().as_str()], &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_api_key() {
        assert!(matches!(
            Client::builder().build(),
            Err(Error::MissingApiKey)
        ));
        assert!(matches!(Client::new("  "), Err(Error::MissingApiKey)));
    }

    #[test]
    fn builder_rejects_non_http_base() {
        for base in ["not a url", "mailto:someone@example.com", "ftp://example.com"] {
            assert!(
                matches!(
                    Client::with_base_url(base, "key"),
                    Err(Error::InvalidBaseUrl { .. })
                ),
                "{}",
                base
            );
        }
    }

    #[test]
    fn defaults_to_production_origin() {
        let client = Client::new("key").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.rawg.io/");
    }

    #[test]
    fn debug_output_omits_key() {
        let client = Client::new("very-secret").unwrap();
        assert!(!format!("{:?}", client).contains("very-secret"));
    }

    #[test]
    fn call_builds_request_without_key() {
        let client = Client::new("key").unwrap();
        let call = client.call::<Paged<Game>>(
            &catalog::LIST_GAMES,
            &[],
            &GamesQuery::default().with_search("zelda").query_pairs(),
        );
        assert_eq!(call.request().url.path(), "/api/games");
        assert_eq!(call.request().url.query(), Some("search=zelda"));
        assert!(!call.is_executed());
    }
}
