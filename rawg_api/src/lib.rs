//! Client binding for the RAWG video game database API.
//!
//! Every endpoint resolves to an [`ApiResponse`], which separates a decoded
//! payload from API errors, network errors, and anything else. Only a body
//! that fails to decode surfaces as `Err`.

pub mod adapter;
pub mod catalog;
mod client;
mod errors;
pub mod json;
mod query;
mod response;
pub mod transport;
pub mod types;
pub use self::adapter::ApiResponseCall;
pub use self::client::{ApiResult, Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use self::errors::Error;
pub use self::json::{DecodeError, JsonMode};
pub use self::query::{
    GameSortBy, GamesQuery, OrderedQuery, PageQuery, Query, QueryCommon, QueryPair, SortDirection,
};
pub use self::response::{ApiResponse, BoxError};
pub use self::transport::TransportError;
