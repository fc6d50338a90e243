mod common;
pub use self::common::{Query, QueryCommon, QueryPair, SortDirection};

mod page;
pub use self::page::{OrderedQuery, PageQuery};

mod games;
pub use self::games::{GameSortBy, GamesQuery};
