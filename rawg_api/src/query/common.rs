//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::str::FromStr;

/// A rendered query parameter. Names are fixed by the remote API.
pub type QueryPair = (&'static str, String);

/// Trait implemented by all query builders. Provides parameter rendering and
/// shared builder methods for pagination and sort direction. The rendered
/// pairs are handed to [`Endpoint::url`](crate::catalog::Endpoint::url).
///
/// Unset parameters are never rendered; the server applies its own defaults.
pub trait Query {
    /// Renders the parameters that are set, in the order the API documents them.
    fn query_pairs(&self) -> Vec<QueryPair>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_page_size(mut self, page_size: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_size = Some(page_size);
        self
    }

    /// Sets the sort direction applied to the ordering field, if any.
    fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort_direction = sort_direction;
        self
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the default.
    #[default]
    Asc,
    /// Descending order, rendered as a leading hyphen on the ordering field.
    Desc,
}

impl SortDirection {
    /// Renders `field` with this direction applied.
    pub fn apply(self, field: &str) -> String {
        match self {
            SortDirection::Asc => field.to_string(),
            SortDirection::Desc => format!("-{}", field),
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Fields shared by all query types: pagination and sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). `None` uses the API default.
    pub page: Option<u32>,
    /// Results per page. `None` uses the API default.
    pub page_size: Option<u32>,
    /// Direction applied to the ordering field.
    pub sort_direction: SortDirection,
}

impl QueryCommon {
    /// Renders the pagination parameters that are set.
    pub fn query_pairs(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("page_size", page_size.to_string()));
        }
        pairs
    }
}

/// Joins list values the way RAWG expects them: `4,5,6`.
pub(crate) fn join_list<T: ToString>(values: &[T]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    Some(
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}
