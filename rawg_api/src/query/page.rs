//! Queries for endpoints that only take pagination, optionally with an ordering field.

use super::common::{Query, QueryCommon, QueryPair};

/// Pagination only (`page`, `page_size`).
#[derive(Clone, Debug, Default)]
pub struct PageQuery {
    pub common: QueryCommon,
}

impl PageQuery {
    /// A query with both pagination parameters set.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self::default().with_page(page).with_page_size(page_size)
    }
}

impl Query for PageQuery {
    fn query_pairs(&self) -> Vec<QueryPair> {
        self.common.query_pairs()
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

/// Pagination plus a free-form `ordering` field name.
#[derive(Clone, Debug, Default)]
pub struct OrderedQuery {
    pub common: QueryCommon,
    pub ordering: Option<String>,
}

impl OrderedQuery {
    /// Orders by `field`; combine with `with_sort_direction` to reverse.
    pub fn with_ordering(mut self, field: &str) -> Self {
        self.ordering = Some(field.to_string());
        self
    }
}

impl Query for OrderedQuery {
    fn query_pairs(&self) -> Vec<QueryPair> {
        let mut pairs = Vec::new();
        if let Some(ordering) = &self.ordering {
            pairs.push(("ordering", self.common.sort_direction.apply(ordering)));
        }
        pairs.extend(self.common.query_pairs());
        pairs
    }

    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}
