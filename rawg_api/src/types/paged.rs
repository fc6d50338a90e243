use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paged<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, if any.
    pub next: Option<String>,
    /// URL of the previous page, if any.
    pub previous: Option<String>,
    #[serde(default = "Vec::new", deserialize_with = "super::null_as_default")]
    pub results: Vec<T>,
}

impl<T> Paged<T> {
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: u64,
    }

    #[test]
    fn generic_results_decode() {
        let page: Paged<Item> =
            serde_json::from_str(r#"{"count": 2, "next": "https://api.rawg.io/api/tags?page=2", "results": [{"id": 1}, {"id": 2}]}"#)
                .unwrap();
        assert_eq!(page.results, vec![Item { id: 1 }, Item { id: 2 }]);
        assert!(page.has_next());
    }

    #[test]
    fn null_results_decode_as_empty() {
        let page: Paged<Item> = serde_json::from_str(r#"{"count": 0, "results": null}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.previous, None);
    }
}
