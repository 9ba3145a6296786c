use serde::{Deserialize, Serialize};

/// Pagination block returned next to search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

/// `{ data, meta }` envelope of the search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_uses_camel_case() {
        let page: Paginated<u32> = serde_json::from_str(
            r#"{"data":[1,2],"meta":{"page":2,"limit":10,"total":12,"totalPages":2,"hasNext":false,"hasPrev":true}}"#,
        )
        .unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.meta.total_pages, 2);
        assert!(page.meta.has_prev);
        assert!(!page.meta.has_next);
    }
}
