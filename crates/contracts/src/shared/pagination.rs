use serde::{Deserialize, Serialize};

/// Страница результатов списка.
///
/// `total_pages` и `total_items` приходят от сервера и всегда
/// перезаписывают локальные значения.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_items: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_totals_default_to_zero() {
        let page: PagedResponse<i32> = serde_json::from_str(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.total_items, 0);
    }

    #[test]
    fn test_empty_response() {
        let page: PagedResponse<i32> =
            serde_json::from_str(r#"{"items": [], "total_pages": 0, "total_items": 0}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!((page.total_pages, page.total_items), (0, 0));
    }
}
