//! Page categories.
//!
//! Every routed page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_tender--list"`) and a `data-page-category` attribute with one
//! of the constants below. The entity part matches the module directory, so
//! an id copied from the DOM inspector leads straight to the source.

/// Tender list with filters and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Account pages (profile, settings).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL, PAGE_CAT_SYSTEM];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_tender--list"));
        assert!(is_valid_page_id("profile--system"));
        assert!(!is_valid_page_id("a001_tender"));
        assert!(!is_valid_page_id("--detail"));
        assert!(!is_valid_page_id("a001_tender--dashboard"));
    }
}
