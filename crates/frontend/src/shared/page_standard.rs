//! Page category constants.
//!
//! Every module page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_inventory--list"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Interactive work surface (point of sale).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Settings and service pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_inventory--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("inventory"));
        assert!(!is_valid_page_id("--list"));
    }
}
