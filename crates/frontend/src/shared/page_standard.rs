//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab must declare:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a025_upd_document--detail"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a025_upd_document/` directory.

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Intentionally custom design — free-form, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_page_id() {
        assert!(is_valid_page_id("a025_upd_document--detail"));
        assert!(!is_valid_page_id("a025_upd_document"));
        assert!(!is_valid_page_id("--detail"));
        assert!(!is_valid_page_id("a025_upd_document--"));
    }
}
