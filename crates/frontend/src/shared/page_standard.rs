//! Page category constants for page standardization.
//!
//! Every page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"artwork--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/artwork/` directory.

/// List of records — table with pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Intentionally custom design — free-form, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";

/// Categories where standard structure (`page__header` + `page__content`) is required.
pub const STANDARD_CATEGORIES: &[&str] = &[PAGE_CAT_LIST];
