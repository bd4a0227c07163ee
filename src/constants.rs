// src/constants.rs
//
// Application-wide defaults. Configuration can override the list and tag
// values; the ellipsis threshold and the sentinel are fixed.

/// Rows shown per page on every list screen.
///
/// Used in: `application/paginator.rs`, `infrastructure/config.rs`
pub const ITEMS_PER_PAGE: usize = 10;

/// Pages shown on each side of the current page in the page-number strip.
///
/// Used in: `application/paginator.rs`, `infrastructure/config.rs`
pub const PAGE_DELTA: usize = 2;

/// Page counts at or below this value list every page without ellipsis.
///
/// Used in: `application/paginator.rs`
pub const ELLIPSIS_THRESHOLD: usize = 7;

/// Maximum length of a single skill tag, counted in characters.
///
/// Used in: `domain/tag.rs`, `infrastructure/config.rs`
pub const MAX_TAG_LENGTH: usize = 7;

/// Filter dropdown value meaning "no constraint".
///
/// Used in: `application/filter.rs`
pub const ALL_SENTINEL: &str = "All";

/// Marker rendered in place of skipped page ranges.
pub const ELLIPSIS: &str = "…";
