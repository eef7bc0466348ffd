//! Error message constants used throughout the application.

// Pagination errors
pub const ERR_MISSING_PAGE_SEGMENT: &str = "Route template does not contain a page segment";
pub const ERR_PAGE_NOT_BOUND: &str = "No page was bound for this route";

// Translation errors
pub const ERR_READ_CATALOG: &str = "Failed to read translation catalog";
pub const ERR_PARSE_CATALOG: &str = "Failed to parse translation catalog";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
