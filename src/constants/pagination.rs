//! Pagination constants for paginated routes.

/// Default number of items per page when not specified in the request.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Default starting page number.
pub const DEFAULT_PAGE_NUMBER: u64 = 1;

/// Name of the route parameter carrying the page number.
pub const PAGE_PARAM: &str = "page";

/// Placeholder for the page number inside a route template.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Pattern the page parameter must match for a paged route to be selected.
pub const PAGE_CONSTRAINT: &str = "[0-9]+";

/// Page segment keyword used when no translation is available.
pub const DEFAULT_PAGE_KEYWORD: &str = "page";

/// Translation key holding the localized page segment keyword.
pub const PAGE_KEYWORD_KEY: &str = "paginateroute.page";
