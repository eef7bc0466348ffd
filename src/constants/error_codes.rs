//! Error code constants for API responses.
//!
//! These codes provide a machine-readable identifier for each error type,
//! making it easier for API clients to handle errors programmatically.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";

// Pagination errors
pub const CODE_PAGE_SEGMENT_MISSING: &str = "PAGE_SEGMENT_MISSING";
pub const CODE_PAGE_NOT_BOUND: &str = "PAGE_NOT_BOUND";
