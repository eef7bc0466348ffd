//! Success message constants used throughout the application.

// Health messages
pub const MSG_HEALTH_OK: &str = "OK";
pub const MSG_SERVER_RUNNING: &str = "Server is running";

// Listing messages
pub const MSG_ITEMS_LISTED: &str = "Items listed";
