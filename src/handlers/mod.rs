//! HTTP request handlers organized by domain.

pub mod item_handler;

pub use item_handler::*;
