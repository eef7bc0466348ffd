//! Services organized by domain concern.

pub mod item_service;

pub use item_service::{ItemPage, ItemService};
