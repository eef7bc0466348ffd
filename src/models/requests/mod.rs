//! Request models.

pub mod list;

pub use list::*;
