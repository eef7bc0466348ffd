//! Data models organized by type.

pub mod item;
pub mod requests;
pub mod responses;

pub use item::*;
pub use requests::*;
pub use responses::*;
