//! Translation catalogs and the localized page keyword.

pub mod catalog;
pub mod keyword;

pub use catalog::Catalog;
pub use keyword::PageKeyword;
