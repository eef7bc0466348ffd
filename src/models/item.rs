//! Catalogue item model.

use serde::Serialize;
use utoipa::ToSchema;

/// An entry in the item catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Item {
    /// Item identifier
    #[schema(example = 7)]
    pub id: u64,
    /// Display name
    #[schema(example = "Item 7")]
    pub name: String,
    /// Category slug
    #[schema(example = "books")]
    pub category: String,
}
