//! Pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Item;
use crate::paginate::PageLinks;

/// Paginated list response
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedItemResponse = PaginatedResponse<Item>)]
pub struct PaginatedResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response message
    pub message: String,
    /// List of items
    pub data: Vec<T>,
    /// Total number of items
    pub total: u64,
    /// Current page number
    pub page: u64,
    /// Items per page
    pub per_page: u64,
    /// Total number of pages
    pub total_pages: u64,
    /// Links to the neighbouring pages
    pub links: PageLinks,
}
