//! Paginated item listings.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, warn};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::constants::{CODE_PAGE_NOT_BOUND, ERR_PAGE_NOT_BOUND, MSG_ITEMS_LISTED};
use crate::errors::ApiError;
use crate::middleware::RequestExt;
use crate::models::{Item, ListQuery, PaginatedResponse};
use crate::paginate::PageUrlRewriter;
use crate::services::ItemService;
use crate::validators::validation_errors_to_api_error;

/// List all items, one page at a time
///
/// Page 1 is served on `/api/items`; later pages on `/api/items/<keyword>/{page}`,
/// where the keyword is localized (`page` in English).
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of items", body = crate::models::PaginatedItemResponse),
        (status = 400, description = "Invalid query", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_items(
    req: HttpRequest,
    item_service: web::Data<ItemService>,
    rewriter: web::Data<PageUrlRewriter>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    respond(&req, &item_service, &rewriter, &query, None)
}

/// Path of a category listing. The paged variant also binds `page`, which
/// the `SetPage` middleware handles.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct CategoryPath {
    /// Category slug
    pub category: String,
}

/// List the items of one category, one page at a time
#[utoipa::path(
    get,
    path = "/api/categories/{category}/items",
    tag = "Items",
    params(CategoryPath, ListQuery),
    responses(
        (status = 200, description = "One page of items in the category", body = crate::models::PaginatedItemResponse),
        (status = 400, description = "Invalid query", body = crate::models::ErrorResponse)
    )
)]
pub async fn list_category_items(
    req: HttpRequest,
    item_service: web::Data<ItemService>,
    rewriter: web::Data<PageUrlRewriter>,
    path: web::Path<CategoryPath>,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let CategoryPath { category } = path.into_inner();
    respond(&req, &item_service, &rewriter, &query, Some(&category))
}

fn respond(
    req: &HttpRequest,
    item_service: &ItemService,
    rewriter: &PageUrlRewriter,
    query: &ListQuery,
    category: Option<&str>,
) -> Result<HttpResponse, ApiError> {
    query.validate().map_err(validation_errors_to_api_error)?;

    let route = req.page_route().ok_or_else(|| {
        warn!("Listing reached without a bound page: {}", req.path());
        ApiError::InternalServerError {
            code: CODE_PAGE_NOT_BOUND.to_string(),
            message: ERR_PAGE_NOT_BOUND.to_string(),
        }
    })?;

    let per_page = query
        .per_page
        .unwrap_or_else(|| item_service.default_per_page());
    let page = item_service.list(category, route.page, per_page);
    let links = rewriter.links(&route, &page)?;

    debug!(
        "Page {} of {} for {}: previous={:?} next={:?}",
        page.page,
        page.total_pages(),
        req.path(),
        links.previous,
        links.next
    );

    Ok(HttpResponse::Ok().json(PaginatedResponse::<Item> {
        success: true,
        message: MSG_ITEMS_LISTED.to_string(),
        total: page.total,
        page: page.page,
        per_page: page.per_page,
        total_pages: page.total_pages(),
        data: page.items,
        links,
    }))
}
