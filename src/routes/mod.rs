use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

use crate::constants::{MSG_HEALTH_OK, MSG_SERVER_RUNNING};
use crate::handlers;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;
use crate::translation::PageKeyword;

pub mod paginate;

pub use paginate::{PaginateRouteExt, PaginatedPaths};

pub fn configure_routes(cfg: &mut web::ServiceConfig, keyword: &PageKeyword) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json))
        .service(
            web::scope("/api")
                // Health check
                .route("/health", web::get().to(health_check))
                // Paginated listings: bare path is page 1, `<keyword>/{page}` the rest
                .configure(|scope| {
                    scope
                        .paginate(keyword, "/items", handlers::list_items)
                        .paginate(
                            keyword,
                            "/categories/{category}/items",
                            handlers::list_category_items,
                        );
                }),
        );
}

/// Health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: MSG_HEALTH_OK.to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
