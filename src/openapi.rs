use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, Item, PaginatedItemResponse};
use crate::paginate::PageLinks;

/// OpenAPI documentation for the paginated catalogue API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paginate Route API",
        version = "0.1.0",
        description = "Paginated listings addressable as /resource and /resource/<keyword>/{page}, with previous and next page links.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Items", description = "Paginated item listings")
    ),
    paths(
        crate::handlers::list_items,
        crate::handlers::list_category_items,
        crate::routes::health_check
    ),
    components(
        schemas(
            Item,
            PageLinks,
            PaginatedItemResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
