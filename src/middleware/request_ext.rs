//! Request extension trait for reading the bound page from HTTP requests.

use actix_web::HttpMessage;

use crate::constants::DEFAULT_PAGE_NUMBER;
use crate::paginate::PageRoute;

/// Extension trait for reading what the `SetPage` middleware bound.
pub trait RequestExt {
    /// The matched route template and page, if the route is paginated.
    fn page_route(&self) -> Option<PageRoute>;

    /// The current page, page 1 when nothing was bound.
    fn current_page(&self) -> u64 {
        self.page_route()
            .map(|route| route.page)
            .unwrap_or(DEFAULT_PAGE_NUMBER)
    }
}

impl RequestExt for actix_web::HttpRequest {
    fn page_route(&self) -> Option<PageRoute> {
        self.extensions().get::<PageRoute>().cloned()
    }
}
