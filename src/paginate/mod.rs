//! Page URL rewriting for paginated routes.
//!
//! A paginated route answers both on its bare path (`/users`, page 1) and on
//! `/users/<keyword>/{page}`. Given the template of the route that matched and
//! the page bound for the request, [`PageUrlRewriter`] computes where the
//! previous and next pages live.

pub mod paginator;
pub mod resolver;
pub mod rewriter;
pub mod segment;
pub mod template;

pub use paginator::Paginator;
pub use resolver::{BaseUrlResolver, UrlResolver};
pub use rewriter::{
    has_next_page, has_previous_page, next_page, previous_page, PageLinks, PageUrlRewriter,
};
pub use segment::segment;
pub use template::{PageSlot, RouteTemplate};

/// The template and page bound to the current request by the `SetPage` middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub template: RouteTemplate,
    pub page: u64,
}

impl PageRoute {
    pub fn new(template: RouteTemplate, page: u64) -> Self {
        Self { template, page }
    }
}
