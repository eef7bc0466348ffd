//! Registration of paginated routes.

use actix_web::{web, FromRequest, Handler, Responder};
use log::info;

use crate::constants::{PAGE_CONSTRAINT, PAGE_PARAM};
use crate::middleware::SetPage;
use crate::translation::PageKeyword;

/// The two paths a paginated route answers on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedPaths {
    /// `base`, serving page 1
    pub bare: String,
    /// `base/<keyword>/{page:[0-9]+}`
    pub paged: String,
}

impl PaginatedPaths {
    pub fn new(keyword: &PageKeyword, base: &str) -> Self {
        let trimmed = base.trim_end_matches('/');
        let bare = if trimmed.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            bare,
            paged: format!(
                "{}/{}/{{{}:{}}}",
                trimmed, keyword, PAGE_PARAM, PAGE_CONSTRAINT
            ),
        }
    }
}

/// Adds `paginate` to actix route configuration.
///
/// ```ignore
/// cfg.paginate(&keyword, "/users", handlers::list_users);
/// // GET /users               -> page 1
/// // GET /users/page/{page}   -> page N (digits only)
/// ```
pub trait PaginateRouteExt {
    fn paginate<F, Args>(&mut self, keyword: &PageKeyword, base: &str, handler: F) -> &mut Self
    where
        F: Handler<Args>,
        Args: FromRequest + 'static,
        F::Output: Responder + 'static;
}

impl PaginateRouteExt for web::ServiceConfig {
    fn paginate<F, Args>(&mut self, keyword: &PageKeyword, base: &str, handler: F) -> &mut Self
    where
        F: Handler<Args>,
        Args: FromRequest + 'static,
        F::Output: Responder + 'static,
    {
        let paths = PaginatedPaths::new(keyword, base);
        info!(
            "Registering paginated route {} and {}",
            paths.bare, paths.paged
        );

        self.service(
            web::resource(paths.paged.as_str())
                .wrap(SetPage::new(paths.paged.as_str()))
                .route(web::get().to(handler.clone())),
        )
        .service(
            web::resource(paths.bare.as_str())
                .wrap(SetPage::new(paths.bare.as_str()))
                .route(web::get().to(handler)),
        )
    }
}
