//! Paginated routes for actix-web.
//!
//! A paginated route is reachable on its bare path for page 1 and on
//! `<base>/<keyword>/{page}` for the others, where the keyword is a localized
//! path segment (`page` by default). [`routes::PaginateRouteExt::paginate`]
//! registers both, [`middleware::SetPage`] binds the current page, and
//! [`paginate::PageUrlRewriter`] turns the matched route into previous and next
//! page URLs.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod paginate;
pub mod routes;
pub mod services;
pub mod translation;
pub mod validators;
