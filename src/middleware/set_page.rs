//! Middleware binding the current page and route template to the request.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use log::debug;
use std::rc::Rc;

use crate::constants::{DEFAULT_PAGE_NUMBER, PAGE_PARAM};
use crate::paginate::{PageRoute, RouteTemplate};

/// Page-binding middleware for paginated resources.
///
/// Runs after the resource has matched. Reads the `page` path parameter
/// (page 1 when absent or not a positive integer), captures the matched route
/// pattern with its other parameters, and stores a [`PageRoute`] in the
/// request extensions for the handler.
pub struct SetPage {
    template: String,
}

impl SetPage {
    /// `template` is used when the router cannot report the matched pattern.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SetPage
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SetPageService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(SetPageService {
            service: Rc::new(service),
            template: self.template.clone(),
        })
    }
}

pub struct SetPageService<S> {
    service: Rc<S>,
    template: String,
}

impl<S, B> Service<ServiceRequest> for SetPageService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let page = bind_page(req.match_info().get(PAGE_PARAM));
        let uri = req
            .match_pattern()
            .unwrap_or_else(|| self.template.clone());
        let params = req
            .match_info()
            .iter()
            .filter(|(name, _)| *name != PAGE_PARAM)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        debug!("Bound page {} for route '{}'", page, uri);

        // Available to handlers through RequestExt
        req.extensions_mut()
            .insert(PageRoute::new(RouteTemplate::new(uri).with_params(params), page));

        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res)
        })
    }
}

/// Page number for a raw `page` parameter. Anything but a positive integer is page 1.
pub fn bind_page(raw: Option<&str>) -> u64 {
    match raw {
        None => DEFAULT_PAGE_NUMBER,
        Some(raw) => match raw.parse::<u64>() {
            Ok(page) if page >= 1 => page,
            _ => {
                debug!("Invalid page parameter '{}', using page 1", raw);
                DEFAULT_PAGE_NUMBER
            }
        },
    }
}
