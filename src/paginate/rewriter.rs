//! Next and previous page URLs for a paginated route.

use log::debug;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::errors::PaginateError;
use crate::paginate::{PageRoute, Paginator, RouteTemplate, UrlResolver};
use crate::translation::PageKeyword;

/// The page after `current_page`, if the paginator has more pages.
pub fn next_page(has_more_pages: bool, current_page: u64) -> Option<u64> {
    if !has_more_pages {
        return None;
    }
    current_page.checked_add(1)
}

pub fn has_next_page(has_more_pages: bool, current_page: u64) -> bool {
    next_page(has_more_pages, current_page).is_some()
}

/// The page before `current_page`; page 1 has none.
pub fn previous_page(current_page: u64) -> Option<u64> {
    if current_page <= 1 {
        return None;
    }
    Some(current_page - 1)
}

pub fn has_previous_page(current_page: u64) -> bool {
    previous_page(current_page).is_some()
}

/// Links to the neighbouring pages, ready to embed in a response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageLinks {
    /// Previous page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
    /// Previous page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/api/items")]
    pub previous: Option<String>,
    /// Next page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    /// Next page URL
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "/api/items/page/3")]
    pub next: Option<String>,
}

/// Rewrites a route template into the URLs of neighbouring pages.
///
/// Holds the page keyword loaded at startup and the resolver that turns the
/// rewritten path into an absolute URL. Both are immutable, so a single
/// instance is shared by every worker.
#[derive(Clone)]
pub struct PageUrlRewriter {
    keyword: PageKeyword,
    resolver: Arc<dyn UrlResolver>,
}

impl PageUrlRewriter {
    pub fn new<R>(keyword: PageKeyword, resolver: R) -> Self
    where
        R: UrlResolver + 'static,
    {
        Self {
            keyword,
            resolver: Arc::new(resolver),
        }
    }

    pub fn keyword(&self) -> &PageKeyword {
        &self.keyword
    }

    /// URL of the next page.
    ///
    /// A template already holding the page segment gets the number substituted
    /// in place; a clean first-page template gets `/<keyword>/<n>` appended.
    pub fn next_page_url(
        &self,
        template: &RouteTemplate,
        has_more_pages: bool,
        current_page: u64,
    ) -> Option<String> {
        let next = next_page(has_more_pages, current_page)?;

        let path = match template.page_slot(&self.keyword) {
            Some(slot) => template.with_page(slot, next),
            None => template.append_page(&self.keyword, next),
        };

        debug!("Next page of '{}' is '{}'", template.uri(), path);
        Some(self.resolve(template, &path))
    }

    /// URL of the previous page.
    ///
    /// Going back to page 1 yields the clean URL without the page segment
    /// unless `full` is set, in which case `<keyword>/1` is kept.
    pub fn previous_page_url(
        &self,
        template: &RouteTemplate,
        current_page: u64,
        full: bool,
    ) -> Result<Option<String>, PaginateError> {
        let Some(previous) = previous_page(current_page) else {
            return Ok(None);
        };

        let slot = template.page_slot(&self.keyword);

        let path = match slot {
            Some(slot) if previous == 1 && !full => template.without_page(slot),
            None if previous == 1 && !full => template.uri().to_string(),
            Some(slot) => template.with_page(slot, previous),
            None => {
                return Err(PaginateError::MissingPageSegment {
                    template: template.uri().to_string(),
                    keyword: self.keyword.to_string(),
                })
            }
        };

        debug!("Previous page of '{}' is '{}'", template.uri(), path);
        Ok(Some(self.resolve(template, &path)))
    }

    /// Both neighbour links for the page bound to the current request.
    pub fn links<P>(&self, route: &PageRoute, paginator: &P) -> Result<PageLinks, PaginateError>
    where
        P: Paginator + ?Sized,
    {
        let has_more_pages = paginator.has_more_pages();

        Ok(PageLinks {
            previous_page: previous_page(route.page),
            previous: self.previous_page_url(&route.template, route.page, false)?,
            next_page: next_page(has_more_pages, route.page),
            next: self.next_page_url(&route.template, has_more_pages, route.page),
        })
    }

    fn resolve(&self, template: &RouteTemplate, path: &str) -> String {
        self.resolver.to(&template.expand(path))
    }
}

impl fmt::Debug for PageUrlRewriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageUrlRewriter")
            .field("keyword", &self.keyword)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::BaseUrlResolver;

    fn rewriter() -> PageUrlRewriter {
        PageUrlRewriter::new(PageKeyword::default(), |path: &str| {
            format!("https://example.com/{}", path.trim_start_matches('/'))
        })
    }

    fn resolved(path: &str) -> String {
        format!("https://example.com/{}", path)
    }

    #[test]
    fn test_previous_page_absent_only_on_first_page() {
        assert_eq!(previous_page(1), None);
        for page in 2..50 {
            assert_eq!(previous_page(page), Some(page - 1));
            assert!(has_previous_page(page));
        }
        assert!(!has_previous_page(1));
    }

    #[test]
    fn test_next_page_follows_paginator() {
        for page in 1..50 {
            assert_eq!(next_page(false, page), None);
            assert_eq!(next_page(true, page), Some(page + 1));
            assert!(has_next_page(true, page));
            assert!(!has_next_page(false, page));
        }
    }

    #[test]
    fn test_next_page_url_appends_segment_on_clean_url() {
        let url = rewriter().next_page_url(&RouteTemplate::new("users"), true, 1);
        assert_eq!(url, Some(resolved("users/page/2")));
    }

    #[test]
    fn test_next_page_url_substitutes_placeholder() {
        let url = rewriter().next_page_url(&RouteTemplate::new("users/page/{page}"), true, 2);
        assert_eq!(url, Some(resolved("users/page/3")));
    }

    #[test]
    fn test_next_page_url_absent_without_more_pages() {
        let url = rewriter().next_page_url(&RouteTemplate::new("users/page/{page}"), false, 4);
        assert_eq!(url, None);
    }

    #[test]
    fn test_previous_to_first_page_strips_segment() {
        let url = rewriter()
            .previous_page_url(&RouteTemplate::new("users/page/2"), 2, false)
            .unwrap();
        assert_eq!(url, Some(resolved("users")));
    }

    #[test]
    fn test_previous_page_url_substitutes_number() {
        let url = rewriter()
            .previous_page_url(&RouteTemplate::new("users/page/3"), 3, false)
            .unwrap();
        assert_eq!(url, Some(resolved("users/page/2")));
    }

    #[test]
    fn test_full_flag_only_matters_for_first_page() {
        let rewriter = rewriter();
        let third = RouteTemplate::new("users/page/3");
        assert_eq!(
            rewriter.previous_page_url(&third, 3, true).unwrap(),
            Some(resolved("users/page/2"))
        );

        let second = RouteTemplate::new("users/page/{page}");
        assert_eq!(
            rewriter.previous_page_url(&second, 2, true).unwrap(),
            Some(resolved("users/page/1"))
        );
    }

    #[test]
    fn test_no_previous_on_first_page() {
        let rewriter = rewriter();
        let template = RouteTemplate::new("users");
        assert_eq!(rewriter.previous_page_url(&template, 1, false).unwrap(), None);
        assert_eq!(rewriter.previous_page_url(&template, 1, true).unwrap(), None);
    }

    #[test]
    fn test_missing_segment_is_reported() {
        let err = rewriter()
            .previous_page_url(&RouteTemplate::new("users"), 3, false)
            .unwrap_err();
        assert_eq!(
            err,
            PaginateError::MissingPageSegment {
                template: "users".to_string(),
                keyword: "page".to_string(),
            }
        );
    }

    #[test]
    fn test_next_then_previous_returns_to_template() {
        let rewriter = PageUrlRewriter::new(PageKeyword::default(), BaseUrlResolver::default());

        for (uri, page) in [("users/page/{page}", 3u64), ("users/page/{page}", 7)] {
            let template = RouteTemplate::new(uri);
            let next = rewriter.next_page_url(&template, true, page).unwrap();
            let back = rewriter
                .previous_page_url(&RouteTemplate::new(next.trim_start_matches('/')), page + 1, true)
                .unwrap();
            assert_eq!(back, Some(format!("/users/page/{}", page)));
        }

        let first = RouteTemplate::new("users");
        let next = rewriter.next_page_url(&first, true, 1).unwrap();
        let back = rewriter
            .previous_page_url(&RouteTemplate::new(next.trim_start_matches('/')), 2, false)
            .unwrap();
        assert_eq!(back, Some("/users".to_string()));
    }

    #[test]
    fn test_localized_keyword() {
        let keyword = PageKeyword::new("pagina").unwrap();
        let rewriter = PageUrlRewriter::new(keyword, BaseUrlResolver::default());
        let template = RouteTemplate::new("gebruikers");

        assert_eq!(
            rewriter.next_page_url(&template, true, 1),
            Some("/gebruikers/pagina/2".to_string())
        );
        assert!(RouteTemplate::new("gebruikers/page/{page}")
            .page_slot(rewriter.keyword())
            .is_none());
    }

    #[test]
    fn test_links_expand_route_params() {
        let rewriter = PageUrlRewriter::new(PageKeyword::default(), BaseUrlResolver::default());
        let route = PageRoute::new(
            RouteTemplate::new("/categories/{category}/items/page/{page:[0-9]+}")
                .with_params(vec![("category".to_string(), "books".to_string())]),
            2,
        );

        let links = rewriter.links(&route, &true).unwrap();
        assert_eq!(links.previous_page, Some(1));
        assert_eq!(links.previous.as_deref(), Some("/categories/books/items"));
        assert_eq!(links.next_page, Some(3));
        assert_eq!(
            links.next.as_deref(),
            Some("/categories/books/items/page/3")
        );

        let last = rewriter.links(&route, &false).unwrap();
        assert_eq!(last.next, None);
    }
}
