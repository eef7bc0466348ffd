//! Route templates and the page slot inside them.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::constants::{PAGE_PARAM, PAGE_PLACEHOLDER};
use crate::paginate::segment;
use crate::translation::PageKeyword;

/// Characters escaped when a bound value is written back into a path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Byte ranges of a `<keyword>/<value>` pair inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlot {
    keyword_start: usize,
    value_start: usize,
    value_end: usize,
}

/// A route's URI template, e.g. `users/page/{page}` or `/categories/{category}/items`,
/// plus the route parameters bound for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    uri: String,
    params: Vec<(String, String)>,
}

impl RouteTemplate {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            params: Vec::new(),
        }
    }

    /// Attach the route parameters used to fill `{name}` placeholders.
    pub fn with_params(mut self, params: Vec<(String, String)>) -> Self {
        self.params = params;
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Locate the `<keyword>/<value>` pair, where value is the page
    /// placeholder or a literal page number.
    ///
    /// The trailing pair is checked first; when the page segment is followed
    /// by further segments the closest pair to the end wins.
    pub fn page_slot(&self, keyword: &PageKeyword) -> Option<PageSlot> {
        let count = self.uri.split('/').count() as isize;

        (2..=count).find_map(|back| {
            let keyword_segment = segment(&self.uri, -back);
            let value = segment(&self.uri, -back + 1);

            if keyword_segment != keyword.as_str() || !is_page_value(value) {
                return None;
            }

            let value_start = self.offset_of(value);
            Some(PageSlot {
                keyword_start: self.offset_of(keyword_segment),
                value_start,
                value_end: value_start + value.len(),
            })
        })
    }

    /// Replace the slot's value with a literal page number.
    pub fn with_page(&self, slot: PageSlot, page: u64) -> String {
        format!(
            "{}{}{}",
            &self.uri[..slot.value_start],
            page,
            &self.uri[slot.value_end..]
        )
    }

    /// Drop the page segment along with the separator in front of it.
    pub fn without_page(&self, slot: PageSlot) -> String {
        let start = match slot.keyword_start {
            0 => 0,
            start => start - 1,
        };
        format!("{}{}", &self.uri[..start], &self.uri[slot.value_end..])
    }

    /// Append `/<keyword>/<page>` to a template that has no page segment.
    pub fn append_page(&self, keyword: &PageKeyword, page: u64) -> String {
        format!("{}/{}/{}", self.uri.trim_end_matches('/'), keyword, page)
    }

    /// Fill `{name}` and `{name:pattern}` segments of `path` from the bound
    /// parameters, percent-encoded. Unknown placeholders are kept verbatim.
    pub fn expand(&self, path: &str) -> String {
        path.split('/')
            .map(|part| {
                placeholder_name(part)
                    .and_then(|name| {
                        self.params
                            .iter()
                            .find(|(param, _)| param == name)
                            .map(|(_, value)| utf8_percent_encode(value, SEGMENT).to_string())
                    })
                    .unwrap_or_else(|| part.to_string())
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    fn offset_of(&self, part: &str) -> usize {
        // `part` is always a subslice handed out by `segment` over `self.uri`.
        part.as_ptr() as usize - self.uri.as_ptr() as usize
    }
}

impl From<&str> for RouteTemplate {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for RouteTemplate {
    fn from(uri: String) -> Self {
        Self::new(uri)
    }
}

fn is_page_value(value: &str) -> bool {
    value == PAGE_PLACEHOLDER
        || placeholder_name(value) == Some(PAGE_PARAM)
        || (!value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
}

fn placeholder_name(part: &str) -> Option<&str> {
    let inner = part.strip_prefix('{')?.strip_suffix('}')?;
    inner.split(':').next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword() -> PageKeyword {
        PageKeyword::default()
    }

    #[test]
    fn test_page_slot_found_in_trailing_position() {
        let template = RouteTemplate::new("users/page/{page}");
        let slot = template.page_slot(&keyword()).expect("slot");
        assert_eq!(template.with_page(slot, 4), "users/page/4");
        assert_eq!(template.without_page(slot), "users");
    }

    #[test]
    fn test_page_slot_accepts_literal_number_and_constrained_placeholder() {
        let literal = RouteTemplate::new("users/page/12");
        assert!(literal.page_slot(&keyword()).is_some());

        let constrained = RouteTemplate::new("/users/page/{page:[0-9]+}");
        let slot = constrained.page_slot(&keyword()).expect("slot");
        assert_eq!(constrained.with_page(slot, 2), "/users/page/2");
        assert_eq!(constrained.without_page(slot), "/users");
    }

    #[test]
    fn test_no_slot_without_keyword() {
        assert!(RouteTemplate::new("users").page_slot(&keyword()).is_none());
        assert!(RouteTemplate::new("users/{page}").page_slot(&keyword()).is_none());
        assert!(RouteTemplate::new("page/about").page_slot(&keyword()).is_none());
    }

    #[test]
    fn test_slot_followed_by_other_segments() {
        let template = RouteTemplate::new("users/page/{page}/compact");
        let slot = template.page_slot(&keyword()).expect("slot");
        assert_eq!(template.with_page(slot, 3), "users/page/3/compact");
        assert_eq!(template.without_page(slot), "users/compact");
    }

    #[test]
    fn test_slot_at_template_start() {
        let template = RouteTemplate::new("page/{page}");
        let slot = template.page_slot(&keyword()).expect("slot");
        assert_eq!(template.without_page(slot), "");
    }

    #[test]
    fn test_append_page() {
        assert_eq!(
            RouteTemplate::new("users").append_page(&keyword(), 2),
            "users/page/2"
        );
        assert_eq!(
            RouteTemplate::new("/").append_page(&keyword(), 2),
            "/page/2"
        );
    }

    #[test]
    fn test_expand_fills_bound_params() {
        let template = RouteTemplate::new("/categories/{category}/items/page/{page}")
            .with_params(vec![("category".to_string(), "books".to_string())]);
        assert_eq!(
            template.expand("/categories/{category}/items/page/3"),
            "/categories/books/items/page/3"
        );
        assert_eq!(template.expand("/tags/{tag}"), "/tags/{tag}");
    }

    #[test]
    fn test_expand_encodes_bound_values() {
        let template = RouteTemplate::new("/categories/{category}/items").with_params(vec![(
            "category".to_string(),
            "what?".to_string(),
        )]);
        assert_eq!(
            template.expand("/categories/{category}/items/page/2"),
            "/categories/what%3F/items/page/2"
        );

        let template = RouteTemplate::new("/categories/{category}/items").with_params(vec![(
            "category".to_string(),
            "sci fi/a#b 100%".to_string(),
        )]);
        assert_eq!(
            template.expand("/categories/{category}/items"),
            "/categories/sci%20fi%2Fa%23b%20100%25/items"
        );
    }

    #[test]
    fn test_expand_handles_constrained_placeholders() {
        let template = RouteTemplate::new("/orders/{id:\\d+}")
            .with_params(vec![("id".to_string(), "7".to_string())]);
        assert_eq!(template.expand("/orders/{id:\\d+}"), "/orders/7");
    }
}
