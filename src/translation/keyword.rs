//! The localized path segment that marks the page number.

use log::{debug, warn};
use std::fmt;

use crate::constants::{DEFAULT_PAGE_KEYWORD, PAGE_KEYWORD_KEY};
use crate::translation::Catalog;

/// Path segment in front of the page number, e.g. `page` in `/users/page/3`.
///
/// Loaded once at startup and never changed afterwards. Always a single
/// non-empty path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageKeyword(String);

impl PageKeyword {
    /// Returns `None` unless `keyword` is usable as one path segment.
    pub fn new(keyword: impl Into<String>) -> Option<Self> {
        let keyword = keyword.into();
        let valid = !keyword.is_empty()
            && !keyword
                .chars()
                .any(|c| matches!(c, '/' | '{' | '}' | '?' | '#') || c.is_whitespace());

        valid.then_some(Self(keyword))
    }

    /// Read the keyword from `paginateroute.page`, falling back to `page`.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        match catalog.get(PAGE_KEYWORD_KEY) {
            Some(value) => Self::new(value).unwrap_or_else(|| {
                warn!(
                    "Ignoring invalid page keyword '{}' for locale '{}'",
                    value,
                    catalog.locale()
                );
                Self::default()
            }),
            None => {
                debug!(
                    "No '{}' translation for locale '{}', using '{}'",
                    PAGE_KEYWORD_KEY,
                    catalog.locale(),
                    DEFAULT_PAGE_KEYWORD
                );
                Self::default()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PageKeyword {
    fn default() -> Self {
        Self(DEFAULT_PAGE_KEYWORD.to_string())
    }
}

impl fmt::Display for PageKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageKeyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
