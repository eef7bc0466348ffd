//! Turning relative paths into absolute URLs.

/// Resolves a relative path to the URL handed out to clients.
///
/// The rewriter never builds absolute URLs itself; the host application decides
/// scheme, host and prefix by providing an implementation.
pub trait UrlResolver: Send + Sync {
    fn to(&self, path: &str) -> String;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn to(&self, path: &str) -> String {
        self(path)
    }
}

/// Joins paths onto a fixed base URL such as `https://example.com`.
///
/// An empty base produces root-relative URLs (`/users/page/2`).
#[derive(Debug, Clone, Default)]
pub struct BaseUrlResolver {
    base: String,
}

impl BaseUrlResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl UrlResolver for BaseUrlResolver {
    fn to(&self, path: &str) -> String {
        if path.contains("://") {
            return path.to_string();
        }
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}
