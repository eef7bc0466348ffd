//! The pagination state the rewriter needs from a result set.

/// Anything that knows whether more pages follow the current one.
pub trait Paginator {
    fn has_more_pages(&self) -> bool;
}

impl Paginator for bool {
    fn has_more_pages(&self) -> bool {
        *self
    }
}

impl<P: Paginator + ?Sized> Paginator for &P {
    fn has_more_pages(&self) -> bool {
        (**self).has_more_pages()
    }
}
