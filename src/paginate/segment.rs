//! Path segment lookup.

/// Return the `/`-delimited segment of `path` at `index`.
///
/// Non-negative indices count from the start. Negative indices count from the
/// end, so `-1` is the last segment and `-2` the one before it. An index out
/// of range yields an empty string.
///
/// # Examples
/// ```
/// use paginate_route::paginate::segment;
///
/// assert_eq!(segment("a/b/c", -1), "c");
/// assert_eq!(segment("a/b/c", -2), "b");
/// assert_eq!(segment("a/b/c", 5), "");
/// ```
pub fn segment(path: &str, index: isize) -> &str {
    let mut segments = path.split('/');

    let found = if index < 0 {
        segments.rev().nth(index.unsigned_abs() - 1)
    } else {
        segments.nth(index.unsigned_abs())
    };

    found.unwrap_or("")
}
