//! Name search helpers.
//!
//! Matching is a case-insensitive substring test on the entity name. The
//! repository layer runs it as `name ILIKE pattern`; this module builds the
//! pattern and the `{count, data}` result envelope.

use serde::Serialize;

/// Escape character used in generated `LIKE` patterns (PostgreSQL default).
pub const LIKE_ESCAPE: char = '\\';

/// Build an `ILIKE` pattern matching any name that contains `term`.
///
/// The term is used as given, whitespace included. `%`, `_` and the escape
/// character are escaped so they match literally. An empty term yields `%`,
/// which matches every name.
///
/// Returns `None` when the term contains a NUL character. PostgreSQL text
/// cannot hold NUL, so no stored name can match such a term.
///
/// # Examples
///
/// ```
/// use fyyur_core::search::contains_pattern;
/// assert_eq!(contains_pattern("Hop").as_deref(), Some("%Hop%"));
/// assert_eq!(contains_pattern(" Hop").as_deref(), Some("% Hop%"));
/// assert_eq!(contains_pattern("").as_deref(), Some("%"));
/// assert_eq!(contains_pattern("100%").as_deref(), Some("%100\\%%"));
/// assert_eq!(contains_pattern("Hop\0"), None);
/// ```
pub fn contains_pattern(term: &str) -> Option<String> {
    if term.contains('\0') {
        return None;
    }
    if term.is_empty() {
        return Some("%".to_string());
    }

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

/// `{ "count": n, "data": [...] }` search response.
///
/// Only constructible through [`SearchResults::new`], which keeps `count`
/// equal to `data.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults<T> {
    count: usize,
    data: Vec<T>,
}

impl<T> SearchResults<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }
}
