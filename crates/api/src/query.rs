//! Shared request parameter types for API handlers.

use fyyur_core::datetime::DateStyle;
use serde::Deserialize;

/// Body of `POST /venues/search` and `POST /artists/search`.
///
/// A missing or blank term matches every record.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub search_term: String,
}

/// Query parameters for detail pages (`?date_style=medium|full`).
#[derive(Debug, Default, Deserialize)]
pub struct DetailParams {
    #[serde(default)]
    pub date_style: DateStyle,
}
