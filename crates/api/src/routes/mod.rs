pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                     grouped listing, create
/// /venues/search              case-insensitive name search (POST)
/// /venues/{id}                detail, update, delete
/// /venues/{id}/edit           edit-form prefill
///
/// /artists                    listing, create
/// /artists/search             case-insensitive name search (POST)
/// /artists/{id}               detail, update
/// /artists/{id}/edit          edit-form prefill
///
/// /shows                      listing, create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
