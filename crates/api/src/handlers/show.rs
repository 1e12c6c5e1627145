//! Handlers for the `/shows` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::notice::Subject;
use fyyur_db::directory;
use fyyur_db::models::show::{Show, ShowForm, ShowListing};
use fyyur_db::mutations;

use crate::error::AppResult;
use crate::response::{mutation_report, unreadable_form, DataResponse, MutationReport};
use crate::state::AppState;

/// GET /api/v1/shows
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let shows = directory::list_shows(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// POST /api/v1/shows
///
/// Unknown venue or artist ids are rejected with 422.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ShowForm>, JsonRejection>,
) -> (StatusCode, Json<MutationReport<Show>>) {
    let outcome = match payload {
        Ok(Json(form)) => mutations::create_show(&state.pool, form).await,
        Err(rejection) => unreadable_form(Subject::create("Show", None), rejection),
    };
    mutation_report(outcome, StatusCode::CREATED)
}
