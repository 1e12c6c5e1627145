//! Handlers for the `/venues` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_core::listing::Area;
use fyyur_core::notice::Subject;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::directory;
use fyyur_db::models::named::NamedRef;
use fyyur_db::models::venue::{Venue, VenueDetail, VenueForm};
use fyyur_db::mutations;

use crate::error::{AppError, AppResult};
use crate::query::{DetailParams, SearchRequest};
use crate::response::{mutation_report, unreadable_form, DataResponse, MutationReport};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /api/v1/venues
///
/// Venues grouped by city and state, each with its upcoming show count.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Area>>>> {
    let areas = directory::list_grouped_venues(&state.pool, state.now()).await?;
    Ok(Json(DataResponse { data: areas }))
}

/// POST /api/v1/venues/search
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<SearchResults<NamedRef>>> {
    let results = directory::search_venues(&state.pool, &input.search_term).await?;
    Ok(Json(results))
}

/// GET /api/v1/venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DetailParams>,
) -> AppResult<Json<DataResponse<VenueDetail>>> {
    let detail = directory::venue_detail(&state.pool, id, state.now(), params.date_style)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VenueForm>>> {
    let form = directory::venue_form(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: form }))
}

/// POST /api/v1/venues
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> (StatusCode, Json<MutationReport<Venue>>) {
    let outcome = match payload {
        Ok(Json(form)) => mutations::create_venue(&state.pool, form).await,
        Err(rejection) => unreadable_form(Subject::create("Venue", None), rejection),
    };
    mutation_report(outcome, StatusCode::CREATED)
}

/// PUT /api/v1/venues/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<VenueForm>, JsonRejection>,
) -> (StatusCode, Json<MutationReport<Venue>>) {
    let outcome = match payload {
        Ok(Json(form)) => mutations::update_venue(&state.pool, id, form).await,
        Err(rejection) => unreadable_form(Subject::update("Venue", id, None), rejection),
    };
    mutation_report(outcome, StatusCode::OK)
}

/// DELETE /api/v1/venues/{id}
///
/// Also removes every show booked at the venue.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> (StatusCode, Json<MutationReport<Venue>>) {
    let outcome = mutations::delete_venue(&state.pool, id).await;
    mutation_report(outcome, StatusCode::OK)
}
