//! Handlers for the `/artists` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_core::notice::Subject;
use fyyur_core::search::SearchResults;
use fyyur_core::types::DbId;
use fyyur_db::directory;
use fyyur_db::models::artist::{Artist, ArtistDetail, ArtistForm};
use fyyur_db::models::named::NamedRef;
use fyyur_db::mutations;

use crate::error::{AppError, AppResult};
use crate::query::{DetailParams, SearchRequest};
use crate::response::{mutation_report, unreadable_form, DataResponse, MutationReport};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Artist", id })
}

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<NamedRef>>>> {
    let artists = directory::list_artists(&state.pool).await?;
    Ok(Json(DataResponse { data: artists }))
}

/// POST /api/v1/artists/search
pub async fn search(
    State(state): State<AppState>,
    Json(input): Json<SearchRequest>,
) -> AppResult<Json<SearchResults<NamedRef>>> {
    let results = directory::search_artists(&state.pool, &input.search_term).await?;
    Ok(Json(results))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DetailParams>,
) -> AppResult<Json<DataResponse<ArtistDetail>>> {
    let detail = directory::artist_detail(&state.pool, id, state.now(), params.date_style)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ArtistForm>>> {
    let form = directory::artist_form(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse { data: form }))
}

/// POST /api/v1/artists
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> (StatusCode, Json<MutationReport<Artist>>) {
    let outcome = match payload {
        Ok(Json(form)) => mutations::create_artist(&state.pool, form).await,
        Err(rejection) => unreadable_form(Subject::create("Artist", None), rejection),
    };
    mutation_report(outcome, StatusCode::CREATED)
}

/// PUT /api/v1/artists/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<ArtistForm>, JsonRejection>,
) -> (StatusCode, Json<MutationReport<Artist>>) {
    let outcome = match payload {
        Ok(Json(form)) => mutations::update_artist(&state.pool, id, form).await,
        Err(rejection) => unreadable_form(Subject::update("Artist", id, None), rejection),
    };
    mutation_report(outcome, StatusCode::OK)
}
