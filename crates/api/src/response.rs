//! Shared response envelope types for API handlers.
//!
//! Reads use a `{ "data": ... }` envelope. Writes report the mutation outcome
//! with the user-facing notice, see [`MutationReport`].

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use fyyur_core::error::CoreError;
use fyyur_core::notice::Subject;
use fyyur_db::unit_of_work::{MutationError, MutationOutcome};
use serde::Serialize;

use crate::error::AppError;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body returned by every create, update and delete.
///
/// `data` is present only when the mutation committed; `error` and `code`
/// only when it was rolled back.
#[derive(Debug, Serialize)]
pub struct MutationReport<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

/// Render a mutation outcome.
///
/// A committed outcome uses `committed_status`; a rolled back one takes the
/// status its cause maps to in [`AppError`].
pub fn mutation_report<T: Serialize>(
    outcome: MutationOutcome<T>,
    committed_status: StatusCode,
) -> (StatusCode, Json<MutationReport<T>>) {
    match outcome {
        MutationOutcome::Committed { value, message } => (
            committed_status,
            Json(MutationReport {
                success: true,
                message,
                data: Some(value),
                error: None,
                code: None,
            }),
        ),
        MutationOutcome::RolledBack { error, message } => {
            let (status, code, detail) = AppError::from(error).classify();
            (
                status,
                Json(MutationReport {
                    success: false,
                    message,
                    data: None,
                    error: Some(detail),
                    code: Some(code),
                }),
            )
        }
    }
}

/// Outcome for a write whose JSON body could not be read as the form.
///
/// Missing fields, wrong types and unknown keys are reported like any other
/// validation failure, with the notice for `subject`.
pub fn unreadable_form<T>(subject: Subject, rejection: JsonRejection) -> MutationOutcome<T> {
    let error = MutationError::Core(CoreError::Validation(rejection.body_text()));
    MutationOutcome::rejected(subject, error)
}
