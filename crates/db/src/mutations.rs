//! Write paths. Each runs inside [`unit_of_work::run`], validating the form
//! first and reporting a [`MutationOutcome`] instead of an error.

use fyyur_core::error::CoreError;
use fyyur_core::notice::Subject;
use fyyur_core::types::DbId;
use fyyur_core::validation;
use sqlx::{PgConnection, PgPool};

use crate::models::artist::{Artist, ArtistForm};
use crate::models::show::{Show, ShowForm};
use crate::models::venue::{Venue, VenueForm};
use crate::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use crate::unit_of_work::{self, MutationError, MutationOutcome};

pub async fn create_venue(pool: &PgPool, form: VenueForm) -> MutationOutcome<Venue> {
    let form = form.normalized();
    let subject = Subject::create("Venue", Some(form.name.clone()));
    unit_of_work::run(pool, subject, move |conn| Box::pin(insert_venue(conn, form))).await
}

pub async fn update_venue(pool: &PgPool, id: DbId, form: VenueForm) -> MutationOutcome<Venue> {
    let form = form.normalized();
    let subject = Subject::update("Venue", id, Some(form.name.clone()));
    unit_of_work::run(pool, subject, move |conn| {
        Box::pin(overwrite_venue(conn, id, form))
    })
    .await
}

/// Delete a venue and, by cascade, its shows.
pub async fn delete_venue(pool: &PgPool, id: DbId) -> MutationOutcome<Venue> {
    let subject = Subject::delete("Venue", id);
    unit_of_work::run(pool, subject, move |conn| Box::pin(remove_venue(conn, id))).await
}

pub async fn create_artist(pool: &PgPool, form: ArtistForm) -> MutationOutcome<Artist> {
    let form = form.normalized();
    let subject = Subject::create("Artist", Some(form.name.clone()));
    unit_of_work::run(pool, subject, move |conn| Box::pin(insert_artist(conn, form))).await
}

pub async fn update_artist(pool: &PgPool, id: DbId, form: ArtistForm) -> MutationOutcome<Artist> {
    let form = form.normalized();
    let subject = Subject::update("Artist", id, Some(form.name.clone()));
    unit_of_work::run(pool, subject, move |conn| {
        Box::pin(overwrite_artist(conn, id, form))
    })
    .await
}

pub async fn create_show(pool: &PgPool, form: ShowForm) -> MutationOutcome<Show> {
    let subject = Subject::create("Show", None);
    unit_of_work::run(pool, subject, move |conn| Box::pin(insert_show(conn, form))).await
}

// ---------------------------------------------------------------------------
// Units of work
// ---------------------------------------------------------------------------

async fn insert_venue(conn: &mut PgConnection, form: VenueForm) -> Result<Venue, MutationError> {
    validation::check(&form)?;
    Ok(VenueRepo::create(conn, &form).await?)
}

async fn overwrite_venue(
    conn: &mut PgConnection,
    id: DbId,
    form: VenueForm,
) -> Result<Venue, MutationError> {
    validation::check(&form)?;
    VenueRepo::update(conn, id, &form)
        .await?
        .ok_or(MutationError::Core(CoreError::NotFound { entity: "Venue", id }))
}

async fn remove_venue(conn: &mut PgConnection, id: DbId) -> Result<Venue, MutationError> {
    VenueRepo::delete(conn, id)
        .await?
        .ok_or(MutationError::Core(CoreError::NotFound { entity: "Venue", id }))
}

async fn insert_artist(
    conn: &mut PgConnection,
    form: ArtistForm,
) -> Result<Artist, MutationError> {
    validation::check(&form)?;
    Ok(ArtistRepo::create(conn, &form).await?)
}

async fn overwrite_artist(
    conn: &mut PgConnection,
    id: DbId,
    form: ArtistForm,
) -> Result<Artist, MutationError> {
    validation::check(&form)?;
    ArtistRepo::update(conn, id, &form)
        .await?
        .ok_or(MutationError::Core(CoreError::NotFound { entity: "Artist", id }))
}

async fn insert_show(conn: &mut PgConnection, form: ShowForm) -> Result<Show, MutationError> {
    validation::check(&form)?;
    Ok(ShowRepo::create(conn, &form).await?)
}
