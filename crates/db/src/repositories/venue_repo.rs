//! Repository for the `venues` table.

use fyyur_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::named::NamedRef;
use crate::models::venue::{Venue, VenueForm, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, address, city, state, phone, website, \
    facebook_link, image_link, seeking_talent, seeking_description, created_at, updated_at";

/// Provides CRUD operations for venues.
///
/// Writes take a `&mut PgConnection` so they run inside the caller's
/// transaction; reads take the pool.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create(conn: &mut PgConnection, input: &VenueForm) -> Result<Venue, sqlx::Error> {
        let query = format!(
            "INSERT INTO venues (name, genres, address, city, state, phone, website, \
                facebook_link, image_link, seeking_talent, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(&input.image_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(conn)
            .await
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue with the number of its shows starting strictly after
    /// `now`, ordered by state, city, then id.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        sqlx::query_as::<_, VenueSummary>(
            "SELECT v.id, v.name, v.city, v.state, \
                COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows \
             FROM venues v \
             LEFT JOIN shows s ON s.venue_id = v.id \
             GROUP BY v.id \
             ORDER BY v.state, v.city, v.id",
        )
        .bind(now)
        .fetch_all(pool)
        .await
    }

    /// Venues whose name matches an `ILIKE` pattern, ordered by name.
    pub async fn search_by_name(pool: &PgPool, pattern: &str) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, name FROM venues WHERE name ILIKE $1 ORDER BY name, id",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Overwrite every writable field of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &VenueForm,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!(
            "UPDATE venues SET \
                name = $2, \
                genres = $3, \
                address = $4, \
                city = $5, \
                state = $6, \
                phone = $7, \
                website = $8, \
                facebook_link = $9, \
                image_link = $10, \
                seeking_talent = $11, \
                seeking_description = $12 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.address)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(&input.image_link)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// Delete a venue, returning the removed row. Its shows go with it via
    /// `ON DELETE CASCADE`.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("DELETE FROM venues WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Total number of venue rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
