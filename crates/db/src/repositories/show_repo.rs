//! Repository for the `shows` table.

use fyyur_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::show::{BookingRow, Show, ShowForm, ShowListing};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, venue_id, artist_id, start_time, created_at, updated_at";

/// Provides create and read operations for shows.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    ///
    /// Fails with a foreign-key violation (`23503`) if either reference is
    /// dangling.
    pub async fn create(conn: &mut PgConnection, input: &ShowForm) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (venue_id, artist_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .bind(input.start_time)
            .fetch_one(conn)
            .await
    }

    /// List every show with its venue and artist names, soonest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT \
                s.venue_id, \
                v.name AS venue_name, \
                s.artist_id, \
                a.name AS artist_name, \
                a.image_link AS artist_image_link, \
                s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             JOIN artists a ON a.id = s.artist_id \
             ORDER BY s.start_time, s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows at a venue, each joined to its artist.
    pub async fn bookings_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<BookingRow>, sqlx::Error> {
        sqlx::query_as::<_, BookingRow>(
            "SELECT \
                a.id AS counterpart_id, \
                a.name AS counterpart_name, \
                a.image_link AS counterpart_image_link, \
                s.start_time \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows by an artist, each joined to its venue.
    pub async fn bookings_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<BookingRow>, sqlx::Error> {
        sqlx::query_as::<_, BookingRow>(
            "SELECT \
                v.id AS counterpart_id, \
                v.name AS counterpart_name, \
                v.image_link AS counterpart_image_link, \
                s.start_time \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }

    /// Number of shows booked at a venue.
    pub async fn count_for_venue(pool: &PgPool, venue_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
