//! Repository for the `artists` table.

use fyyur_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::artist::{Artist, ArtistForm};
use crate::models::named::NamedRef;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genres, city, state, phone, website, facebook_link, \
    image_link, seeking_venue, seeking_description, created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        input: &ArtistForm,
    ) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, genres, city, state, phone, website, \
                facebook_link, image_link, seeking_venue, seeking_description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(&input.image_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_one(conn)
            .await
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every artist as an `{id, name}` pair, ordered by name.
    pub async fn list_names(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>("SELECT id, name FROM artists ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    /// Artists whose name matches an `ILIKE` pattern, ordered by name.
    pub async fn search_by_name(pool: &PgPool, pattern: &str) -> Result<Vec<NamedRef>, sqlx::Error> {
        sqlx::query_as::<_, NamedRef>(
            "SELECT id, name FROM artists WHERE name ILIKE $1 ORDER BY name, id",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }

    /// Overwrite every writable field of an artist.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ArtistForm,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET \
                name = $2, \
                genres = $3, \
                city = $4, \
                state = $5, \
                phone = $6, \
                website = $7, \
                facebook_link = $8, \
                image_link = $9, \
                seeking_venue = $10, \
                seeking_description = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.genres)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.facebook_link)
            .bind(&input.image_link)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .fetch_optional(conn)
            .await
    }

    /// Total number of artist rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
