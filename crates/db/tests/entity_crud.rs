//! Integration tests for the repository layer.
//!
//! Exercises the repositories directly against a real database:
//! - Create / find / update round trips for venues and artists
//! - Genre arrays survive storage
//! - Foreign key violations when booking shows
//! - Cascade delete from venue to shows

mod common;

use chrono::Duration;
use common::{artist_form, now, show_form, venue_form};
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Venues
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_venue(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = VenueRepo::create(&mut conn, &venue_form("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    drop(conn);

    assert_eq!(created.name, "The Musical Hop");
    assert_eq!(created.genres, vec!["Jazz", "Folk"]);
    assert!(created.seeking_talent);

    let found = VenueRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.city, "San Francisco");
    assert_eq!(found.phone.as_deref(), Some("123-123-1234"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_venue_returns_none(pool: PgPool) {
    assert!(VenueRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_venue_overwrites_all_fields(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let created = VenueRepo::create(&mut conn, &venue_form("Old Name", "Austin", "TX"))
        .await
        .unwrap();

    let mut form = venue_form("New Name", "Dallas", "TX");
    form.phone = None;
    form.genres = vec!["Blues".to_string()];
    form.seeking_talent = false;

    let updated = VenueRepo::update(&mut conn, created.id, &form)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, "Dallas");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.genres, vec!["Blues"]);
    assert!(!updated.seeking_talent);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_venue_returns_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let result = VenueRepo::update(&mut conn, 424_242, &venue_form("X", "Austin", "TX"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_venue_cascades_to_shows(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let venue = VenueRepo::create(&mut conn, &venue_form("Doomed Hall", "Boise", "ID"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&mut conn, &artist_form("Guns N Petals"))
        .await
        .unwrap();
    ShowRepo::create(&mut conn, &show_form(venue.id, artist.id, now()))
        .await
        .unwrap();
    ShowRepo::create(&mut conn, &show_form(venue.id, artist.id, now() + Duration::days(3)))
        .await
        .unwrap();
    drop(conn);

    assert_eq!(ShowRepo::count_for_venue(&pool, venue.id).await.unwrap(), 2);

    let mut conn = pool.acquire().await.unwrap();
    let deleted = VenueRepo::delete(&mut conn, venue.id).await.unwrap().unwrap();
    drop(conn);

    assert_eq!(deleted.name, "Doomed Hall");
    assert!(VenueRepo::find_by_id(&pool, venue.id).await.unwrap().is_none());
    assert_eq!(ShowRepo::count_for_venue(&pool, venue.id).await.unwrap(), 0);
    // The artist is untouched.
    assert!(ArtistRepo::find_by_id(&pool, artist.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_venue_returns_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert!(VenueRepo::delete(&mut conn, 777).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_update_artist(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &artist_form("Matt Quevedo"))
        .await
        .unwrap();
    assert_eq!(artist.genres, vec!["Rock n Roll"]);
    assert!(!artist.seeking_venue);

    let mut form = artist_form("Matt Quevedo");
    form.seeking_venue = true;
    form.seeking_description = Some("Looking for shows in the Bay Area".to_string());
    let updated = ArtistRepo::update(&mut conn, artist.id, &form)
        .await
        .unwrap()
        .unwrap();
    drop(conn);

    assert!(updated.seeking_venue);
    assert_eq!(
        updated.seeking_description.as_deref(),
        Some("Looking for shows in the Bay Area")
    );
    assert_eq!(ArtistRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_artist_names_is_ordered_by_name(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    for name in ["The Wild Sax Band", "Guns N Petals", "Matt Quevedo"] {
        ArtistRepo::create(&mut conn, &artist_form(name)).await.unwrap();
    }
    drop(conn);

    let names: Vec<String> = ArtistRepo::list_names(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"]);
}

// ---------------------------------------------------------------------------
// Shows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_show_with_unknown_venue_violates_fk(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let artist = ArtistRepo::create(&mut conn, &artist_form("Orphan Act"))
        .await
        .unwrap();

    let err = ShowRepo::create(&mut conn, &show_form(9_999, artist.id, now()))
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => assert_eq!(db_err.code().as_deref(), Some("23503")),
        other => panic!("expected a database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_shows_joins_names(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let venue = VenueRepo::create(&mut conn, &venue_form("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&mut conn, &artist_form("Guns N Petals"))
        .await
        .unwrap();
    let later = now() + Duration::days(10);
    ShowRepo::create(&mut conn, &show_form(venue.id, artist.id, later))
        .await
        .unwrap();
    ShowRepo::create(&mut conn, &show_form(venue.id, artist.id, now()))
        .await
        .unwrap();
    drop(conn);

    let shows = ShowRepo::list(&pool).await.unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].start_time, now());
    assert_eq!(shows[1].start_time, later);
    assert_eq!(shows[0].venue_name, "The Musical Hop");
    assert_eq!(shows[0].artist_name, "Guns N Petals");
    assert_eq!(
        shows[0].artist_image_link.as_deref(),
        Some("https://images.example.com/artist.jpg")
    );
}
