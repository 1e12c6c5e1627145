#![allow(dead_code)]

use chrono::TimeZone;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_db::models::artist::{Artist, ArtistForm};
use fyyur_db::models::show::{Show, ShowForm};
use fyyur_db::models::venue::{Venue, VenueForm};
use fyyur_db::mutations;
use sqlx::PgPool;

/// Reference instant used by tests instead of the wall clock.
pub fn now() -> Timestamp {
    chrono::Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

pub fn venue_form(name: &str, city: &str, state: &str) -> VenueForm {
    VenueForm {
        name: name.to_string(),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        address: "1015 Folsom Street".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        phone: Some("123-123-1234".to_string()),
        website: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        image_link: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist.".to_string()),
    }
}

pub fn artist_form(name: &str) -> ArtistForm {
    ArtistForm {
        name: name.to_string(),
        genres: vec!["Rock n Roll".to_string()],
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        website: None,
        facebook_link: None,
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        seeking_venue: false,
        seeking_description: None,
    }
}

pub fn show_form(venue_id: DbId, artist_id: DbId, start_time: Timestamp) -> ShowForm {
    ShowForm {
        venue_id,
        artist_id,
        start_time,
    }
}

pub async fn seed_venue(pool: &PgPool, name: &str, city: &str, state: &str) -> Venue {
    mutations::create_venue(pool, venue_form(name, city, state))
        .await
        .into_result()
        .unwrap()
}

pub async fn seed_artist(pool: &PgPool, name: &str) -> Artist {
    mutations::create_artist(pool, artist_form(name))
        .await
        .into_result()
        .unwrap()
}

pub async fn seed_show(
    pool: &PgPool,
    venue_id: DbId,
    artist_id: DbId,
    start_time: Timestamp,
) -> Show {
    mutations::create_show(pool, show_form(venue_id, artist_id, start_time))
        .await
        .into_result()
        .unwrap()
}
