//! Read paths: area listing, name search, detail pages and indexes.
//!
//! Every function takes `now` (where it matters) from the caller rather than
//! reading the clock, so one request classifies all shows against the same
//! instant. A missing entity is reported as `Ok(None)`.

use fyyur_core::datetime::DateStyle;
use fyyur_core::listing::{group_by_area, Area, LocatedVenue};
use fyyur_core::schedule::{Booking, ShowSchedule};
use fyyur_core::search::{contains_pattern, SearchResults};
use fyyur_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{ArtistDetail, ArtistForm};
use crate::models::named::NamedRef;
use crate::models::show::{ArtistAppearance, ShowListing, VenueAppearance};
use crate::models::venue::{VenueDetail, VenueForm};
use crate::repositories::{ArtistRepo, ShowRepo, VenueRepo};

/// Venues grouped by `(city, state)` with their upcoming-show counts.
pub async fn list_grouped_venues(pool: &PgPool, now: Timestamp) -> Result<Vec<Area>, sqlx::Error> {
    let summaries = VenueRepo::list_summaries(pool, now).await?;
    Ok(group_by_area(summaries.into_iter().map(LocatedVenue::from)))
}

/// Venues whose name contains `term`, ignoring case.
///
/// A term no stored name can contain (one with NUL) finds nothing.
pub async fn search_venues(
    pool: &PgPool,
    term: &str,
) -> Result<SearchResults<NamedRef>, sqlx::Error> {
    let Some(pattern) = contains_pattern(term) else {
        return Ok(SearchResults::new(Vec::new()));
    };
    let matches = VenueRepo::search_by_name(pool, &pattern).await?;
    Ok(SearchResults::new(matches))
}

/// Artists whose name contains `term`, ignoring case.
pub async fn search_artists(
    pool: &PgPool,
    term: &str,
) -> Result<SearchResults<NamedRef>, sqlx::Error> {
    let Some(pattern) = contains_pattern(term) else {
        return Ok(SearchResults::new(Vec::new()));
    };
    let matches = ArtistRepo::search_by_name(pool, &pattern).await?;
    Ok(SearchResults::new(matches))
}

/// A venue with its shows split into past and upcoming relative to `now`.
pub async fn venue_detail(
    pool: &PgPool,
    id: DbId,
    now: Timestamp,
    style: DateStyle,
) -> Result<Option<VenueDetail>, sqlx::Error> {
    let Some(venue) = VenueRepo::find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let bookings: Vec<Booking> = ShowRepo::bookings_for_venue(pool, id)
        .await?
        .into_iter()
        .map(Booking::from)
        .collect();
    let shows = ShowSchedule::partition(bookings, now, |b| {
        ArtistAppearance::from_booking(b, style)
    });

    Ok(Some(VenueDetail { venue, shows }))
}

/// An artist with their shows split into past and upcoming relative to `now`.
pub async fn artist_detail(
    pool: &PgPool,
    id: DbId,
    now: Timestamp,
    style: DateStyle,
) -> Result<Option<ArtistDetail>, sqlx::Error> {
    let Some(artist) = ArtistRepo::find_by_id(pool, id).await? else {
        return Ok(None);
    };

    let bookings: Vec<Booking> = ShowRepo::bookings_for_artist(pool, id)
        .await?
        .into_iter()
        .map(Booking::from)
        .collect();
    let shows = ShowSchedule::partition(bookings, now, |b| {
        VenueAppearance::from_booking(b, style)
    });

    Ok(Some(ArtistDetail { artist, shows }))
}

/// Current field values of a venue, for prefilling its edit form.
pub async fn venue_form(pool: &PgPool, id: DbId) -> Result<Option<VenueForm>, sqlx::Error> {
    Ok(VenueRepo::find_by_id(pool, id)
        .await?
        .map(|venue| VenueForm::from(&venue)))
}

/// Current field values of an artist, for prefilling their edit form.
pub async fn artist_form(pool: &PgPool, id: DbId) -> Result<Option<ArtistForm>, sqlx::Error> {
    Ok(ArtistRepo::find_by_id(pool, id)
        .await?
        .map(|artist| ArtistForm::from(&artist)))
}

/// Every artist as an `{id, name}` pair.
pub async fn list_artists(pool: &PgPool) -> Result<Vec<NamedRef>, sqlx::Error> {
    ArtistRepo::list_names(pool).await
}

/// Every show with venue and artist names.
pub async fn list_shows(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
    ShowRepo::list(pool).await
}
