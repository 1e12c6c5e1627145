//! Venue entity model and DTOs.

use fyyur_core::listing::{LocatedVenue, VenueListing};
use fyyur_core::schedule::ShowSchedule;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::{
    blank_to_none, validate_facebook_link, validate_genres, validate_phone, validate_state,
    MAX_NAME_LEN,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::ArtistAppearance;
use crate::unit_of_work::DisplayName;

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DisplayName for Venue {
    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Writable venue fields, used for both create and full-overwrite update.
///
/// Unknown keys are rejected at deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VenueForm {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[validate(length(min = 1))]
    pub address: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[serde(default)]
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    #[validate(url, custom(function = "validate_facebook_link"))]
    pub facebook_link: Option<String>,
    #[serde(default)]
    #[validate(url)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Trim text fields and drop blank optionals before validation.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            genres: self.genres.into_iter().map(|g| g.trim().to_string()).collect(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: blank_to_none(self.phone),
            website: blank_to_none(self.website),
            facebook_link: blank_to_none(self.facebook_link),
            image_link: blank_to_none(self.image_link),
            seeking_talent: self.seeking_talent,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            genres: venue.genres.clone(),
            address: venue.address.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            phone: venue.phone.clone(),
            website: venue.website.clone(),
            facebook_link: venue.facebook_link.clone(),
            image_link: venue.image_link.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

/// A venue with its upcoming-show count, as read for the area listing.
#[derive(Debug, Clone, FromRow)]
pub struct VenueSummary {
    pub id: DbId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

impl From<VenueSummary> for LocatedVenue {
    fn from(summary: VenueSummary) -> Self {
        Self {
            city: summary.city,
            state: summary.state,
            listing: VenueListing {
                id: summary.id,
                name: summary.name,
                num_upcoming_shows: summary.num_upcoming_shows,
            },
        }
    }
}

/// Venue page: the venue's own attributes plus its shows split around `now`.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    #[serde(flatten)]
    pub shows: ShowSchedule<ArtistAppearance>,
}
