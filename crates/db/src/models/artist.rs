//! Artist entity model and DTOs.

use fyyur_core::schedule::ShowSchedule;
use fyyur_core::types::{DbId, Timestamp};
use fyyur_core::validation::{
    blank_to_none, validate_facebook_link, validate_genres, validate_phone, validate_state,
    MAX_NAME_LEN,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::show::VenueAppearance;
use crate::unit_of_work::DisplayName;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DisplayName for Artist {
    fn display_name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// Writable artist fields, used for both create and full-overwrite update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ArtistForm {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
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
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Trim text fields and drop blank optionals before validation.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            genres: self.genres.into_iter().map(|g| g.trim().to_string()).collect(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: blank_to_none(self.phone),
            website: blank_to_none(self.website),
            facebook_link: blank_to_none(self.facebook_link),
            image_link: blank_to_none(self.image_link),
            seeking_venue: self.seeking_venue,
            seeking_description: blank_to_none(self.seeking_description),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            genres: artist.genres.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            website: artist.website.clone(),
            facebook_link: artist.facebook_link.clone(),
            image_link: artist.image_link.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

/// Artist page: the artist's own attributes plus their shows split around `now`.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    #[serde(flatten)]
    pub shows: ShowSchedule<VenueAppearance>,
}
