//! Show entity model, DTOs and the per-side display records.

use fyyur_core::datetime::{format_datetime, DateStyle};
use fyyur_core::schedule::Booking;
use fyyur_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::unit_of_work::DisplayName;

/// A show row from the `shows` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub venue_id: DbId,
    pub artist_id: DbId,
    pub start_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DisplayName for Show {
    fn display_name(&self) -> Option<&str> {
        None
    }
}

/// DTO for booking a show. Both references must resolve to existing rows;
/// the foreign keys enforce that at commit.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ShowForm {
    #[validate(range(min = 1))]
    pub venue_id: DbId,
    #[validate(range(min = 1))]
    pub artist_id: DbId,
    pub start_time: Timestamp,
}

/// Row for the `/shows` index.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub venue_id: DbId,
    pub venue_name: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// A show joined to the entity on the other side of the relation.
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub counterpart_id: DbId,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: Timestamp,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            counterpart_id: row.counterpart_id,
            counterpart_name: row.counterpart_name,
            counterpart_image_link: row.counterpart_image_link,
            start_time: row.start_time,
        }
    }
}

/// A show on a venue page: who is playing and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistAppearance {
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl ArtistAppearance {
    pub fn from_booking(booking: Booking, style: DateStyle) -> Self {
        Self {
            artist_id: booking.counterpart_id,
            artist_name: booking.counterpart_name,
            artist_image_link: booking.counterpart_image_link,
            start_time: format_datetime(booking.start_time, style),
        }
    }
}

/// A show on an artist page: where they play and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueAppearance {
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl VenueAppearance {
    pub fn from_booking(booking: Booking, style: DateStyle) -> Self {
        Self {
            venue_id: booking.counterpart_id,
            venue_name: booking.counterpart_name,
            venue_image_link: booking.counterpart_image_link,
            start_time: format_datetime(booking.start_time, style),
        }
    }
}
