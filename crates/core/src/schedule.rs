//! Past/upcoming partitioning of shows.
//!
//! A show is upcoming when its start time is strictly after the reference
//! instant; everything else, including a show starting exactly at `now`, is
//! past.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// Whether a show starting at `start_time` is still ahead of `now`.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time > now
}

/// A show as seen from one side of the venue/artist relation: the entity on
/// the other side plus the start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub counterpart_id: DbId,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: Timestamp,
}

/// Shows split into past and upcoming, with their counts.
///
/// Serializes to `past_shows`, `upcoming_shows`, `past_shows_count` and
/// `upcoming_shows_count` so it can be flattened into a detail record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowSchedule<T> {
    pub past_shows: Vec<T>,
    pub upcoming_shows: Vec<T>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl<T> ShowSchedule<T> {
    /// Partition `bookings` around `now` and project each into `T`.
    ///
    /// Input order is preserved within each side.
    pub fn partition<F>(bookings: Vec<Booking>, now: Timestamp, project: F) -> Self
    where
        F: Fn(Booking) -> T,
    {
        let (upcoming, past): (Vec<Booking>, Vec<Booking>) = bookings
            .into_iter()
            .partition(|b| is_upcoming(b.start_time, now));

        let past_shows: Vec<T> = past.into_iter().map(&project).collect();
        let upcoming_shows: Vec<T> = upcoming.into_iter().map(&project).collect();

        Self {
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}
