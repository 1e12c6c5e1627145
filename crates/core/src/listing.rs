//! Venue listing grouped by area.
//!
//! Groups are derived from the venues themselves: an area exists only while
//! at least one venue is located there. Areas are ordered by `(state, city)`;
//! venues keep the order they were supplied in, so a fixed snapshot always
//! produces the same listing.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::DbId;

/// One venue entry within an area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VenueListing {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A venue together with the location it is grouped under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVenue {
    pub city: String,
    pub state: String,
    pub listing: VenueListing,
}

/// All venues sharing one `(city, state)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Area {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListing>,
}

/// Partition venues into areas keyed by their exact `(city, state)` pair.
///
/// Every input venue lands in exactly one area. Two venues in cities of the
/// same name but different states are kept apart.
pub fn group_by_area<I>(venues: I) -> Vec<Area>
where
    I: IntoIterator<Item = LocatedVenue>,
{
    let mut areas: BTreeMap<(String, String), Vec<VenueListing>> = BTreeMap::new();

    for venue in venues {
        areas
            .entry((venue.state, venue.city))
            .or_default()
            .push(venue.listing);
    }

    areas
        .into_iter()
        .map(|((state, city), venues)| Area {
            city,
            state,
            venues,
        })
        .collect()
}
