//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Reads accept `&PgPool`; writes accept `&mut PgConnection` so they can be
//! composed inside a [`crate::unit_of_work`] transaction.

pub mod artist_repo;
pub mod show_repo;
pub mod venue_repo;

pub use artist_repo::ArtistRepo;
pub use show_repo::ShowRepo;
pub use venue_repo::VenueRepo;
