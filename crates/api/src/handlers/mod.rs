//! Request handlers for venues, artists and shows.
//!
//! Handlers stay thin: reads go through `fyyur_db::directory` with the
//! request's `now`, writes through `fyyur_db::mutations`, and the outcome is
//! rendered by [`crate::response`].

pub mod artist;
pub mod show;
pub mod venue;
