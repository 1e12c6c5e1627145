//! Domain logic for the Fyyur booking directory.
//!
//! This crate has no database or HTTP dependencies. Rows are handed in by the
//! caller as read-only snapshots and results are plain data.

pub mod clock;
pub mod datetime;
pub mod error;
pub mod listing;
pub mod notice;
pub mod schedule;
pub mod search;
pub mod types;
pub mod validation;
