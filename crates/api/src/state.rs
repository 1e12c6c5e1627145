use std::sync::Arc;

use fyyur_core::clock::Clock;
use fyyur_core::types::Timestamp;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted and the clock sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: fyyur_db::DbPool,
    /// Source of "now" for classifying shows as past or upcoming.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Read the clock once; a request uses the same instant throughout.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
