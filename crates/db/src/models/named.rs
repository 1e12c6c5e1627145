//! `{id, name}` pairs returned by searches and the artist index.

use fyyur_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct NamedRef {
    pub id: DbId,
    pub name: String,
}
