use maraton_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `sponsors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sponsor {
    #[serde(serialize_with = "super::id_as_string")]
    pub id: DbId,
    pub name: String,
    pub logo: String,
    /// Free-text tier label; lists sort on it lexicographically.
    pub tier: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a sponsor.
#[derive(Debug, Clone)]
pub struct CreateSponsor {
    pub name: String,
    pub logo: String,
    pub tier: String,
}
