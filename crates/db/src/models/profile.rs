//! Profile (user) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use atrium_core::types::{DbId, Timestamp};

/// A profile row from the `profiles` table.
///
/// The password hash never leaves the database layer; [`Profile::public`]
/// strips it before serialization.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The client-visible projection of a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: DbId,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub active: bool,
    pub created_at: Timestamp,
}

impl Profile {
    /// Strip credentials for API responses.
    pub fn public(self) -> PublicProfile {
        PublicProfile {
            id: self.id,
            email: self.email,
            full_name: self.full_name,
            phone: self.phone,
            role: self.role,
            active: self.active,
            created_at: self.created_at,
        }
    }
}

/// DTO for registering a new profile. The hash is computed by the API layer.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
}
