//! Persona domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// A named alter-ego a user can speak as, triggered by a message prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct Persona {
    /// Unique identifier for the persona record.
    pub id: i32,
    /// Discord ID of the user who owns the persona.
    pub user_id: u64,
    /// Discord guild the persona belongs to.
    pub guild_id: u64,
    /// Display name used as the webhook username.
    pub name: String,
    /// Literal text a message must start with to be proxied.
    pub prefix: String,
    /// Avatar shown on proxied messages, if set.
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Persona {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(Persona)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse user_id or guild_id as u64
    pub fn from_entity(entity: entity::persona::Model) -> Result<Self, DbErr> {
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;

        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            id: entity.id,
            user_id,
            guild_id,
            name: entity.name,
            prefix: entity.prefix,
            avatar_url: entity.avatar_url,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Returns the message text with this persona's prefix removed and trimmed.
    ///
    /// Returns `None` when the text does not start with the prefix.
    pub fn strip_prefix<'t>(&self, text: &'t str) -> Option<&'t str> {
        text.strip_prefix(self.prefix.as_str()).map(str::trim)
    }
}

/// Parameters for creating a persona.
#[derive(Debug, Clone)]
pub struct CreatePersonaParam {
    pub user_id: u64,
    pub guild_id: u64,
    pub name: String,
    pub prefix: String,
    pub avatar_url: Option<String>,
}

/// Parameters for updating a persona identified by owner, guild and name.
///
/// Fields left as `None` keep their stored value. `avatar_url: Some(None)` clears
/// the avatar.
#[derive(Debug, Clone)]
pub struct UpdatePersonaParam {
    pub user_id: u64,
    pub guild_id: u64,
    pub name: String,
    pub prefix: Option<String>,
    pub avatar_url: Option<Option<String>>,
}
