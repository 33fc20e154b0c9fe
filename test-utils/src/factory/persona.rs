//! Persona factory for creating test persona entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test personas with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::persona::PersonaFactory;
///
/// let persona = PersonaFactory::new(&db)
///     .user_id("123456789")
///     .guild_id("987654321")
///     .name("Alice")
///     .prefix("a:")
///     .build()
///     .await?;
/// ```
pub struct PersonaFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    name: String,
    prefix: String,
    avatar_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> PersonaFactory<'a> {
    /// Creates a new PersonaFactory with default values.
    ///
    /// Defaults:
    /// - user_id / guild_id: unique numeric IDs
    /// - name: `"Persona {id}"`
    /// - prefix: `"p{id}:"`
    /// - avatar_url: `None`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: next_id().to_string(),
            guild_id: next_id().to_string(),
            name: format!("Persona {}", id),
            prefix: format!("p{}:", id),
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the Discord ID of the persona's owner.
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the Discord guild ID the persona belongs to.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the persona display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the trigger prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the avatar URL.
    pub fn avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url;
        self
    }

    /// Sets the creation timestamp, which drives store iteration order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the persona entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::persona::Model)` - Created persona entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::persona::Model, DbErr> {
        entity::persona::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            prefix: ActiveValue::Set(self.prefix),
            avatar_url: ActiveValue::Set(self.avatar_url),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a persona with default values.
///
/// Shorthand for `PersonaFactory::new(db).build().await`.
pub async fn create_persona(db: &DatabaseConnection) -> Result<entity::persona::Model, DbErr> {
    PersonaFactory::new(db).build().await
}
