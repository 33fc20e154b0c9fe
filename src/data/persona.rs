//! Persona data repository for database operations.
//!
//! Personas are scoped to an owner and a guild. Listing returns the most recently
//! created persona first, which is the order prefix matching walks.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::persona::{CreatePersonaParam, Persona, UpdatePersonaParam};

/// Repository providing database operations for persona management.
pub struct PersonaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonaRepository<'a> {
    /// Creates a new PersonaRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new persona.
    ///
    /// Both timestamps are set to the current time. Name uniqueness per owner and
    /// guild is enforced by the service layer and by a unique index in production.
    ///
    /// # Arguments
    /// - `param` - Owner, guild, name, prefix and optional avatar
    ///
    /// # Returns
    /// - `Ok(Persona)` - The created persona
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreatePersonaParam) -> Result<Persona, DbErr> {
        let now = Utc::now();

        let entity = entity::persona::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(param.user_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            prefix: ActiveValue::Set(param.prefix),
            avatar_url: ActiveValue::Set(param.avatar_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Persona::from_entity(entity)
    }

    /// Gets all personas a user owns in a guild, most recently created first.
    ///
    /// Personas created in the same instant are ordered by descending ID so the
    /// order is stable.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the owner
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Vec<Persona>)` - The owner's personas, possibly empty
    /// - `Err(DbErr)` - Database error or unparsable stored ID
    pub async fn get_by_owner(&self, user_id: u64, guild_id: u64) -> Result<Vec<Persona>, DbErr> {
        let entities = entity::prelude::Persona::find()
            .filter(entity::persona::Column::UserId.eq(user_id.to_string()))
            .filter(entity::persona::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::persona::Column::CreatedAt)
            .order_by_desc(entity::persona::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Persona::from_entity).collect()
    }

    /// Finds a persona by owner, guild and name.
    ///
    /// # Returns
    /// - `Ok(Some(Persona))` - The owner has a persona with this name
    /// - `Ok(None)` - No such persona
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_owner_and_name(
        &self,
        user_id: u64,
        guild_id: u64,
        name: &str,
    ) -> Result<Option<Persona>, DbErr> {
        let entity = entity::prelude::Persona::find()
            .filter(entity::persona::Column::UserId.eq(user_id.to_string()))
            .filter(entity::persona::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::persona::Column::Name.eq(name))
            .one(self.db)
            .await?;

        entity.map(Persona::from_entity).transpose()
    }

    /// Finds the first persona in a guild with the given name, regardless of owner.
    ///
    /// Names are only unique per owner, so when several users share a persona name
    /// the oldest record wins.
    ///
    /// # Returns
    /// - `Ok(Some(Persona))` - A persona with this name exists in the guild
    /// - `Ok(None)` - No persona with this name
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<Persona>, DbErr> {
        let entity = entity::prelude::Persona::find()
            .filter(entity::persona::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::persona::Column::Name.eq(name))
            .order_by_asc(entity::persona::Column::Id)
            .one(self.db)
            .await?;

        entity.map(Persona::from_entity).transpose()
    }

    /// Updates a persona's prefix and/or avatar.
    ///
    /// `updated_at` is always bumped, even when no field changes.
    ///
    /// # Returns
    /// - `Ok(Some(Persona))` - The updated persona
    /// - `Ok(None)` - No persona matched owner, guild and name
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, param: UpdatePersonaParam) -> Result<Option<Persona>, DbErr> {
        let Some(existing) = entity::prelude::Persona::find()
            .filter(entity::persona::Column::UserId.eq(param.user_id.to_string()))
            .filter(entity::persona::Column::GuildId.eq(param.guild_id.to_string()))
            .filter(entity::persona::Column::Name.eq(param.name.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::persona::ActiveModel = existing.into();
        if let Some(prefix) = param.prefix {
            active.prefix = ActiveValue::Set(prefix);
        }
        if let Some(avatar_url) = param.avatar_url {
            active.avatar_url = ActiveValue::Set(avatar_url);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Persona::from_entity(entity).map(Some)
    }

    /// Deletes a persona by owner, guild and name.
    ///
    /// # Returns
    /// - `Ok(true)` - The persona existed and was deleted
    /// - `Ok(false)` - No persona matched
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, user_id: u64, guild_id: u64, name: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Persona::delete_many()
            .filter(entity::persona::Column::UserId.eq(user_id.to_string()))
            .filter(entity::persona::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::persona::Column::Name.eq(name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts the personas a user owns in a guild.
    pub async fn count_by_owner(&self, user_id: u64, guild_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Persona::find()
            .filter(entity::persona::Column::UserId.eq(user_id.to_string()))
            .filter(entity::persona::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await
    }
}
