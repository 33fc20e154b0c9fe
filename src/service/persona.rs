//! Persona management.
//!
//! Validation sits here rather than in the repository: names are unique per owner
//! and guild, and neither names nor prefixes may be blank.

use crate::{
    data::persona::PersonaRepository,
    error::{persona::PersonaError, AppError},
    model::persona::{CreatePersonaParam, Persona, UpdatePersonaParam},
};
use sea_orm::DatabaseConnection;

pub struct PersonaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonaService<'a> {
    /// Creates a new PersonaService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a persona for a user in a guild.
    ///
    /// The name is trimmed; the prefix is stored verbatim but must contain something
    /// other than whitespace.
    ///
    /// # Returns
    /// - `Ok(Persona)` - The created persona
    /// - `Err(AppError::PersonaErr(EmptyField))` - Blank name or prefix
    /// - `Err(AppError::PersonaErr(AlreadyExists))` - Owner already uses this name here
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, mut param: CreatePersonaParam) -> Result<Persona, AppError> {
        param.name = param.name.trim().to_string();
        ensure_not_blank("name", &param.name)?;
        ensure_not_blank("prefix", &param.prefix)?;

        let repo = PersonaRepository::new(self.db);

        if repo
            .find_by_owner_and_name(param.user_id, param.guild_id, &param.name)
            .await?
            .is_some()
        {
            return Err(PersonaError::AlreadyExists { name: param.name }.into());
        }

        let persona = repo.create(param).await?;

        tracing::info!(
            "User {} created persona '{}' in guild {}",
            persona.user_id,
            persona.name,
            persona.guild_id
        );

        Ok(persona)
    }

    /// Lists a user's personas in a guild, newest first.
    pub async fn list(&self, user_id: u64, guild_id: u64) -> Result<Vec<Persona>, AppError> {
        Ok(PersonaRepository::new(self.db)
            .get_by_owner(user_id, guild_id)
            .await?)
    }

    /// Changes a persona's prefix and/or avatar.
    ///
    /// # Returns
    /// - `Ok(Persona)` - The updated persona
    /// - `Err(AppError::PersonaErr(EmptyField))` - New prefix is blank
    /// - `Err(AppError::PersonaErr(NotFound))` - The user has no persona with this name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, param: UpdatePersonaParam) -> Result<Persona, AppError> {
        if let Some(prefix) = &param.prefix {
            ensure_not_blank("prefix", prefix)?;
        }

        let name = param.name.clone();

        PersonaRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| PersonaError::NotFound { name }.into())
    }

    /// Deletes a persona.
    ///
    /// # Returns
    /// - `Ok(())` - The persona was deleted
    /// - `Err(AppError::PersonaErr(NotFound))` - The user has no persona with this name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, user_id: u64, guild_id: u64, name: &str) -> Result<(), AppError> {
        let deleted = PersonaRepository::new(self.db)
            .delete(user_id, guild_id, name)
            .await?;

        if !deleted {
            return Err(PersonaError::NotFound {
                name: name.to_string(),
            }
            .into());
        }

        tracing::info!(
            "User {} deleted persona '{}' in guild {}",
            user_id,
            name,
            guild_id
        );

        Ok(())
    }

    /// Counts a user's personas in a guild.
    pub async fn count(&self, user_id: u64, guild_id: u64) -> Result<u64, AppError> {
        Ok(PersonaRepository::new(self.db)
            .count_by_owner(user_id, guild_id)
            .await?)
    }
}

fn ensure_not_blank(field: &str, value: &str) -> Result<(), PersonaError> {
    if value.trim().is_empty() {
        return Err(PersonaError::EmptyField {
            field: field.to_string(),
        });
    }

    Ok(())
}
