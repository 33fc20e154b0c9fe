//! Message statistic factory for creating test message records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating message statistic records.
pub struct MessageStatFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    guild_id: String,
    channel_id: String,
    message_id: String,
    persona_name: Option<String>,
}

impl<'a> MessageStatFactory<'a> {
    /// Creates a new factory for an ordinary (non-persona) message with unique IDs.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id().to_string(),
            guild_id: next_id().to_string(),
            channel_id: next_id().to_string(),
            message_id: next_id().to_string(),
            persona_name: None,
        }
    }

    /// Sets the Discord message ID.
    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = message_id.into();
        self
    }

    /// Sets the Discord guild ID.
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Marks the message as emitted for the given persona.
    pub fn persona(mut self, persona_name: impl Into<String>) -> Self {
        self.persona_name = Some(persona_name.into());
        self
    }

    /// Builds and inserts the record.
    pub async fn build(self) -> Result<entity::message_stat::Model, DbErr> {
        entity::message_stat::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            message_id: ActiveValue::Set(self.message_id),
            is_persona: ActiveValue::Set(self.persona_name.is_some()),
            persona_name: ActiveValue::Set(self.persona_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an ordinary message record with default values.
pub async fn create_message_stat(
    db: &DatabaseConnection,
) -> Result<entity::message_stat::Model, DbErr> {
    MessageStatFactory::new(db).build().await
}
