//! Message statistic domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// A message recorded for server activity statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageStat {
    pub id: i32,
    pub user_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
    /// ID of the message as it exists in Discord (the webhook message for personas).
    pub message_id: u64,
    pub is_persona: bool,
    pub persona_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl MessageStat {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(MessageStat)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - A stored Discord ID is not a valid u64
    pub fn from_entity(entity: entity::message_stat::Model) -> Result<Self, DbErr> {
        let parse = |field: &str, value: &str| {
            value
                .parse::<u64>()
                .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
        };

        Ok(Self {
            id: entity.id,
            user_id: parse("user_id", &entity.user_id)?,
            guild_id: parse("guild_id", &entity.guild_id)?,
            channel_id: parse("channel_id", &entity.channel_id)?,
            message_id: parse("message_id", &entity.message_id)?,
            is_persona: entity.is_persona,
            persona_name: entity.persona_name,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for recording one message.
///
/// `persona_name` is `Some` exactly when the message was emitted for a persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMessageStatParam {
    pub user_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub persona_name: Option<String>,
}
