//! Storage collaborators consumed by the message proxy.
//!
//! The proxy only needs a narrow slice of the persona and statistics repositories,
//! expressed here as traits so the dispatcher can be exercised against any store.

use serenity::async_trait;

use crate::{
    data::{message_stat::MessageStatRepository, persona::PersonaRepository},
    error::AppError,
    model::{message_stat::CreateMessageStatParam, persona::Persona},
};

/// Read access to personas.
#[async_trait]
pub trait PersonaStore: Send + Sync {
    /// Lists the personas a user owns in a guild, in matching order.
    async fn list(&self, owner_id: u64, guild_id: u64) -> Result<Vec<Persona>, AppError>;

    /// Finds the first persona in a guild with the given name, whoever owns it.
    async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<Persona>, AppError>;
}

/// Write-only statistics sink.
///
/// Recording never fails from the caller's point of view; implementations log
/// their own errors.
#[async_trait]
pub trait AuditStore: Send + Sync {
    async fn record_message(&self, record: CreateMessageStatParam);
}

#[async_trait]
impl PersonaStore for PersonaRepository<'_> {
    async fn list(&self, owner_id: u64, guild_id: u64) -> Result<Vec<Persona>, AppError> {
        Ok(self.get_by_owner(owner_id, guild_id).await?)
    }

    async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<Persona>, AppError> {
        Ok(PersonaRepository::find_by_name(self, guild_id, name).await?)
    }
}

#[async_trait]
impl AuditStore for MessageStatRepository<'_> {
    async fn record_message(&self, record: CreateMessageStatParam) {
        let message_id = record.message_id;

        match self.create(record).await {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("Message {} was already recorded", message_id);
            }
            Err(e) => {
                tracing::warn!("Failed to record message {}: {}", message_id, e);
            }
        }
    }
}
