//! Persona message proxying.
//!
//! A human message that starts with one of its author's persona prefixes is re-posted
//! through a channel webhook under the persona's name and avatar, then the original is
//! deleted. Every other human message is only recorded for statistics.
//!
//! The service works against the collaborator traits in [`store`], [`gateway`] and
//! [`webhook`], so the same dispatch path runs in production and in tests.

pub mod gateway;
pub mod matcher;
pub mod reply;
pub mod store;
pub mod webhook;

#[cfg(test)]
mod test;

use crate::{
    error::AppError,
    model::{
        message_stat::CreateMessageStatParam,
        persona::Persona,
        proxy::{InboundMessage, OutgoingMessage, ProxyOutcome},
    },
    service::proxy::{
        gateway::ProxyGateway,
        matcher::PersonaMatcher,
        reply::ReplyResolver,
        store::{AuditStore, PersonaStore},
        webhook::{WebhookCache, WebhookManager},
    },
};

/// Decides what happens to each guild message and carries out persona proxies.
pub struct ProxyService<'a> {
    personas: &'a dyn PersonaStore,
    audit: &'a dyn AuditStore,
    gateway: &'a dyn ProxyGateway,
    webhooks: &'a dyn WebhookCache,
}

impl<'a> ProxyService<'a> {
    /// Creates a new ProxyService instance.
    ///
    /// # Arguments
    /// - `personas` - Persona lookup used for matching and reply resolution
    /// - `audit` - Sink for message statistics
    /// - `gateway` - Discord operations
    /// - `webhooks` - Process-wide webhook cache
    pub fn new(
        personas: &'a dyn PersonaStore,
        audit: &'a dyn AuditStore,
        gateway: &'a dyn ProxyGateway,
        webhooks: &'a dyn WebhookCache,
    ) -> Self {
        Self {
            personas,
            audit,
            gateway,
            webhooks,
        }
    }

    /// Handles one guild message.
    ///
    /// # Returns
    /// - `Ok(ProxyOutcome::Ignored)` - Bot or webhook author
    /// - `Ok(ProxyOutcome::Recorded)` - No persona matched; message recorded as-is
    /// - `Ok(ProxyOutcome::Dropped)` - Persona matched but only the prefix was sent
    /// - `Ok(ProxyOutcome::Proxied)` - Re-posted through the channel webhook
    /// - `Err(AppError::ProxyErr)` - Bot lacks Manage Webhooks; original left in place
    /// - `Err(AppError)` - Persona lookup, webhook or send failure; original left in place
    pub async fn handle_message(&self, message: &InboundMessage) -> Result<ProxyOutcome, AppError> {
        if message.author_is_automated {
            return Ok(ProxyOutcome::Ignored);
        }

        if !message.content.is_empty() {
            let persona = PersonaMatcher::new(self.personas)
                .find_match(message.author_id, message.guild_id, &message.content)
                .await?;

            if let Some(persona) = persona {
                return self.dispatch(message, &persona).await;
            }
        }

        self.audit
            .record_message(CreateMessageStatParam {
                user_id: message.author_id,
                guild_id: message.guild_id,
                channel_id: message.channel_id,
                message_id: message.message_id,
                persona_name: None,
            })
            .await;

        Ok(ProxyOutcome::Recorded)
    }

    /// Re-posts a matched message as `persona`.
    ///
    /// The webhook send must succeed before the original is deleted. Deleting the
    /// original is best-effort: a failure leaves both messages visible.
    async fn dispatch(
        &self,
        message: &InboundMessage,
        persona: &Persona,
    ) -> Result<ProxyOutcome, AppError> {
        let body = persona.strip_prefix(&message.content).unwrap_or_default();
        if body.is_empty() {
            return Ok(ProxyOutcome::Dropped);
        }

        let webhook = WebhookManager::new(self.gateway, self.webhooks)
            .acquire(message.channel_id)
            .await?;

        let mention = match message.referenced_message_id {
            Some(referenced_id) => {
                ReplyResolver::new(self.gateway, self.personas)
                    .mention_prefix(message.guild_id, message.channel_id, referenced_id)
                    .await
            }
            None => None,
        };

        let content = match mention {
            Some(mention) => format!("{} {}", mention, body),
            None => body.to_string(),
        };

        let outgoing = OutgoingMessage {
            content,
            username: persona.name.clone(),
            avatar_url: persona
                .avatar_url
                .clone()
                .unwrap_or_else(|| message.author_avatar_url.clone()),
        };

        let sent_id = self.gateway.execute_webhook(&webhook, outgoing).await?;

        self.audit
            .record_message(CreateMessageStatParam {
                user_id: message.author_id,
                guild_id: message.guild_id,
                channel_id: message.channel_id,
                message_id: sent_id,
                persona_name: Some(persona.name.clone()),
            })
            .await;

        if let Err(e) = self
            .gateway
            .delete_message(message.channel_id, message.message_id)
            .await
        {
            tracing::warn!(
                "Proxied message {} as '{}' but failed to delete the original: {}",
                message.message_id,
                persona.name,
                e
            );
        }

        Ok(ProxyOutcome::Proxied {
            message_id: sent_id,
        })
    }
}
