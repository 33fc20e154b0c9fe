//! Reply annotation for proxied messages.
//!
//! Webhook messages cannot reply natively, so when a persona message answers another
//! persona's message the human behind the replied-to persona is mentioned instead.

use crate::service::proxy::{gateway::ProxyGateway, store::PersonaStore};

/// Marker placed before the mention of the replied-to persona's owner.
pub const REPLY_ARROW: &str = "↪️";

pub struct ReplyResolver<'a> {
    gateway: &'a dyn ProxyGateway,
    personas: &'a dyn PersonaStore,
}

impl<'a> ReplyResolver<'a> {
    pub fn new(gateway: &'a dyn ProxyGateway, personas: &'a dyn PersonaStore) -> Self {
        Self { gateway, personas }
    }

    /// Builds the mention prefix for a reply to `referenced_message_id`.
    ///
    /// Best-effort: every failure yields `None` and the proxy continues without
    /// an annotation.
    ///
    /// # Returns
    /// - `Some("↪️ <@owner>")` - The replied-to message came from a known persona
    /// - `None` - Human-authored, unknown persona, or the message could not be fetched
    pub async fn mention_prefix(
        &self,
        guild_id: u64,
        channel_id: u64,
        referenced_message_id: u64,
    ) -> Option<String> {
        let referenced = match self
            .gateway
            .fetch_message(channel_id, referenced_message_id)
            .await
        {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    "Could not fetch replied-to message {} in channel {}: {}",
                    referenced_message_id,
                    channel_id,
                    e
                );
                return None;
            }
        };

        referenced.webhook_id?;

        match self
            .personas
            .find_by_name(guild_id, &referenced.author_name)
            .await
        {
            Ok(Some(persona)) => Some(format!("{} <@{}>", REPLY_ARROW, persona.user_id)),
            Ok(None) => None,
            Err(e) => {
                tracing::debug!(
                    "Could not look up persona '{}' in guild {}: {}",
                    referenced.author_name,
                    guild_id,
                    e
                );
                None
            }
        }
    }
}
