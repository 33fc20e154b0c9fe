use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::{
    data::{message_stat::MessageStatRepository, persona::PersonaRepository},
    error::AppError,
    model::proxy::{InboundMessage, ProxyOutcome},
    service::proxy::{gateway::SerenityGateway, webhook::InMemoryWebhookCache, ProxyService},
};

/// Handle message creation in a channel
///
/// Runs the persona proxy for guild messages. Errors are logged here and never
/// propagate, so a failure on one message has no effect on the next.
pub async fn handle_message(
    db: &DatabaseConnection,
    webhook_cache: &InMemoryWebhookCache,
    ctx: Context,
    message: Message,
) {
    // Direct messages are never proxied or recorded
    let Some(inbound) = InboundMessage::from_message(&message) else {
        return;
    };

    let personas = PersonaRepository::new(db);
    let audit = MessageStatRepository::new(db);
    let gateway = SerenityGateway::new(ctx);
    let service = ProxyService::new(&personas, &audit, &gateway, webhook_cache);

    match service.handle_message(&inbound).await {
        Ok(ProxyOutcome::Proxied { message_id }) => {
            tracing::debug!(
                "Proxied message {} in channel {} as {}",
                inbound.message_id,
                inbound.channel_id,
                message_id
            );
        }
        Ok(ProxyOutcome::Dropped) => {
            tracing::debug!(
                "Dropped prefix-only message {} in channel {}",
                inbound.message_id,
                inbound.channel_id
            );
        }
        Ok(ProxyOutcome::Ignored | ProxyOutcome::Recorded) => {}
        Err(AppError::ProxyErr(e)) => {
            tracing::warn!("Skipped proxy for message {}: {}", inbound.message_id, e);
        }
        Err(e) => {
            tracing::error!(
                "Failed to proxy message {} in channel {}: {}",
                inbound.message_id,
                inbound.channel_id,
                e
            );
        }
    }
}
