//! Discord operations used by the message proxy.
//!
//! `ProxyGateway` lists exactly the REST calls the proxy makes so that dispatch can
//! be tested without a gateway connection. `SerenityGateway` is the production
//! implementation over a serenity `Context`.

use serenity::all::{
    ChannelId, Context, CreateWebhook, ExecuteWebhook, MessageId, UserId, Webhook, WebhookId,
};
use serenity::async_trait;

use crate::{
    error::{proxy::ProxyError, AppError},
    model::proxy::{OutgoingMessage, ReferencedMessage},
};

#[async_trait]
pub trait ProxyGateway: Send + Sync {
    /// Discord ID of the bot account.
    fn bot_user_id(&self) -> u64;

    /// Whether the bot holds Manage Webhooks in the channel.
    async fn can_manage_webhooks(&self, channel_id: u64) -> Result<bool, AppError>;

    /// Re-fetches a webhook, failing if it no longer exists.
    async fn fetch_webhook(&self, webhook_id: u64) -> Result<Webhook, AppError>;

    async fn list_webhooks(&self, channel_id: u64) -> Result<Vec<Webhook>, AppError>;

    async fn create_webhook(&self, channel_id: u64, name: &str) -> Result<Webhook, AppError>;

    /// Posts through the webhook and returns the ID of the created message.
    async fn execute_webhook(
        &self,
        webhook: &Webhook,
        message: OutgoingMessage,
    ) -> Result<u64, AppError>;

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<ReferencedMessage, AppError>;

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError>;
}

/// `ProxyGateway` backed by serenity's HTTP client and cache.
pub struct SerenityGateway {
    ctx: Context,
    bot_user_id: u64,
}

impl SerenityGateway {
    /// Creates a gateway for one event, reading the bot's user ID from the cache.
    pub fn new(ctx: Context) -> Self {
        let bot_user_id = ctx.cache.current_user().id.get();
        Self { ctx, bot_user_id }
    }
}

#[async_trait]
impl ProxyGateway for SerenityGateway {
    fn bot_user_id(&self) -> u64 {
        self.bot_user_id
    }

    async fn can_manage_webhooks(&self, channel_id: u64) -> Result<bool, AppError> {
        let channel = ChannelId::new(channel_id)
            .to_channel(&self.ctx)
            .await?
            .guild()
            .ok_or(ProxyError::ChannelUnavailable { channel_id })?;

        // Served from the cache when the bot's member is known, over HTTP otherwise
        let member = channel
            .guild_id
            .member(&self.ctx, UserId::new(self.bot_user_id))
            .await?;

        let guild = self
            .ctx
            .cache
            .guild(channel.guild_id)
            .ok_or(ProxyError::ChannelUnavailable { channel_id })?;

        Ok(guild.user_permissions_in(&channel, &member).manage_webhooks())
    }

    async fn fetch_webhook(&self, webhook_id: u64) -> Result<Webhook, AppError> {
        Ok(self.ctx.http.get_webhook(WebhookId::new(webhook_id)).await?)
    }

    async fn list_webhooks(&self, channel_id: u64) -> Result<Vec<Webhook>, AppError> {
        Ok(ChannelId::new(channel_id).webhooks(&self.ctx).await?)
    }

    async fn create_webhook(&self, channel_id: u64, name: &str) -> Result<Webhook, AppError> {
        let webhook = ChannelId::new(channel_id)
            .create_webhook(&self.ctx, CreateWebhook::new(name))
            .await?;

        tracing::info!("Created webhook {} in channel {}", webhook.id, channel_id);

        Ok(webhook)
    }

    async fn execute_webhook(
        &self,
        webhook: &Webhook,
        message: OutgoingMessage,
    ) -> Result<u64, AppError> {
        let builder = ExecuteWebhook::new()
            .content(message.content)
            .username(message.username)
            .avatar_url(message.avatar_url);

        // wait=true makes Discord return the created message
        let sent = webhook.execute(&self.ctx, true, builder).await?;

        sent.map(|m| m.id.get()).ok_or_else(|| {
            AppError::InternalError(format!(
                "Webhook {} did not return the sent message",
                webhook.id
            ))
        })
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<ReferencedMessage, AppError> {
        let message = ChannelId::new(channel_id)
            .message(&self.ctx, MessageId::new(message_id))
            .await?;

        Ok(ReferencedMessage {
            author_name: message.author.name.clone(),
            webhook_id: message.webhook_id.map(|id| id.get()),
        })
    }

    async fn delete_message(&self, channel_id: u64, message_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_message(&self.ctx, MessageId::new(message_id))
            .await?;

        Ok(())
    }
}
