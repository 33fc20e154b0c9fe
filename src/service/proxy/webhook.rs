//! Channel webhook lifecycle.
//!
//! Each channel gets at most one cached webhook, owned by the bot and named
//! [`WEBHOOK_NAME`]. Cached handles are revalidated on every use and evicted when
//! Discord no longer knows them; nothing is refreshed in the background and webhooks
//! are never deleted by the bot.
//!
//! Two first-time proxies racing in the same channel can both miss the cache and
//! each create a webhook. The later one simply overwrites the cache entry.

use std::collections::HashMap;

use serenity::all::Webhook;
use serenity::async_trait;
use tokio::sync::RwLock;

use crate::{
    error::{proxy::ProxyError, AppError},
    service::proxy::gateway::ProxyGateway,
};

/// Name given to webhooks the bot creates, and looked for when reusing one.
pub const WEBHOOK_NAME: &str = "Scriptorium";

/// Channel-keyed storage for webhook handles.
#[async_trait]
pub trait WebhookCache: Send + Sync {
    async fn get(&self, channel_id: u64) -> Option<Webhook>;

    async fn set(&self, channel_id: u64, webhook: Webhook);

    async fn evict(&self, channel_id: u64);
}

/// Process-lifetime webhook cache with no expiry and no size bound.
#[derive(Default)]
pub struct InMemoryWebhookCache {
    webhooks: RwLock<HashMap<u64, Webhook>>,
}

impl InMemoryWebhookCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of channels with a cached webhook.
    pub async fn len(&self) -> usize {
        self.webhooks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.webhooks.read().await.is_empty()
    }
}

#[async_trait]
impl WebhookCache for InMemoryWebhookCache {
    async fn get(&self, channel_id: u64) -> Option<Webhook> {
        self.webhooks.read().await.get(&channel_id).cloned()
    }

    async fn set(&self, channel_id: u64, webhook: Webhook) {
        self.webhooks.write().await.insert(channel_id, webhook);
    }

    async fn evict(&self, channel_id: u64) {
        self.webhooks.write().await.remove(&channel_id);
    }
}

/// Returns true when the webhook was created by the bot under the expected name.
pub fn is_proxy_webhook(webhook: &Webhook, bot_user_id: u64) -> bool {
    let owned_by_bot = webhook
        .user
        .as_ref()
        .is_some_and(|user| user.id.get() == bot_user_id);

    owned_by_bot && webhook.name.as_deref() == Some(WEBHOOK_NAME)
}

/// Acquires a live webhook for a channel, reusing or creating one as needed.
pub struct WebhookManager<'a> {
    gateway: &'a dyn ProxyGateway,
    cache: &'a dyn WebhookCache,
}

impl<'a> WebhookManager<'a> {
    pub fn new(gateway: &'a dyn ProxyGateway, cache: &'a dyn WebhookCache) -> Self {
        Self { gateway, cache }
    }

    /// Returns a webhook the bot can post through in `channel_id`.
    ///
    /// Order of resolution:
    /// 1. Cached handle, if Discord still returns it
    /// 2. Existing bot-owned webhook named [`WEBHOOK_NAME`] on the channel
    /// 3. A newly created webhook
    ///
    /// Steps 2 and 3 require Manage Webhooks; the permission is checked before
    /// listing so that nothing is created without it.
    ///
    /// # Returns
    /// - `Ok(Webhook)` - Live webhook, now cached for the channel
    /// - `Err(AppError::ProxyErr(MissingWebhookPermission))` - Bot lacks permission
    /// - `Err(AppError::DiscordErr)` - Listing or creating failed
    pub async fn acquire(&self, channel_id: u64) -> Result<Webhook, AppError> {
        if let Some(cached) = self.cache.get(channel_id).await {
            match self.gateway.fetch_webhook(cached.id.get()).await {
                Ok(_) => return Ok(cached),
                Err(e) => {
                    tracing::debug!(
                        "Cached webhook {} for channel {} is gone: {}",
                        cached.id,
                        channel_id,
                        e
                    );
                    self.cache.evict(channel_id).await;
                }
            }
        }

        if !self.gateway.can_manage_webhooks(channel_id).await? {
            return Err(ProxyError::MissingWebhookPermission { channel_id }.into());
        }

        let bot_user_id = self.gateway.bot_user_id();
        let existing = self
            .gateway
            .list_webhooks(channel_id)
            .await?
            .into_iter()
            .find(|webhook| is_proxy_webhook(webhook, bot_user_id));

        let webhook = match existing {
            Some(webhook) => webhook,
            None => self.gateway.create_webhook(channel_id, WEBHOOK_NAME).await?,
        };

        self.cache.set(channel_id, webhook.clone()).await;

        Ok(webhook)
    }
}
