use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use serenity::all::Webhook;
use serenity::async_trait;
use test_utils::{
    builder::TestBuilder, factory::persona::PersonaFactory, serenity::create_test_webhook,
};

use crate::{
    data::{message_stat::MessageStatRepository, persona::PersonaRepository},
    error::{proxy::ProxyError, AppError},
    model::proxy::{InboundMessage, OutgoingMessage, ProxyOutcome, ReferencedMessage},
    service::proxy::{
        gateway::ProxyGateway,
        matcher::{match_prefix, PersonaMatcher},
        reply::ReplyResolver,
        webhook::{InMemoryWebhookCache, WebhookCache, WebhookManager, WEBHOOK_NAME},
        ProxyService,
    },
};


const BOT_ID: u64 = 900000000000000001;
const GUILD_ID: u64 = 100000000000000000;
const CHANNEL_ID: u64 = 200000000000000000;
const AUTHOR_ID: u64 = 300000000000000000;
const AUTHOR_AVATAR: &str = "https://cdn.discordapp.com/embed/avatars/0.png";

/// Mutable state behind [`FakeGateway`].
#[derive(Default)]
struct FakeState {
    can_manage_webhooks: bool,
    /// Webhooks returned by `list_webhooks`, per channel.
    channel_webhooks: HashMap<u64, Vec<Webhook>>,
    /// Webhook IDs `fetch_webhook` still knows about.
    live_webhooks: HashSet<u64>,
    /// Messages `fetch_message` can return.
    messages: HashMap<u64, ReferencedMessage>,
    fail_list: bool,
    fail_create: bool,
    fail_execute: bool,
    fail_delete: bool,
    next_id: u64,
    create_calls: usize,
    fetch_webhook_calls: usize,
    list_calls: usize,
    sent: Vec<(u64, OutgoingMessage)>,
    deleted: Vec<u64>,
}

/// In-memory stand-in for Discord that records every call the proxy makes.
struct FakeGateway {
    state: Mutex<FakeState>,
}

impl FakeGateway {
    /// A gateway where the bot holds Manage Webhooks and nothing exists yet.
    fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                can_manage_webhooks: true,
                next_id: 500000000000000000,
                ..Default::default()
            }),
        }
    }

    /// A gateway where the bot lacks Manage Webhooks.
    fn without_permission() -> Self {
        let gateway = Self::new();
        gateway.state.lock().unwrap().can_manage_webhooks = false;
        gateway
    }

    /// Adds a webhook that already exists on the channel.
    fn with_existing_webhook(self, webhook: Webhook) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.live_webhooks.insert(webhook.id.get());
            state
                .channel_webhooks
                .entry(webhook.channel_id.map(|id| id.get()).unwrap_or(CHANNEL_ID))
                .or_default()
                .push(webhook);
        }
        self
    }

    /// Adds a message that can be fetched as a reply target.
    fn with_message(self, message_id: u64, message: ReferencedMessage) -> Self {
        self.state
            .lock()
            .unwrap()
            .messages
            .insert(message_id, message);
        self
    }

    /// Simulates a webhook deleted from Discord behind the bot's back.
    fn forget_webhook(&self, webhook_id: u64) {
        let mut state = self.state.lock().unwrap();
        state.live_webhooks.remove(&webhook_id);
        for webhooks in state.channel_webhooks.values_mut() {
            webhooks.retain(|webhook| webhook.id.get() != webhook_id);
        }
    }

    fn fail_list(&self) {
        self.state.lock().unwrap().fail_list = true;
    }

    fn fail_create(&self) {
        self.state.lock().unwrap().fail_create = true;
    }

    fn fail_execute(&self) {
        self.state.lock().unwrap().fail_execute = true;
    }

    fn fail_delete(&self) {
        self.state.lock().unwrap().fail_delete = true;
    }

    fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    fn fetch_webhook_calls(&self) -> usize {
        self.state.lock().unwrap().fetch_webhook_calls
    }

    fn sent(&self) -> Vec<(u64, OutgoingMessage)> {
        self.state.lock().unwrap().sent.clone()
    }

    fn deleted(&self) -> Vec<u64> {
        self.state.lock().unwrap().deleted.clone()
    }
}

#[async_trait]
impl ProxyGateway for FakeGateway {
    fn bot_user_id(&self) -> u64 {
        BOT_ID
    }

    async fn can_manage_webhooks(&self, _channel_id: u64) -> Result<bool, AppError> {
        Ok(self.state.lock().unwrap().can_manage_webhooks)
    }

    async fn fetch_webhook(&self, webhook_id: u64) -> Result<Webhook, AppError> {
        let mut state = self.state.lock().unwrap();
        state.fetch_webhook_calls += 1;

        if !state.live_webhooks.contains(&webhook_id) {
            return Err(AppError::InternalError("Unknown Webhook".to_string()));
        }

        state
            .channel_webhooks
            .values()
            .flatten()
            .find(|webhook| webhook.id.get() == webhook_id)
            .cloned()
            .ok_or_else(|| AppError::InternalError("Unknown Webhook".to_string()))
    }

    async fn list_webhooks(&self, channel_id: u64) -> Result<Vec<Webhook>, AppError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;

        if state.fail_list {
            return Err(AppError::InternalError("Failed to list webhooks".to_string()));
        }

        Ok(state
            .channel_webhooks
            .get(&channel_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn create_webhook(&self, channel_id: u64, name: &str) -> Result<Webhook, AppError> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;

        if state.fail_create {
            return Err(AppError::InternalError("Maximum number of webhooks reached".to_string()));
        }

        state.next_id += 1;

        let webhook = create_test_webhook(state.next_id, channel_id, name, Some(BOT_ID));
        state.live_webhooks.insert(webhook.id.get());
        state
            .channel_webhooks
            .entry(channel_id)
            .or_default()
            .push(webhook.clone());

        Ok(webhook)
    }

    async fn execute_webhook(
        &self,
        webhook: &Webhook,
        message: OutgoingMessage,
    ) -> Result<u64, AppError> {
        let mut state = self.state.lock().unwrap();

        if state.fail_execute {
            return Err(AppError::InternalError("Webhook send failed".to_string()));
        }

        state.next_id += 1;
        let message_id = state.next_id;
        state.sent.push((webhook.id.get(), message));

        Ok(message_id)
    }

    async fn fetch_message(
        &self,
        _channel_id: u64,
        message_id: u64,
    ) -> Result<ReferencedMessage, AppError> {
        self.state
            .lock()
            .unwrap()
            .messages
            .get(&message_id)
            .cloned()
            .ok_or_else(|| AppError::InternalError("Unknown Message".to_string()))
    }

    async fn delete_message(&self, _channel_id: u64, message_id: u64) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();

        if state.fail_delete {
            return Err(AppError::InternalError("Missing Permissions".to_string()));
        }

        state.deleted.push(message_id);

        Ok(())
    }
}

/// Builds a human-authored guild message from the default author.
fn inbound(message_id: u64, content: &str) -> InboundMessage {
    InboundMessage {
        message_id,
        channel_id: CHANNEL_ID,
        guild_id: GUILD_ID,
        author_id: AUTHOR_ID,
        author_is_automated: false,
        author_avatar_url: AUTHOR_AVATAR.to_string(),
        content: content.to_string(),
        referenced_message_id: None,
    }
}

/// Counts message statistics rows, optionally only those recorded for a persona.
async fn count_message_stats(db: &DatabaseConnection, persona_only: bool) -> Result<u64, DbErr> {
    let mut query = entity::prelude::MessageStat::find();
    if persona_only {
        query = query.filter(entity::message_stat::Column::IsPersona.eq(true));
    }

    query.count(db).await
}
