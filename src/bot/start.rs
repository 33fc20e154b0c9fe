use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::cache::Cache;

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    service::proxy::webhook::InMemoryWebhookCache,
};

/// Builds the Discord client without connecting it.
///
/// The client's cache is returned alongside it so the health server can report the
/// connected guild count.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Cache>))` - Client ready to start, and its cache
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Cache>), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, Arc::new(InMemoryWebhookCache::new()));

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let cache = client.cache.clone();

    Ok((client, cache))
}

/// Connects the client and processes events until shutdown.
///
/// Should be spawned on its own task since it only returns when the gateway
/// connection ends.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
