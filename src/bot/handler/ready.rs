//! Ready event handler.
//!
//! Fired once per gateway connection after authentication. Logs the connection and
//! sets the bot's presence.

use serenity::all::{ActivityData, Context, Ready};

/// Text shown as the bot's "watching" activity.
const ACTIVITY: &str = "les écrits des joueurs 📖";

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching(ACTIVITY)));
}
