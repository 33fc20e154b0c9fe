//! Discord bot integration.
//!
//! The bot is initialized during startup and runs in its own tokio task so that the
//! health server keeps answering while it connects. Serenity dispatches every gateway
//! event on a separate task, so one slow or failing message never blocks the next.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel data in the cache, needed for permission checks
//! - `GUILD_MESSAGES` - Message create events
//! - `MESSAGE_CONTENT` - Message text, needed for prefix matching (privileged intent)
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//!
//! Both privileged intents must be enabled in the Discord Developer Portal.

pub mod handler;
pub mod start;
