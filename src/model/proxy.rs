//! Message proxy models.
//!
//! These types decouple the proxy service from serenity's `Message` so the dispatch
//! logic can be driven from tests without a gateway connection.

use serenity::all::Message;

/// A guild message received from the gateway, reduced to what the proxy needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: u64,
    pub author_id: u64,
    /// True for bot accounts and webhook-authored messages.
    pub author_is_automated: bool,
    /// Avatar of the human author, used when a persona has none.
    pub author_avatar_url: String,
    pub content: String,
    /// ID of the message this one replies to, in the same channel.
    pub referenced_message_id: Option<u64>,
}

impl InboundMessage {
    /// Extracts the proxy-relevant fields of a gateway message.
    ///
    /// # Returns
    /// - `Some(InboundMessage)` - The message was sent in a guild
    /// - `None` - Direct messages carry no guild and are never proxied
    pub fn from_message(message: &Message) -> Option<Self> {
        let guild_id = message.guild_id?;

        Some(Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: guild_id.get(),
            author_id: message.author.id.get(),
            author_is_automated: message.author.bot || message.webhook_id.is_some(),
            author_avatar_url: message.author.face(),
            content: message.content.clone(),
            referenced_message_id: message
                .message_reference
                .as_ref()
                .and_then(|reference| reference.message_id)
                .map(|id| id.get()),
        })
    }
}

/// The message a proxied message replies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencedMessage {
    /// Displayed username; for webhook messages this is the persona name.
    pub author_name: String,
    /// Set when the message was posted through a webhook.
    pub webhook_id: Option<u64>,
}

/// Content posted through a webhook on behalf of a persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub content: String,
    pub username: String,
    pub avatar_url: String,
}

/// What happened to one inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProxyOutcome {
    /// Bot or webhook author; nothing was done.
    Ignored,
    /// Ordinary human message, recorded for statistics.
    Recorded,
    /// Matched a persona but nothing followed the prefix.
    Dropped,
    /// Re-emitted through a webhook as the returned message.
    Proxied {
        /// ID of the message the webhook posted
        message_id: u64,
    },
}
