use thiserror::Error;

/// Reasons a persona proxy attempt is aborted before anything is sent.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProxyError {
    /// The bot lacks the Manage Webhooks permission in the target channel.
    ///
    /// No webhook is created and the original message is left untouched.
    #[error("Missing Manage Webhooks permission in channel {channel_id}")]
    MissingWebhookPermission {
        /// Channel the proxy targeted
        channel_id: u64,
    },

    /// The target channel is not a guild text channel the bot can see.
    #[error("Channel {channel_id} is not an accessible guild channel")]
    ChannelUnavailable {
        /// Channel the proxy targeted
        channel_id: u64,
    },
}
