//! Test factory for creating Serenity Webhook objects.

use serenity::all::Webhook;

/// Creates a test incoming Serenity Webhook.
///
/// # Arguments
/// - `webhook_id` - Discord webhook ID (snowflake)
/// - `channel_id` - Channel the webhook posts into
/// - `name` - Webhook name
/// - `owner_id` - ID of the user (or bot) that created the webhook, if known
///
/// # Returns
/// - `Webhook` - A valid Serenity Webhook struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Webhook (indicates invalid test data)
pub fn create_test_webhook(
    webhook_id: u64,
    channel_id: u64,
    name: &str,
    owner_id: Option<u64>,
) -> Webhook {
    let user = owner_id.map(|id| {
        serde_json::json!({
            "id": id.to_string(),
            "username": format!("user{}", id),
            "discriminator": "0000",
            "global_name": null,
            "avatar": null,
            "bot": true,
        })
    });

    serde_json::from_value(serde_json::json!({
        "id": webhook_id.to_string(),
        "type": 1,
        "guild_id": "100000000000000000",
        "channel_id": channel_id.to_string(),
        "user": user,
        "name": name,
        "avatar": null,
        "token": format!("token-{}", webhook_id),
        "application_id": null,
    }))
    .expect("Failed to create test webhook")
}
