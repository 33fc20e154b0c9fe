use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, Member, User};

use crate::service::member::MemberStatService;

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    _ctx: Context,
    new_member: Member,
) {
    let user_id = new_member.user.id.get();
    let guild_id = new_member.guild_id.get();

    if let Err(e) = MemberStatService::new(db)
        .record_join(user_id, guild_id)
        .await
    {
        tracing::error!(
            "Failed to record join of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    _ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let user_id = user.id.get();
    let guild_id = guild_id.get();

    if let Err(e) = MemberStatService::new(db)
        .record_leave(user_id, guild_id)
        .await
    {
        tracing::error!(
            "Failed to record leave of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
