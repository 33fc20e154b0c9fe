//! Member join/leave repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::member_stat::{MemberEventKind, MemberStat};

/// Repository for recording guild membership changes.
pub struct MemberStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberStatRepository<'a> {
    /// Creates a new MemberStatRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a member joining or leaving a guild at the current time.
    ///
    /// # Arguments
    /// - `user_id` - Discord ID of the member
    /// - `guild_id` - Discord guild ID
    /// - `kind` - Join or leave
    ///
    /// # Returns
    /// - `Ok(MemberStat)` - The recorded event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: u64,
        guild_id: u64,
        kind: MemberEventKind,
    ) -> Result<MemberStat, DbErr> {
        let entity = entity::member_stat::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(user_id.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            event_type: ActiveValue::Set(kind.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        MemberStat::from_entity(entity)
    }

    /// Gets all recorded events for a guild, oldest first.
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<MemberStat>, DbErr> {
        let entities = entity::prelude::MemberStat::find()
            .filter(entity::member_stat::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::member_stat::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(MemberStat::from_entity).collect()
    }
}
