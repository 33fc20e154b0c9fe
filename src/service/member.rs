//! Guild membership statistics.

use sea_orm::DatabaseConnection;

use crate::{
    data::member_stat::MemberStatRepository,
    error::AppError,
    model::member_stat::{MemberEventKind, MemberStat},
};

pub struct MemberStatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MemberStatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records that a user joined a guild.
    pub async fn record_join(&self, user_id: u64, guild_id: u64) -> Result<MemberStat, AppError> {
        self.record(user_id, guild_id, MemberEventKind::Join).await
    }

    /// Records that a user left, or was removed from, a guild.
    pub async fn record_leave(&self, user_id: u64, guild_id: u64) -> Result<MemberStat, AppError> {
        self.record(user_id, guild_id, MemberEventKind::Leave).await
    }

    async fn record(
        &self,
        user_id: u64,
        guild_id: u64,
        kind: MemberEventKind,
    ) -> Result<MemberStat, AppError> {
        let stat = MemberStatRepository::new(self.db)
            .create(user_id, guild_id, kind)
            .await?;

        tracing::debug!("Recorded member {} for user {} in guild {}", kind, user_id, guild_id);

        Ok(stat)
    }
}
