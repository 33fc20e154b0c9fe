//! Message statistic repository.
//!
//! Every observed message is written once, keyed by its Discord message ID. A second
//! write for the same message ID is ignored rather than treated as an error.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::message_stat::{CreateMessageStatParam, MessageStat};

/// Repository for recording and reading message statistics.
pub struct MessageStatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageStatRepository<'a> {
    /// Creates a new MessageStatRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a message, doing nothing if the message ID is already recorded.
    ///
    /// # Arguments
    /// - `param` - Author, location, message ID and optional persona name
    ///
    /// # Returns
    /// - `Ok(true)` - A new record was inserted
    /// - `Ok(false)` - The message ID was already recorded
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMessageStatParam) -> Result<bool, DbErr> {
        let rows = entity::prelude::MessageStat::insert(entity::message_stat::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(param.user_id.to_string()),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            is_persona: ActiveValue::Set(param.persona_name.is_some()),
            persona_name: ActiveValue::Set(param.persona_name),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::message_stat::Column::MessageId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(rows > 0)
    }

    /// Gets the record for a Discord message ID.
    ///
    /// # Returns
    /// - `Ok(Some(MessageStat))` - The message was recorded
    /// - `Ok(None)` - No record for this message
    /// - `Err(DbErr)` - Database error
    pub async fn find_by_message_id(&self, message_id: u64) -> Result<Option<MessageStat>, DbErr> {
        let entity = entity::prelude::MessageStat::find()
            .filter(entity::message_stat::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(MessageStat::from_entity).transpose()
    }
}
