use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageStat::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageStat::Id))
                    .col(string(MessageStat::UserId))
                    .col(string(MessageStat::GuildId))
                    .col(string(MessageStat::ChannelId))
                    .col(string_uniq(MessageStat::MessageId))
                    .col(boolean(MessageStat::IsPersona).default(false))
                    .col(string_len_null(MessageStat::PersonaName, 100))
                    .col(timestamp(MessageStat::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_stat_guild_created_at")
                    .table(MessageStat::Table)
                    .col(MessageStat::GuildId)
                    .col(MessageStat::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_message_stat_channel_created_at")
                    .table(MessageStat::Table)
                    .col(MessageStat::ChannelId)
                    .col(MessageStat::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_stat_channel_created_at")
                    .table(MessageStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_stat_guild_created_at")
                    .table(MessageStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MessageStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MessageStat {
    Table,
    Id,
    UserId,
    GuildId,
    ChannelId,
    MessageId,
    IsPersona,
    PersonaName,
    CreatedAt,
}
