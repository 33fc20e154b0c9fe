use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberStat::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberStat::Id))
                    .col(string(MemberStat::UserId))
                    .col(string(MemberStat::GuildId))
                    .col(string_len(MemberStat::EventType, 20))
                    .col(timestamp(MemberStat::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_member_stat_guild_created_at")
                    .table(MemberStat::Table)
                    .col(MemberStat::GuildId)
                    .col(MemberStat::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_member_stat_guild_created_at")
                    .table(MemberStat::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MemberStat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MemberStat {
    Table,
    Id,
    UserId,
    GuildId,
    EventType,
    CreatedAt,
}
