use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persona::Table)
                    .if_not_exists()
                    .col(pk_auto(Persona::Id))
                    .col(string(Persona::UserId))
                    .col(string(Persona::GuildId))
                    .col(string_len(Persona::Name, 100))
                    .col(string_len(Persona::Prefix, 50))
                    .col(text_null(Persona::AvatarUrl))
                    .col(timestamp(Persona::CreatedAt))
                    .col(timestamp(Persona::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // A user may reuse a persona name in another guild but not within one
        manager
            .create_index(
                Index::create()
                    .name("idx_persona_user_guild_name")
                    .table(Persona::Table)
                    .col(Persona::UserId)
                    .col(Persona::GuildId)
                    .col(Persona::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persona_guild_name")
                    .table(Persona::Table)
                    .col(Persona::GuildId)
                    .col(Persona::Name)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_persona_guild_name")
                    .table(Persona::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_persona_user_guild_name")
                    .table(Persona::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Persona::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Persona {
    Table,
    Id,
    UserId,
    GuildId,
    Name,
    Prefix,
    AvatarUrl,
    CreatedAt,
    UpdatedAt,
}
