use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStamps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStamps::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserStamps::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserStamps::SpotId).uuid().not_null())
                    .col(ColumnDef::new(UserStamps::DailyCodeId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserStamps::CollectedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserStamps::Table, UserStamps::SpotId)
                            .to(StampSpots::Table, StampSpots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserStamps::Table, UserStamps::DailyCodeId)
                            .to(DailyCodes::Table, DailyCodes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Authoritative guard for "one collection per (user, code)";
        // serializes concurrent scans of the same code (double-tap,
        // duplicate camera frames).
        manager
            .create_index(
                Index::create()
                    .table(UserStamps::Table)
                    .col(UserStamps::UserId)
                    .col(UserStamps::DailyCodeId)
                    .name("uq_user_stamps_user_id_daily_code_id")
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(UserStamps::Table)
                    .col(UserStamps::UserId)
                    .name("idx_user_stamps_user_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_user_stamps_user_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("uq_user_stamps_user_id_daily_code_id")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(UserStamps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserStamps {
    Table,
    Id,
    UserId,
    SpotId,
    DailyCodeId,
    CollectedAt,
}

#[derive(Iden)]
enum StampSpots {
    Table,
    Id,
}

#[derive(Iden)]
enum DailyCodes {
    Table,
    Id,
}
