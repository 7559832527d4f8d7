use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DailyCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DailyCodes::SpotId).uuid().not_null())
                    .col(ColumnDef::new(DailyCodes::Payload).string().not_null())
                    .col(ColumnDef::new(DailyCodes::ValidDate).date().not_null())
                    .col(
                        ColumnDef::new(DailyCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DailyCodes::Table, DailyCodes::SpotId)
                            .to(StampSpots::Table, StampSpots::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Authoritative guard for "at most one code per (spot, day)".
        // Application-level existence checks are fast-path only.
        manager
            .create_index(
                Index::create()
                    .table(DailyCodes::Table)
                    .col(DailyCodes::SpotId)
                    .col(DailyCodes::ValidDate)
                    .name("uq_daily_codes_spot_id_valid_date")
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_daily_codes_spot_id_valid_date")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(DailyCodes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DailyCodes {
    Table,
    Id,
    SpotId,
    Payload,
    ValidDate,
    CreatedAt,
}

#[derive(Iden)]
enum StampSpots {
    Table,
    Id,
}
