use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StampSpots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StampSpots::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StampSpots::Name).string().not_null())
                    .col(ColumnDef::new(StampSpots::Description).string())
                    .col(ColumnDef::new(StampSpots::Location).string())
                    .col(ColumnDef::new(StampSpots::ImageUrl).string())
                    .col(
                        ColumnDef::new(StampSpots::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(StampSpots::CreatedBy).uuid())
                    .col(
                        ColumnDef::new(StampSpots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(StampSpots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StampSpots::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum StampSpots {
    Table,
    Id,
    Name,
    Description,
    Location,
    ImageUrl,
    IsActive,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
