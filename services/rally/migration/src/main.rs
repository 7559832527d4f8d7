use sea_orm_migration::prelude::*;

mod m20260801_000001_create_stamp_spots;
mod m20260801_000002_create_daily_codes;
mod m20260801_000003_create_user_stamps;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_stamp_spots::Migration),
            Box::new(m20260801_000002_create_daily_codes::Migration),
            Box::new(m20260801_000003_create_user_stamps::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
