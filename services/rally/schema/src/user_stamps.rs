use sea_orm::entity::prelude::*;

/// One collected stamp: a join fact between an external user identity and a
/// daily code. Immutable; uniqueness of `(user_id, daily_code_id)` is
/// enforced by the database index.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_stamps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owned by the external auth collaborator, so no foreign key.
    pub user_id: Uuid,
    pub spot_id: Uuid,
    pub daily_code_id: Uuid,
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stamp_spots::Entity",
        from = "Column::SpotId",
        to = "super::stamp_spots::Column::Id"
    )]
    StampSpot,
    #[sea_orm(
        belongs_to = "super::daily_codes::Entity",
        from = "Column::DailyCodeId",
        to = "super::daily_codes::Column::Id"
    )]
    DailyCode,
}

impl Related<super::stamp_spots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StampSpot.def()
    }
}

impl Related<super::daily_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyCode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
