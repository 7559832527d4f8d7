use sea_orm::entity::prelude::*;

/// The single valid code for one spot on one calendar day. Immutable once
/// created; uniqueness of `(spot_id, valid_date)` is enforced by the
/// database index, not by application logic.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub spot_id: Uuid,
    /// Opaque scan payload, `stamp-rally:<spot_id>:<YYYY-MM-DD>`.
    pub payload: String,
    pub valid_date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::stamp_spots::Entity",
        from = "Column::SpotId",
        to = "super::stamp_spots::Column::Id"
    )]
    StampSpot,
    #[sea_orm(has_many = "super::user_stamps::Entity")]
    UserStamps,
}

impl Related<super::stamp_spots::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StampSpot.def()
    }
}

impl Related<super::user_stamps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStamps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
