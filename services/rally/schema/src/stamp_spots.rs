use sea_orm::entity::prelude::*;

/// A physical stamp spot participants visit. Never deleted in normal flow;
/// the active flag gates daily code issuance.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stamp_spots")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    /// Admin who created the spot. Identity lives in the external auth
    /// collaborator, so no foreign key.
    pub created_by: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::daily_codes::Entity")]
    DailyCodes,
    #[sea_orm(has_many = "super::user_stamps::Entity")]
    UserStamps,
}

impl Related<super::daily_codes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DailyCodes.def()
    }
}

impl Related<super::user_stamps::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStamps.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
