use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A physical stamp spot participants visit. Created and edited by
/// administrators, never deleted in normal flow.
#[derive(Debug, Clone)]
pub struct StampSpot {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    /// Gates whether issuance considers the spot.
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a spot; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct SpotPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl SpotPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.location.is_none()
            && self.image_url.is_none()
            && self.is_active.is_none()
    }
}

/// The single valid code for one spot on one calendar day. Immutable once
/// created; regeneration is not supported.
#[derive(Debug, Clone)]
pub struct DailyCode {
    pub id: Uuid,
    pub spot_id: Uuid,
    pub payload: String,
    pub valid_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl DailyCode {
    /// A code is redeemable on exactly the day it was issued for.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.valid_date == date
    }
}

/// One collected stamp: a join fact between a user and a daily code.
#[derive(Debug, Clone)]
pub struct Stamp {
    pub id: Uuid,
    pub user_id: Uuid,
    pub spot_id: Uuid,
    pub daily_code_id: Uuid,
    pub collected_at: DateTime<Utc>,
}

/// A stamp joined with its spot's display data, for the dashboard.
#[derive(Debug, Clone)]
pub struct CollectedStamp {
    pub stamp: Stamp,
    pub spot_name: String,
    pub spot_description: Option<String>,
    pub spot_location: Option<String>,
}
