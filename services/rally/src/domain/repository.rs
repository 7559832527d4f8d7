#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::types::{CollectedStamp, DailyCode, SpotPatch, Stamp, StampSpot};
use crate::error::RallyServiceError;

/// Repository for stamp spots.
pub trait StampSpotRepository: Send + Sync {
    /// List spots, newest first. `only_active` restricts to `is_active = true`.
    async fn list(&self, only_active: bool) -> Result<Vec<StampSpot>, RallyServiceError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StampSpot>, RallyServiceError>;

    async fn create(&self, spot: &StampSpot) -> Result<(), RallyServiceError>;

    async fn update(&self, id: Uuid, patch: &SpotPatch) -> Result<(), RallyServiceError>;

    async fn count_active(&self) -> Result<u64, RallyServiceError>;
}

/// Repository for daily codes.
pub trait DailyCodeRepository: Send + Sync {
    async fn find_by_spot_and_date(
        &self,
        spot_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyCode>, RallyServiceError>;

    /// Insert a code, guarded by the `(spot_id, valid_date)` unique index.
    /// Returns `false` when a concurrent issuance already inserted the row.
    async fn insert(&self, code: &DailyCode) -> Result<bool, RallyServiceError>;
}

/// Repository for collected stamps.
pub trait StampRepository: Send + Sync {
    /// Advisory fast-path check; the unique index on insert is the
    /// authoritative guard.
    async fn exists(&self, user_id: Uuid, daily_code_id: Uuid)
    -> Result<bool, RallyServiceError>;

    /// Insert a stamp, guarded by the `(user_id, daily_code_id)` unique
    /// index. Returns `false` when the stamp was already collected.
    async fn insert(&self, stamp: &Stamp) -> Result<bool, RallyServiceError>;

    /// The caller's collected stamps joined with spot display data, newest
    /// first.
    async fn list_collected(&self, user_id: Uuid)
    -> Result<Vec<CollectedStamp>, RallyServiceError>;
}
