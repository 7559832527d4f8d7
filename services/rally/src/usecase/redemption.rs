use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::payload;
use crate::domain::repository::{DailyCodeRepository, StampRepository, StampSpotRepository};
use crate::domain::types::Stamp;
use crate::error::RallyServiceError;

/// Successful redemption, carrying the spot's display name for user feedback.
#[derive(Debug, Clone)]
pub struct RedeemOutput {
    pub stamp_id: Uuid,
    pub spot_name: String,
}

/// Validate a scanned payload and record the stamp.
///
/// Rejection order: format, date, existence, prior collection. The advisory
/// `exists` check keeps the common rescan cheap; the `(user_id,
/// daily_code_id)` unique index behind `StampRepository::insert` is the
/// authoritative guard against concurrent duplicate scans. Every rejection
/// is non-fatal; the caller just rescans.
pub struct RedeemCodeUseCase<C, T, S>
where
    C: DailyCodeRepository,
    T: StampRepository,
    S: StampSpotRepository,
{
    pub codes: C,
    pub stamps: T,
    pub spots: S,
}

impl<C, T, S> RedeemCodeUseCase<C, T, S>
where
    C: DailyCodeRepository,
    T: StampRepository,
    S: StampSpotRepository,
{
    pub async fn execute(
        &self,
        raw: &str,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<RedeemOutput, RallyServiceError> {
        // 1. Parse. Camera string or scan URL, same canonical pair.
        let decoded = payload::decode(raw)?;

        // 2. Codes are valid for exactly the issued day, never before or
        //    after. Checked before the lookup so an expired-but-real code
        //    reports expiry, not absence.
        if decoded.date != today {
            return Err(RallyServiceError::CodeExpired);
        }

        // 3. Well-formed but never-issued payloads (forged or guessed) end
        //    here.
        let code = self
            .codes
            .find_by_spot_and_date(decoded.spot_id, decoded.date)
            .await?
            .ok_or(RallyServiceError::CodeNotFound)?;

        // 4. Advisory fast path for the common rescan.
        if self.stamps.exists(user_id, code.id).await? {
            return Err(RallyServiceError::AlreadyCollected);
        }

        // 5. Record the stamp; losing the insert race to a duplicate frame
        //    reads the same as a rescan.
        let stamp = Stamp {
            id: Uuid::new_v4(),
            user_id,
            spot_id: code.spot_id,
            daily_code_id: code.id,
            collected_at: Utc::now(),
        };
        let inserted = self.stamps.insert(&stamp).await?;
        if !inserted {
            return Err(RallyServiceError::AlreadyCollected);
        }

        let spot = self
            .spots
            .find_by_id(code.spot_id)
            .await?
            .ok_or(RallyServiceError::SpotNotFound)?;

        Ok(RedeemOutput {
            stamp_id: stamp.id,
            spot_name: spot.name,
        })
    }
}
