use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::payload;
use crate::domain::repository::{DailyCodeRepository, StampSpotRepository};
use crate::domain::types::{DailyCode, StampSpot};
use crate::error::RallyServiceError;

// ── IssueDailyCodes ──────────────────────────────────────────────────────────

/// Issue today's code for every active spot, idempotently.
///
/// The per-spot existence check only avoids duplicate work; the
/// `(spot_id, valid_date)` unique index behind `DailyCodeRepository::insert`
/// is what actually holds the one-code-per-day invariant under concurrent
/// issuance. The first storage failure aborts the remaining batch; codes
/// issued earlier in the batch stay valid and are skipped on re-run.
pub struct IssueDailyCodesUseCase<S, C>
where
    S: StampSpotRepository,
    C: DailyCodeRepository,
{
    pub spots: S,
    pub codes: C,
}

impl<S, C> IssueDailyCodesUseCase<S, C>
where
    S: StampSpotRepository,
    C: DailyCodeRepository,
{
    pub async fn execute(&self, today: NaiveDate) -> Result<(), RallyServiceError> {
        let spots = self.spots.list(true).await?;
        for spot in spots {
            if !spot.is_active {
                continue;
            }
            if self
                .codes
                .find_by_spot_and_date(spot.id, today)
                .await?
                .is_some()
            {
                continue;
            }
            let code = DailyCode {
                id: Uuid::new_v4(),
                spot_id: spot.id,
                payload: payload::encode(spot.id, today),
                valid_date: today,
                created_at: Utc::now(),
            };
            // A `false` here means another issuance won the race; the
            // invariant holds either way.
            let inserted = self.codes.insert(&code).await?;
            if !inserted {
                tracing::debug!(spot_id = %spot.id, %today, "daily code already issued");
            }
        }
        Ok(())
    }
}

// ── GetDailyCode ─────────────────────────────────────────────────────────────

/// Fetch today's issued code for one spot, for display/printing.
///
/// A spot whose code has not been issued yet reports `CodeNotFound`, so
/// every displayed QR corresponds to a redeemable record.
pub struct GetDailyCodeUseCase<S, C>
where
    S: StampSpotRepository,
    C: DailyCodeRepository,
{
    pub spots: S,
    pub codes: C,
}

impl<S, C> GetDailyCodeUseCase<S, C>
where
    S: StampSpotRepository,
    C: DailyCodeRepository,
{
    pub async fn execute(
        &self,
        spot_id: Uuid,
        today: NaiveDate,
    ) -> Result<(StampSpot, DailyCode), RallyServiceError> {
        let spot = self
            .spots
            .find_by_id(spot_id)
            .await?
            .ok_or(RallyServiceError::SpotNotFound)?;
        let code = self
            .codes
            .find_by_spot_and_date(spot_id, today)
            .await?
            .ok_or(RallyServiceError::CodeNotFound)?;
        Ok((spot, code))
    }
}
