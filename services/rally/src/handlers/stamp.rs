use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use rally_core::identity::IdentityHeaders;

use crate::domain::clock;
use crate::domain::types::CollectedStamp;
use crate::error::RallyServiceError;
use crate::state::AppState;
use crate::usecase::progress::GetProgressUseCase;
use crate::usecase::redemption::RedeemCodeUseCase;

// ── POST /users/@me/stamps ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RedeemRequest {
    /// Raw scanned data: either the `stamp-rally:` string or the scan URL.
    pub code: String,
}

#[derive(Serialize)]
pub struct RedeemResponse {
    pub stamp_id: String,
    pub spot_name: String,
}

pub async fn redeem_stamp(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<RedeemRequest>,
) -> Result<(StatusCode, Json<RedeemResponse>), RallyServiceError> {
    let usecase = RedeemCodeUseCase {
        codes: state.daily_code_repo(),
        stamps: state.stamp_repo(),
        spots: state.spot_repo(),
    };
    let out = usecase
        .execute(&body.code, identity.user_id, clock::today_utc())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RedeemResponse {
            stamp_id: out.stamp_id.to_string(),
            spot_name: out.spot_name,
        }),
    ))
}

// ── GET /users/@me/stamps ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StampResponse {
    pub id: String,
    pub spot_id: String,
    pub spot_name: String,
    pub spot_description: Option<String>,
    pub spot_location: Option<String>,
    #[serde(serialize_with = "rally_core::serde::to_rfc3339_ms")]
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl From<CollectedStamp> for StampResponse {
    fn from(collected: CollectedStamp) -> Self {
        Self {
            id: collected.stamp.id.to_string(),
            spot_id: collected.stamp.spot_id.to_string(),
            spot_name: collected.spot_name,
            spot_description: collected.spot_description,
            spot_location: collected.spot_location,
            collected_at: collected.stamp.collected_at,
        }
    }
}

pub async fn get_my_stamps(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<Vec<StampResponse>>, RallyServiceError> {
    let usecase = GetProgressUseCase {
        stamps: state.stamp_repo(),
        spots: state.spot_repo(),
    };
    let progress = usecase.execute(identity.user_id).await?;
    Ok(Json(
        progress
            .stamps
            .into_iter()
            .map(StampResponse::from)
            .collect(),
    ))
}

// ── GET /users/@me/progress ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ProgressResponse {
    pub collected: u64,
    pub total: u64,
    pub complete: bool,
}

pub async fn get_my_progress(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<ProgressResponse>, RallyServiceError> {
    let usecase = GetProgressUseCase {
        stamps: state.stamp_repo(),
        spots: state.spot_repo(),
    };
    let progress = usecase.execute(identity.user_id).await?;
    Ok(Json(ProgressResponse {
        collected: progress.collected_count(),
        total: progress.total_active_spots,
        complete: progress.is_complete(),
    }))
}
