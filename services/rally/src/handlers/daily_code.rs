use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use uuid::Uuid;

use rally_core::identity::IdentityHeaders;

use crate::domain::{clock, payload};
use crate::error::RallyServiceError;
use crate::qr::{self, QrOptions};
use crate::state::AppState;
use crate::usecase::issuance::{GetDailyCodeUseCase, IssueDailyCodesUseCase};

// ── POST /daily-codes ────────────────────────────────────────────────────────

/// Issue today's codes for every active spot. Admin only. Safe to re-run:
/// already-issued codes are left as-is.
pub async fn issue_daily_codes(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<StatusCode, RallyServiceError> {
    if !identity.is_admin() {
        return Err(RallyServiceError::Forbidden);
    }
    let usecase = IssueDailyCodesUseCase {
        spots: state.spot_repo(),
        codes: state.daily_code_repo(),
    };
    usecase.execute(clock::today_utc()).await?;
    Ok(StatusCode::CREATED)
}

// ── GET /spots/{id}/daily-code ───────────────────────────────────────────────

#[derive(Serialize)]
pub struct DailyCodeResponse {
    pub spot_id: String,
    pub spot_name: String,
    pub payload: String,
    #[serde(serialize_with = "rally_core::serde::to_ymd")]
    pub valid_date: chrono::NaiveDate,
    pub scan_url: String,
    pub svg: String,
}

/// Today's code for one spot, rendered for display/printing. Admin only.
/// The QR image carries the scan URL; the raw payload is included for
/// camera-less verification.
pub async fn get_spot_daily_code(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(spot_id): Path<Uuid>,
) -> Result<Json<DailyCodeResponse>, RallyServiceError> {
    if !identity.is_admin() {
        return Err(RallyServiceError::Forbidden);
    }
    let usecase = GetDailyCodeUseCase {
        spots: state.spot_repo(),
        codes: state.daily_code_repo(),
    };
    let (spot, code) = usecase.execute(spot_id, clock::today_utc()).await?;

    let scan_url = payload::scan_url(&state.app_base_url, code.spot_id, code.valid_date);
    let svg = qr::render_svg(&scan_url, &QrOptions::default())?;

    Ok(Json(DailyCodeResponse {
        spot_id: code.spot_id.to_string(),
        spot_name: spot.name,
        payload: code.payload,
        valid_date: code.valid_date,
        scan_url,
        svg,
    }))
}
