use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rally_core::identity::IdentityHeaders;

use crate::domain::types::{SpotPatch, StampSpot};
use crate::error::RallyServiceError;
use crate::state::AppState;
use crate::usecase::spot::{
    CreateSpotInput, CreateSpotUseCase, GetSpotUseCase, ListSpotsUseCase, UpdateSpotUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SpotResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    #[serde(serialize_with = "rally_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "rally_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<StampSpot> for SpotResponse {
    fn from(spot: StampSpot) -> Self {
        Self {
            id: spot.id.to_string(),
            name: spot.name,
            description: spot.description,
            location: spot.location,
            image_url: spot.image_url,
            is_active: spot.is_active,
            created_at: spot.created_at,
            updated_at: spot.updated_at,
        }
    }
}

// ── GET /spots ───────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct SpotListQuery {
    pub active: Option<bool>,
}

pub async fn get_spots(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    axum::extract::RawQuery(raw_query): axum::extract::RawQuery,
) -> Result<Json<Vec<SpotResponse>>, RallyServiceError> {
    let query: SpotListQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| RallyServiceError::MissingData)?
        .unwrap_or_default();

    let usecase = ListSpotsUseCase {
        repo: state.spot_repo(),
    };
    let spots = usecase.execute(query.active.unwrap_or(false)).await?;
    Ok(Json(spots.into_iter().map(SpotResponse::from).collect()))
}

// ── GET /spots/{id} ──────────────────────────────────────────────────────────

pub async fn get_spot(
    _identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(spot_id): Path<Uuid>,
) -> Result<Json<SpotResponse>, RallyServiceError> {
    let usecase = GetSpotUseCase {
        repo: state.spot_repo(),
    };
    let spot = usecase.execute(spot_id).await?;
    Ok(Json(spot.into()))
}

// ── POST /spots ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSpotRequest {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Serialize)]
pub struct CreateSpotResponse {
    pub id: String,
}

pub async fn create_spot(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Json(body): Json<CreateSpotRequest>,
) -> Result<(StatusCode, Json<CreateSpotResponse>), RallyServiceError> {
    if !identity.is_admin() {
        return Err(RallyServiceError::Forbidden);
    }
    let usecase = CreateSpotUseCase {
        repo: state.spot_repo(),
    };
    let id = usecase
        .execute(CreateSpotInput {
            name: body.name,
            description: body.description,
            location: body.location,
            image_url: body.image_url,
            is_active: body.is_active.unwrap_or(true),
            created_by: identity.user_id,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateSpotResponse { id: id.to_string() }),
    ))
}

// ── PATCH /spots/{id} ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateSpotRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

pub async fn update_spot(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    Path(spot_id): Path<Uuid>,
    Json(body): Json<UpdateSpotRequest>,
) -> Result<StatusCode, RallyServiceError> {
    if !identity.is_admin() {
        return Err(RallyServiceError::Forbidden);
    }
    let usecase = UpdateSpotUseCase {
        repo: state.spot_repo(),
    };
    usecase
        .execute(
            spot_id,
            SpotPatch {
                name: body.name,
                description: body.description,
                location: body.location,
                image_url: body.image_url,
                is_active: body.is_active,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
