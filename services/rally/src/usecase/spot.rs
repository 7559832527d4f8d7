use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::StampSpotRepository;
use crate::domain::types::{SpotPatch, StampSpot};
use crate::error::RallyServiceError;

// ── CreateSpot ───────────────────────────────────────────────────────────────

pub struct CreateSpotInput {
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub created_by: Uuid,
}

pub struct CreateSpotUseCase<R: StampSpotRepository> {
    pub repo: R,
}

impl<R: StampSpotRepository> CreateSpotUseCase<R> {
    pub async fn execute(&self, input: CreateSpotInput) -> Result<Uuid, RallyServiceError> {
        if input.name.trim().is_empty() {
            return Err(RallyServiceError::MissingData);
        }
        let now = Utc::now();
        let spot = StampSpot {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            location: input.location,
            image_url: input.image_url,
            is_active: input.is_active,
            created_by: Some(input.created_by),
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&spot).await?;
        Ok(spot.id)
    }
}

// ── GetSpot ──────────────────────────────────────────────────────────────────

pub struct GetSpotUseCase<R: StampSpotRepository> {
    pub repo: R,
}

impl<R: StampSpotRepository> GetSpotUseCase<R> {
    pub async fn execute(&self, spot_id: Uuid) -> Result<StampSpot, RallyServiceError> {
        self.repo
            .find_by_id(spot_id)
            .await?
            .ok_or(RallyServiceError::SpotNotFound)
    }
}

// ── ListSpots ────────────────────────────────────────────────────────────────

pub struct ListSpotsUseCase<R: StampSpotRepository> {
    pub repo: R,
}

impl<R: StampSpotRepository> ListSpotsUseCase<R> {
    pub async fn execute(&self, only_active: bool) -> Result<Vec<StampSpot>, RallyServiceError> {
        self.repo.list(only_active).await
    }
}

// ── UpdateSpot ───────────────────────────────────────────────────────────────

pub struct UpdateSpotUseCase<R: StampSpotRepository> {
    pub repo: R,
}

impl<R: StampSpotRepository> UpdateSpotUseCase<R> {
    pub async fn execute(&self, spot_id: Uuid, patch: SpotPatch) -> Result<(), RallyServiceError> {
        if patch.is_empty() {
            return Err(RallyServiceError::MissingData);
        }
        if let Some(ref name) = patch.name {
            if name.trim().is_empty() {
                return Err(RallyServiceError::MissingData);
            }
        }
        self.repo
            .find_by_id(spot_id)
            .await?
            .ok_or(RallyServiceError::SpotNotFound)?;
        self.repo.update(spot_id, &patch).await
    }
}
