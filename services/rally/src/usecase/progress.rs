use uuid::Uuid;

use crate::domain::repository::{StampRepository, StampSpotRepository};
use crate::domain::types::CollectedStamp;
use crate::error::RallyServiceError;

/// A user's rally progress: collected stamps against the active-spot total.
#[derive(Debug, Clone)]
pub struct Progress {
    pub stamps: Vec<CollectedStamp>,
    pub total_active_spots: u64,
}

impl Progress {
    pub fn collected_count(&self) -> u64 {
        self.stamps.len() as u64
    }

    pub fn is_complete(&self) -> bool {
        self.total_active_spots > 0 && self.collected_count() >= self.total_active_spots
    }
}

pub struct GetProgressUseCase<T, S>
where
    T: StampRepository,
    S: StampSpotRepository,
{
    pub stamps: T,
    pub spots: S,
}

impl<T, S> GetProgressUseCase<T, S>
where
    T: StampRepository,
    S: StampSpotRepository,
{
    pub async fn execute(&self, user_id: Uuid) -> Result<Progress, RallyServiceError> {
        let stamps = self.stamps.list_collected(user_id).await?;
        let total_active_spots = self.spots.count_active().await?;
        Ok(Progress {
            stamps,
            total_active_spots,
        })
    }
}
