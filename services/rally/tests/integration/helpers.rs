use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use rally::domain::repository::{DailyCodeRepository, StampRepository, StampSpotRepository};
use rally::domain::types::{CollectedStamp, DailyCode, SpotPatch, Stamp, StampSpot};
use rally::error::RallyServiceError;

// ── MockSpotRepo ─────────────────────────────────────────────────────────────

pub struct MockSpotRepo {
    pub spots: Arc<Mutex<Vec<StampSpot>>>,
}

impl MockSpotRepo {
    pub fn new(spots: Vec<StampSpot>) -> Self {
        Self {
            spots: Arc::new(Mutex::new(spots)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl StampSpotRepository for MockSpotRepo {
    async fn list(&self, only_active: bool) -> Result<Vec<StampSpot>, RallyServiceError> {
        Ok(self
            .spots
            .lock()
            .unwrap()
            .iter()
            .filter(|s| !only_active || s.is_active)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StampSpot>, RallyServiceError> {
        Ok(self.spots.lock().unwrap().iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, spot: &StampSpot) -> Result<(), RallyServiceError> {
        self.spots.lock().unwrap().push(spot.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &SpotPatch) -> Result<(), RallyServiceError> {
        let mut spots = self.spots.lock().unwrap();
        if let Some(spot) = spots.iter_mut().find(|s| s.id == id) {
            if let Some(ref name) = patch.name {
                spot.name = name.clone();
            }
            if let Some(ref description) = patch.description {
                spot.description = Some(description.clone());
            }
            if let Some(active) = patch.is_active {
                spot.is_active = active;
            }
            spot.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn count_active(&self) -> Result<u64, RallyServiceError> {
        Ok(self
            .spots
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.is_active)
            .count() as u64)
    }
}

// ── MockDailyCodeRepo ────────────────────────────────────────────────────────

pub struct MockDailyCodeRepo {
    pub codes: Arc<Mutex<Vec<DailyCode>>>,
}

impl MockDailyCodeRepo {
    pub fn empty() -> Self {
        Self {
            codes: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Shared handle to the stored codes for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<DailyCode>>> {
        Arc::clone(&self.codes)
    }
}

impl DailyCodeRepository for MockDailyCodeRepo {
    async fn find_by_spot_and_date(
        &self,
        spot_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyCode>, RallyServiceError> {
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.spot_id == spot_id && c.valid_date == date)
            .cloned())
    }

    // Mirrors the database guard: the (spot_id, valid_date) pair is unique
    // and a conflicting insert reports `false`.
    async fn insert(&self, code: &DailyCode) -> Result<bool, RallyServiceError> {
        let mut codes = self.codes.lock().unwrap();
        if codes
            .iter()
            .any(|c| c.spot_id == code.spot_id && c.valid_date == code.valid_date)
        {
            return Ok(false);
        }
        codes.push(code.clone());
        Ok(true)
    }
}

// ── MockStampRepo ────────────────────────────────────────────────────────────

pub struct MockStampRepo {
    pub stamps: Arc<Mutex<Vec<Stamp>>>,
    pub spots: Arc<Mutex<Vec<StampSpot>>>,
}

impl MockStampRepo {
    pub fn new(spots: &MockSpotRepo) -> Self {
        Self {
            stamps: Arc::new(Mutex::new(vec![])),
            spots: Arc::clone(&spots.spots),
        }
    }

    /// Shared handle to the stored stamps for post-execution inspection.
    pub fn stamps_handle(&self) -> Arc<Mutex<Vec<Stamp>>> {
        Arc::clone(&self.stamps)
    }
}

impl StampRepository for MockStampRepo {
    async fn exists(
        &self,
        user_id: Uuid,
        daily_code_id: Uuid,
    ) -> Result<bool, RallyServiceError> {
        Ok(self
            .stamps
            .lock()
            .unwrap()
            .iter()
            .any(|s| s.user_id == user_id && s.daily_code_id == daily_code_id))
    }

    // Mirrors the database guard: (user_id, daily_code_id) is unique.
    async fn insert(&self, stamp: &Stamp) -> Result<bool, RallyServiceError> {
        let mut stamps = self.stamps.lock().unwrap();
        if stamps
            .iter()
            .any(|s| s.user_id == stamp.user_id && s.daily_code_id == stamp.daily_code_id)
        {
            return Ok(false);
        }
        stamps.push(stamp.clone());
        Ok(true)
    }

    async fn list_collected(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CollectedStamp>, RallyServiceError> {
        let spots = self.spots.lock().unwrap();
        let mut collected: Vec<CollectedStamp> = self
            .stamps
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|stamp| {
                let spot = spots.iter().find(|sp| sp.id == stamp.spot_id);
                CollectedStamp {
                    stamp: stamp.clone(),
                    spot_name: spot.map(|sp| sp.name.clone()).unwrap_or_default(),
                    spot_description: spot.and_then(|sp| sp.description.clone()),
                    spot_location: spot.and_then(|sp| sp.location.clone()),
                }
            })
            .collect();
        collected.sort_by(|a, b| b.stamp.collected_at.cmp(&a.stamp.collected_at));
        Ok(collected)
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_spot(name: &str, active: bool) -> StampSpot {
    let now = Utc::now();
    StampSpot {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        description: Some(format!("{name} description")),
        location: None,
        image_url: None,
        is_active: active,
        created_by: Some(Uuid::new_v4()),
        created_at: now,
        updated_at: now,
    }
}

pub fn june_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}
