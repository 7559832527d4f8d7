use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

use rally_schema::{daily_codes, stamp_spots, user_stamps};

use crate::domain::repository::{DailyCodeRepository, StampRepository, StampSpotRepository};
use crate::domain::types::{CollectedStamp, DailyCode, SpotPatch, Stamp, StampSpot};
use crate::error::RallyServiceError;

// ── Stamp spot repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStampSpotRepository {
    pub db: DatabaseConnection,
}

impl StampSpotRepository for DbStampSpotRepository {
    async fn list(&self, only_active: bool) -> Result<Vec<StampSpot>, RallyServiceError> {
        let mut query = stamp_spots::Entity::find();
        if only_active {
            query = query.filter(stamp_spots::Column::IsActive.eq(true));
        }
        let models = query
            .order_by_desc(stamp_spots::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list stamp spots")?;
        Ok(models.into_iter().map(spot_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StampSpot>, RallyServiceError> {
        let model = stamp_spots::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find stamp spot by id")?;
        Ok(model.map(spot_from_model))
    }

    async fn create(&self, spot: &StampSpot) -> Result<(), RallyServiceError> {
        stamp_spots::ActiveModel {
            id: Set(spot.id),
            name: Set(spot.name.clone()),
            description: Set(spot.description.clone()),
            location: Set(spot.location.clone()),
            image_url: Set(spot.image_url.clone()),
            is_active: Set(spot.is_active),
            created_by: Set(spot.created_by),
            created_at: Set(spot.created_at),
            updated_at: Set(spot.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create stamp spot")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &SpotPatch) -> Result<(), RallyServiceError> {
        let mut am = stamp_spots::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = patch.name {
            am.name = Set(name.clone());
        }
        if let Some(ref description) = patch.description {
            am.description = Set(Some(description.clone()));
        }
        if let Some(ref location) = patch.location {
            am.location = Set(Some(location.clone()));
        }
        if let Some(ref image_url) = patch.image_url {
            am.image_url = Set(Some(image_url.clone()));
        }
        if let Some(is_active) = patch.is_active {
            am.is_active = Set(is_active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update stamp spot")?;
        Ok(())
    }

    async fn count_active(&self) -> Result<u64, RallyServiceError> {
        let count = stamp_spots::Entity::find()
            .filter(stamp_spots::Column::IsActive.eq(true))
            .count(&self.db)
            .await
            .context("count active stamp spots")?;
        Ok(count)
    }
}

fn spot_from_model(model: stamp_spots::Model) -> StampSpot {
    StampSpot {
        id: model.id,
        name: model.name,
        description: model.description,
        location: model.location,
        image_url: model.image_url,
        is_active: model.is_active,
        created_by: model.created_by,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Daily code repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDailyCodeRepository {
    pub db: DatabaseConnection,
}

impl DailyCodeRepository for DbDailyCodeRepository {
    async fn find_by_spot_and_date(
        &self,
        spot_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<DailyCode>, RallyServiceError> {
        let model = daily_codes::Entity::find()
            .filter(daily_codes::Column::SpotId.eq(spot_id))
            .filter(daily_codes::Column::ValidDate.eq(date))
            .one(&self.db)
            .await
            .context("find daily code by spot and date")?;
        Ok(model.map(daily_code_from_model))
    }

    async fn insert(&self, code: &DailyCode) -> Result<bool, RallyServiceError> {
        let am = daily_codes::ActiveModel {
            id: Set(code.id),
            spot_id: Set(code.spot_id),
            payload: Set(code.payload.clone()),
            valid_date: Set(code.valid_date),
            created_at: Set(code.created_at),
        };
        // DO NOTHING on the (spot_id, valid_date) unique index: the
        // database, not the caller's existence check, holds the invariant.
        let rows = daily_codes::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    daily_codes::Column::SpotId,
                    daily_codes::Column::ValidDate,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert daily code")?;
        Ok(rows > 0)
    }
}

fn daily_code_from_model(model: daily_codes::Model) -> DailyCode {
    DailyCode {
        id: model.id,
        spot_id: model.spot_id,
        payload: model.payload,
        valid_date: model.valid_date,
        created_at: model.created_at,
    }
}

// ── Stamp repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbStampRepository {
    pub db: DatabaseConnection,
}

impl StampRepository for DbStampRepository {
    async fn exists(
        &self,
        user_id: Uuid,
        daily_code_id: Uuid,
    ) -> Result<bool, RallyServiceError> {
        let count = user_stamps::Entity::find()
            .filter(user_stamps::Column::UserId.eq(user_id))
            .filter(user_stamps::Column::DailyCodeId.eq(daily_code_id))
            .count(&self.db)
            .await
            .context("check stamp existence")?;
        Ok(count > 0)
    }

    async fn insert(&self, stamp: &Stamp) -> Result<bool, RallyServiceError> {
        let am = user_stamps::ActiveModel {
            id: Set(stamp.id),
            user_id: Set(stamp.user_id),
            spot_id: Set(stamp.spot_id),
            daily_code_id: Set(stamp.daily_code_id),
            collected_at: Set(stamp.collected_at),
        };
        // DO NOTHING on the (user_id, daily_code_id) unique index, which
        // serializes double-taps and duplicate camera frames.
        let rows = user_stamps::Entity::insert(am)
            .on_conflict(
                OnConflict::columns([
                    user_stamps::Column::UserId,
                    user_stamps::Column::DailyCodeId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("insert user stamp")?;
        Ok(rows > 0)
    }

    async fn list_collected(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<CollectedStamp>, RallyServiceError> {
        let rows = user_stamps::Entity::find()
            .filter(user_stamps::Column::UserId.eq(user_id))
            .order_by_desc(user_stamps::Column::CollectedAt)
            .find_also_related(stamp_spots::Entity)
            .all(&self.db)
            .await
            .context("list collected stamps")?;

        let mut collected = Vec::with_capacity(rows.len());
        for (stamp, spot) in rows {
            let spot = spot.context("stamp row without matching spot")?;
            collected.push(CollectedStamp {
                stamp: stamp_from_model(stamp),
                spot_name: spot.name,
                spot_description: spot.description,
                spot_location: spot.location,
            });
        }
        Ok(collected)
    }
}

fn stamp_from_model(model: user_stamps::Model) -> Stamp {
    Stamp {
        id: model.id,
        user_id: model.user_id,
        spot_id: model.spot_id,
        daily_code_id: model.daily_code_id,
        collected_at: model.collected_at,
    }
}
