use sea_orm::DatabaseConnection;

use crate::infra::db::{DbDailyCodeRepository, DbStampRepository, DbStampSpotRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Public base URL used to build scan links.
    pub app_base_url: String,
}

impl AppState {
    pub fn spot_repo(&self) -> DbStampSpotRepository {
        DbStampSpotRepository {
            db: self.db.clone(),
        }
    }

    pub fn daily_code_repo(&self) -> DbDailyCodeRepository {
        DbDailyCodeRepository {
            db: self.db.clone(),
        }
    }

    pub fn stamp_repo(&self) -> DbStampRepository {
        DbStampRepository {
            db: self.db.clone(),
        }
    }
}
