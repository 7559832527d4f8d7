use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

use rally_core::health::{healthz, readyz};
use rally_core::middleware::request_id_layer;

use crate::handlers::{
    daily_code::{get_spot_daily_code, issue_daily_codes},
    spot::{create_spot, get_spot, get_spots, update_spot},
    stamp::{get_my_progress, get_my_stamps, redeem_stamp},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Spots
        .route("/spots", get(get_spots))
        .route("/spots", post(create_spot))
        .route("/spots/{id}", get(get_spot))
        .route("/spots/{id}", patch(update_spot))
        // Daily codes
        .route("/daily-codes", post(issue_daily_codes))
        .route("/spots/{id}/daily-code", get(get_spot_daily_code))
        // Stamps
        .route("/users/@me/stamps", post(redeem_stamp))
        .route("/users/@me/stamps", get(get_my_stamps))
        .route("/users/@me/progress", get(get_my_progress))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
