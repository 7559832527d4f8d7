use sea_orm::Database;
use tracing::info;

use rally::config::RallyConfig;
use rally::router::build_router;
use rally::state::AppState;

#[tokio::main]
async fn main() {
    rally_core::tracing::init_tracing();

    let config = RallyConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        app_base_url: config.app_base_url,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.rally_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("rally service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
