/// Rally service configuration loaded from environment variables.
#[derive(Debug)]
pub struct RallyConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Public base URL embedded in scan links (e.g. "https://rally.example.com").
    /// Env var: `APP_BASE_URL`.
    pub app_base_url: String,
    /// TCP port to listen on (default 3115). Env var: `RALLY_PORT`.
    pub rally_port: u16,
}

impl RallyConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            app_base_url: std::env::var("APP_BASE_URL").expect("APP_BASE_URL"),
            rally_port: std::env::var("RALLY_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3115),
        }
    }
}
