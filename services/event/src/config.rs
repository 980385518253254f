/// Event service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3000). Env var: `BINGO_PORT`.
    pub port: u16,
    /// Code of the event this instance serves (default `bingo_quial_2025`).
    /// Env var: `BINGO_EVENT_CODE`.
    pub event_code: String,
    /// Public site base used to build mission page URLs. Env var: `SITE_URL`.
    pub site_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            database_url: lookup("DATABASE_URL").expect("DATABASE_URL"),
            port: lookup("BINGO_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            event_code: lookup("BINGO_EVENT_CODE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "bingo_quial_2025".to_owned()),
            site_url: lookup("SITE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "http://localhost:3000".to_owned()),
        }
    }
}
