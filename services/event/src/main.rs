use sea_orm::Database;
use tracing::info;

use bingo_core::tracing::init_tracing;
use bingo_event::config::AppConfig;
use bingo_event::router::build_router;
use bingo_event::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        event_code: config.event_code.clone(),
        site_url: config.site_url.clone(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(event = %config.event_code, "bingo service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
