use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use bingo_core::health::healthz;
use bingo_core::middleware::{no_store_layer, propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    admin::list_admin_missions,
    completion::{complete_mission, complete_mission_from_body},
    dashboard::get_dashboard,
    health::readyz,
    mission::get_mission,
    qrcode::{get_qrcode, get_qrcode_data_url},
    registration::register_family,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/api/registration", post(register_family))
        // Missions
        .route("/api/missions/complete", post(complete_mission_from_body))
        .route("/api/missions/{slug}", get(get_mission))
        .route("/api/missions/{slug}/complete", post(complete_mission))
        // Organizer views
        .route("/api/dashboard", get(get_dashboard))
        .route("/api/admin/missions", get(list_admin_missions))
        // QR
        .route("/api/qrcode", get(get_qrcode))
        .route("/api/qrcode/data-url", get(get_qrcode_data_url))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http())
                .layer(propagate_request_id_layer())
                .layer(no_store_layer()),
        )
        .with_state(state)
}
