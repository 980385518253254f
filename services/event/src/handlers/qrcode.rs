use axum::{
    Json,
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::QrFormat;
use crate::error::EventServiceError;
use crate::infra::qr::{self, QrImage};

#[derive(Deserialize)]
pub struct QrQuery {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub format: Option<String>,
}

fn required_url(url: Option<String>) -> Result<String, EventServiceError> {
    url.filter(|u| !u.trim().is_empty())
        .ok_or(EventServiceError::MissingUrl)
}

// ── GET /api/qrcode ──────────────────────────────────────────────────────────

pub async fn get_qrcode(Query(query): Query<QrQuery>) -> Result<Response, EventServiceError> {
    let target = required_url(query.url)?;
    let image = qr::render(&target, QrFormat::from_param(query.format.as_deref()))?;
    let content_type = [(header::CONTENT_TYPE, image.content_type())];
    Ok(match image {
        QrImage::Png(bytes) => (content_type, bytes).into_response(),
        QrImage::Svg(doc) => (content_type, doc).into_response(),
    })
}

// ── GET /api/qrcode/data-url ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct QrDataUrlResponse {
    pub png: String,
}

pub async fn get_qrcode_data_url(
    Query(query): Query<QrQuery>,
) -> Result<Json<QrDataUrlResponse>, EventServiceError> {
    let target = required_url(query.url)?;
    let png = qr::render_data_url(&target)?;
    Ok(Json(QrDataUrlResponse { png }))
}
