//! QR code rendering for mission links.

use std::io::Cursor;

use anyhow::{Context as _, anyhow};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use qrcode::render::svg;

use crate::domain::types::QrFormat;

/// Smallest width and height of a rendered code, in pixels.
const MIN_DIMENSION: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QrImage {
    Png(Vec<u8>),
    Svg(String),
}

impl QrImage {
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png(_) => "image/png",
            Self::Svg(_) => "image/svg+xml",
        }
    }
}

/// Encodes `target` as a QR code image.
pub fn render(target: &str, format: QrFormat) -> anyhow::Result<QrImage> {
    let code = encode(target)?;
    match format {
        QrFormat::Png => render_png(&code).map(QrImage::Png),
        QrFormat::Svg => Ok(QrImage::Svg(render_svg(&code))),
    }
}

/// PNG rendering of `target` as a `data:image/png;base64,...` URL.
pub fn render_data_url(target: &str) -> anyhow::Result<String> {
    let png = render_png(&encode(target)?)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

fn encode(target: &str) -> anyhow::Result<QrCode> {
    QrCode::new(target.as_bytes()).map_err(|e| anyhow!("encode qr code: {e:?}"))
}

fn render_png(code: &QrCode) -> anyhow::Result<Vec<u8>> {
    let img = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .context("write qr png")?;
    Ok(bytes)
}

fn render_svg(code: &QrCode) -> String {
    let doc = code
        .render::<svg::Color<'_>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .build();
    // Drop the XML prolog so the body can be inlined as markup.
    match doc.find("<svg") {
        Some(start) => doc[start..].to_owned(),
        None => doc,
    }
}
