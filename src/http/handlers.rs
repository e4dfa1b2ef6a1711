//! HTTP request handlers

use axum::{
    body::Bytes,
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use caption_lib::{extract_video_id, parse_caption_file, ParsedCaptions, VideoInfo};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{Result, ServerError};
use crate::state::AppState;

/// Caption overlay player page
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Multipart field carrying the caption file
const CAPTION_FILE_FIELD: &str = "caption_file";

/// Multipart field carrying the video id the captions belong to
const VIDEO_ID_FIELD: &str = "video_id";

/// Player page endpoint
/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

/// Version endpoint
pub async fn version_check() -> &'static str {
    concat!("caption-server v", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Deserialize)]
pub struct ProcessVideoRequest {
    #[serde(default)]
    pub url: String,
}

/// Video lookup endpoint
/// POST /process_video
///
/// Falls back to placeholder info when the metadata lookup fails so the
/// video can still be embedded. Captions are always empty here.
pub async fn process_video(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessVideoRequest>,
) -> Result<Json<VideoInfo>> {
    let url = request.url.trim();
    if url.is_empty() {
        return Err(ServerError::BadRequest(
            "Please provide a YouTube URL".to_string(),
        ));
    }

    let video_id = extract_video_id(url)
        .ok_or_else(|| ServerError::BadRequest("Invalid YouTube URL".to_string()))?;
    tracing::info!("Extracted video ID: {}", video_id);

    let mut info = match state.metadata.fetch(url).await {
        Ok(info) => info,
        Err(e) => {
            tracing::warn!("{}; using placeholder info for {}", e, video_id);
            VideoInfo::placeholder(&video_id)
        }
    };
    info.captions.clear();

    Ok(Json(info))
}

/// Caption upload endpoint
/// POST /upload_captions (multipart: caption_file, video_id)
pub async fn upload_captions(mut multipart: Multipart) -> Result<Json<ParsedCaptions>> {
    let mut file: Option<(String, Bytes)> = None;
    let mut video_id = String::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(CAPTION_FILE_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some((filename, data));
            }
            Some(VIDEO_ID_FIELD) => {
                video_id = field.text().await.map_err(multipart_error)?;
            }
            _ => {}
        }
    }

    let Some((filename, data)) = file else {
        return Err(ServerError::BadRequest(
            "No caption file provided".to_string(),
        ));
    };
    if filename.is_empty() {
        return Err(ServerError::BadRequest("No file selected".to_string()));
    }
    let video_id = video_id.trim();
    if video_id.is_empty() {
        return Err(ServerError::BadRequest("No video ID provided".to_string()));
    }

    let span = tracing::info_span!(
        "upload",
        upload_id = %Uuid::new_v4(),
        filename = %filename.to_lowercase(),
        video_id = %video_id
    );
    let parsed = span.in_scope(|| parse_upload(&filename, &data))?;

    Ok(Json(parsed))
}

/// Decode an uploaded file and run it through the caption engine
fn parse_upload(filename: &str, data: &[u8]) -> Result<ParsedCaptions> {
    let content = std::str::from_utf8(data).map_err(|e| {
        ServerError::UploadFailed(format!("caption file is not valid UTF-8: {}", e))
    })?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let parsed = parse_caption_file(filename, content)?;
    tracing::info!("Successfully parsed {} captions from uploaded file", parsed.count);
    Ok(parsed)
}

fn multipart_error(err: MultipartError) -> ServerError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ServerError::UploadTooLarge
    } else {
        ServerError::UploadFailed(err.body_text())
    }
}
