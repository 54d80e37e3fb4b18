//! Classification endpoint

use axum::{
    extract::{Multipart, State},
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{debug, info};

use super::session::{session_cookie, session_from_headers};
use crate::models::HistoryEntry;
use crate::{ApiError, ApiResult, AppState};

/// Multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// Persisted entry plus a one-line summary for display
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub entry: HistoryEntry,
    pub summary: String,
}

struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /classify
///
/// **Request:** multipart form with an `image` file part
/// **Response:** the new history entry and `Predicted: <label>, Confidence: <c>`
///
/// Mints a session (and sets the cookie) when the request carries none.
///
/// **Errors:**
/// - 400 Bad Request: no file selected, or the file is not a decodable image
/// - 500 Internal Server Error: inference or storage failure
pub async fn classify(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Multipart,
) -> ApiResult<Response> {
    let upload = read_upload(multipart).await?;

    let (session, is_new) = match session_from_headers(&headers, state.sessions.as_ref()) {
        Some(session) => (session, false),
        None => {
            let session = state.sessions.generate();
            info!(session_id = %session, "Started new session");
            (session, true)
        }
    };

    let entry = state
        .classification
        .classify(&session, upload.bytes, &upload.filename)
        .await?;

    let summary = format!(
        "Predicted: {}, Confidence: {:.2}",
        entry.predicted_label, entry.confidence
    );
    let mut response = Json(ClassifyResponse { entry, summary }).into_response();

    if is_new {
        let cookie = HeaderValue::from_str(&session_cookie(&session))
            .map_err(|e| ApiError::Internal(format!("Invalid session cookie: {}", e)))?;
        response.headers_mut().insert(SET_COOKIE, cookie);
    }

    Ok(response)
}

async fn read_upload(mut multipart: Multipart) -> ApiResult<Upload> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed upload: {}", e)))?
    {
        if field.name() != Some(IMAGE_FIELD) {
            debug!(field = ?field.name(), "Ignoring multipart field");
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(ApiError::BadRequest("No image selected".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {}", e)))?;

        return Ok(Upload {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(ApiError::BadRequest("No image selected".to_string()))
}

pub fn classify_routes() -> Router<AppState> {
    Router::new().route("/classify", post(classify))
}
