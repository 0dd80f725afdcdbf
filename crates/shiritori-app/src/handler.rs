use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::percent_decode;
use shiritori_core::error::ShiritoriError;
use shiritori_core::types::ShiritoriRecord;

use crate::state::AppState;

/// Failures while pulling the word out of a request
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("mime: no media type")]
    MissingContentType,

    #[error("{0}")]
    InvalidContentType(#[from] mime::FromStrError),

    #[error("EOF")]
    EmptyBody,

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    Body(#[from] BytesRejection),
}

impl DecodeError {
    pub fn to_record(&self) -> ShiritoriRecord {
        ShiritoriRecord::failure(format!("cannot decode input image: {self}"))
    }
}

/// Extract the `word` field from a JSON or form-encoded body
pub fn decode_word(content_type: Option<&str>, body: &[u8]) -> Result<String, DecodeError> {
    let content_type = content_type
        .filter(|ct| !ct.trim().is_empty())
        .ok_or(DecodeError::MissingContentType)?;
    let mime: mime::Mime = content_type.parse()?;

    if mime.essence_str() == mime::APPLICATION_JSON.essence_str() {
        // Only the first JSON value counts, trailing data is ignored.
        // `null` leaves the record empty.
        let record = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<ShiritoriRecord>>()
            .next()
            .ok_or(DecodeError::EmptyBody)??
            .unwrap_or_default();
        Ok(record.word)
    } else {
        let pairs = parse_form(body)?;
        let word = pairs
            .into_iter()
            .find(|(key, _)| key == "word")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Ok(word)
    }
}

/// Strict `application/x-www-form-urlencoded` parsing.
///
/// Any malformed pair fails the whole body: `;` separators, `%` not
/// followed by two hex digits, or escapes that do not decode to UTF-8.
fn parse_form(body: &[u8]) -> Result<Vec<(String, String)>, DecodeError> {
    let mut pairs = Vec::new();

    for pair in body.split(|&b| b == b'&').filter(|p| !p.is_empty()) {
        if pair.contains(&b';') {
            return Err(DecodeError::Form("invalid semicolon separator in query".to_string()));
        }

        let (key, value) = match pair.iter().position(|&b| b == b'=') {
            Some(idx) => (&pair[..idx], &pair[idx + 1..]),
            None => (pair, &b""[..]),
        };

        pairs.push((unescape(key)?, unescape(value)?));
    }

    Ok(pairs)
}

fn unescape(component: &[u8]) -> Result<String, DecodeError> {
    for (idx, _) in component.iter().enumerate().filter(|&(_, &b)| b == b'%') {
        let valid = matches!(
            component.get(idx + 1..idx + 3),
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
        );
        if !valid {
            let end = (idx + 3).min(component.len());
            return Err(DecodeError::Form(format!(
                "invalid URL escape {:?}",
                String::from_utf8_lossy(&component[idx..end])
            )));
        }
    }

    let spaced: Vec<u8> = component
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();

    percent_decode(&spaced)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| DecodeError::Form(format!("invalid UTF-8 in form value: {e}")))
}

/// Entry point for every request
pub async fn handle(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let word = match body
        .map_err(DecodeError::from)
        .and_then(|body| decode_word(content_type, &body))
    {
        Ok(word) => word,
        Err(e) => {
            tracing::warn!("Rejecting request: {}", e);
            return json_response(&e.to_record());
        }
    };

    // Dictionary reads block, keep them off the async workers
    let record = match tokio::task::spawn_blocking(move || {
        state.play(&word, &mut rand::thread_rng())
    })
    .await
    {
        Ok(record) => record,
        Err(e) => {
            tracing::error!("Selection task failed: {}", e);
            ShiritoriRecord::failure(ShiritoriError::NotFound.to_string())
        }
    };

    json_response(&record)
}

/// Compact JSON plus trailing newline
fn json_response(record: &ShiritoriRecord) -> Response {
    match serde_json::to_vec(record) {
        Ok(mut body) => {
            body.push(b'\n');
            ([(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to encode response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
