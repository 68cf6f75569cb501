//! Rendering endpoint handler.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;

use super::state::{MockState, RecordedRequest};

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// POST /
///
/// Simulates the rendering endpoint: enforces the required token when
/// configured, honors a forced failure, and otherwise records the request
/// and responds with the configured document bytes.
pub async fn render_invoice(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    let authorization = header_value(&headers, header::AUTHORIZATION);

    if let Some(required) = &state.required_token {
        let expected = format!("Bearer {required}");
        if authorization.as_deref() != Some(expected.as_str()) {
            return (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"message": "invalid API key"})),
            )
                .into_response();
        }
    }

    if let Some((status, failure_body)) = &state.forced_failure {
        let status =
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return (status, failure_body.clone()).into_response();
    }

    state.requests.push(RecordedRequest {
        authorization,
        accept_language: header_value(&headers, header::ACCEPT_LANGUAGE),
        body,
    });

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/pdf")],
        state.document.clone(),
    )
        .into_response()
}
