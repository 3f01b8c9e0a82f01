//! Axum Handlers for the REST API
//!
//! The voice platform posts one request envelope per turn to `/skill`. The
//! handler checks the envelope is addressed to this skill, runs it through
//! the dispatcher, and returns the response envelope. `utoipa` doc comments
//! generate the OpenAPI documentation.

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{error, warn};

use crate::{
    models::{ErrorResponse, HealthResponse, RequestEnvelope, ResponseEnvelope},
    state::AppState,
};

pub enum ApiError {
    BadRequest(String),
    InternalServerError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::InternalServerError(err) => {
                error!("Internal Server Error: {:?}", err);
                let message = "An internal server error occurred.".to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse { message }),
                )
                    .into_response()
            }
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::InternalServerError(err.into())
    }
}

/// Handle one conversational turn.
#[utoipa::path(
    post,
    path = "/skill",
    request_body = RequestEnvelope,
    responses(
        (status = 200, description = "Response envelope for the platform", body = ResponseEnvelope),
        (status = 400, description = "Malformed envelope or wrong application id", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn handle_skill_request(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    let Json(envelope) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected request envelope");
        ApiError::BadRequest(rejection.body_text())
    })?;

    if let Some(expected) = &state.config.skill_id {
        let received = envelope.application_id();
        if received != Some(expected.as_str()) {
            warn!(?received, "Request addressed to a different skill");
            return Err(ApiError::BadRequest(
                "Request application id does not match this skill".to_string(),
            ));
        }
    }

    let response = state.skill.invoke(envelope).await?;
    Ok(Json(response))
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
