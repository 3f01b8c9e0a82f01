//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the skill endpoint, the health probe, and OpenAPI documentation.

use crate::{
    handlers,
    models::{
        Application, Card, CardImage, Context, Device, DialogState, Directive, ErrorResponse,
        HealthResponse, Intent, OutputSpeech, Reprompt, Request, RequestEnvelope, ResolutionAuthority,
        ResolutionCode, ResolutionStatus, ResolutionValue, ResolutionValueWrapper, Resolutions,
        Response, ResponseEnvelope, Session, Slot, SupportedInterfaces, SystemContext,
    },
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::handle_skill_request, handlers::health),
    components(
        schemas(
            RequestEnvelope, Session, Application, Context, SystemContext, Device,
            SupportedInterfaces, Request, DialogState, Intent, Slot, Resolutions,
            ResolutionAuthority, ResolutionStatus, ResolutionCode, ResolutionValueWrapper,
            ResolutionValue, ResponseEnvelope, Response, OutputSpeech, Reprompt, Card, CardImage,
            Directive, ErrorResponse, HealthResponse
        )
    ),
    tags(
        (name = "BuyBitcoin API", description = "Voice skill endpoint for crypto price questions")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/skill", post(handlers::handle_skill_request))
        .route("/health", get(handlers::health))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
