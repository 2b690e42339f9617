use axum::Router;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    app_state::AppState,
    health,
    summary::handlers,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "tubesum",
        description = "Extractive summaries of video transcripts"
    ),
    tags(
        (name = "summary", description = "Transcript retrieval and summarization"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

/// Builds the full HTTP application: API routes, Swagger UI and the
/// tracing/request-id layers.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(handlers::get_summary))
        .routes(routes!(handlers::get_transcript))
        .routes(routes!(health::health_check))
        .with_state(state)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
