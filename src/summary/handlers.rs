use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    summarizer,
    summary::dtos::{SummaryQuery, TranscriptQuery, TranscriptResponse},
    transcript::{TranscriptError, join_fragments},
};

#[utoipa::path(
    get,
    path = "/summary",
    tag = "summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Extractive summary of the video transcript",
            body = String, content_type = "text/plain"),
        (status = 400, description = "Invalid query parameter",
            body = String, content_type = "text/plain"),
        (status = 404, description = "No transcript available for the video",
            body = String, content_type = "text/plain")
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Response {
    let params = match query.validate(&state.defaults) {
        Ok(params) => params,
        Err(error) => {
            warn!(%error, "rejected summary request");
            return error_response(StatusCode::BAD_REQUEST, &error);
        }
    };

    let fragments = match state
        .transcripts
        .fetch(&params.video_id, &params.language)
        .await
    {
        Ok(fragments) => fragments,
        Err(err) => {
            log_transcript_error(&params.video_id, &err);
            return error_response(StatusCode::NOT_FOUND, &err.to_string());
        }
    };

    let transcript = join_fragments(&fragments);
    let summary = summarizer::summarize(&transcript, params.max_length);

    info!(
        video_id = %params.video_id,
        language = %params.language,
        max_length = params.max_length,
        fragments = fragments.len(),
        sentences = summary.total_sentences,
        selected = summary.sentence_indices.len(),
        words = summary.word_count,
        "summary generated"
    );

    (StatusCode::OK, summary.text).into_response()
}

#[utoipa::path(
    get,
    path = "/transcript",
    tag = "summary",
    params(TranscriptQuery),
    responses(
        (status = 200, description = "Full caption transcript", body = TranscriptResponse),
        (status = 404, description = "No transcript available for the video",
            body = String, content_type = "text/plain")
    )
)]
pub async fn get_transcript(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Response {
    let video_id = query.video_id();
    let language = query.language(&state.defaults);

    match state.transcripts.fetch(&video_id, &language).await {
        Ok(fragments) => {
            info!(%video_id, %language, fragments = fragments.len(), "transcript fetched");
            let response = TranscriptResponse {
                text: join_fragments(&fragments),
                video_id,
                language,
                fragments,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            log_transcript_error(&video_id, &err);
            error_response(StatusCode::NOT_FOUND, &err.to_string())
        }
    }
}

fn log_transcript_error(video_id: &str, err: &TranscriptError) {
    if err.is_video_error() {
        warn!(%video_id, error = %err, "no transcript for video");
    } else {
        error!(%video_id, error = %err, "transcript source failed");
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, format!("Error: {}", message)).into_response()
}
