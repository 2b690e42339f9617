#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tubesum::{
    app_state::AppState,
    routes,
    transcript::{CaptionFragment, TranscriptError, TranscriptSource, video_id::is_valid_video_id},
};

/// In-memory transcript source keyed by video id and language.
#[derive(Debug, Default)]
pub struct StaticTranscripts {
    videos: HashMap<String, HashMap<String, Vec<CaptionFragment>>>,
    unplayable: HashSet<String>,
}

impl StaticTranscripts {
    /// Adds a track whose fragments are the given lines, two seconds apart.
    pub fn with_track(mut self, video_id: &str, language: &str, lines: &[&str]) -> Self {
        let fragments = lines
            .iter()
            .enumerate()
            .map(|(i, line)| CaptionFragment::new(*line, i as f64 * 2.0, 1.5))
            .collect();
        self.videos
            .entry(video_id.to_string())
            .or_default()
            .insert(language.to_string(), fragments);
        self
    }

    pub fn with_unplayable(mut self, video_id: &str) -> Self {
        self.unplayable.insert(video_id.to_string());
        self
    }
}

#[async_trait]
impl TranscriptSource for StaticTranscripts {
    async fn fetch(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Vec<CaptionFragment>, TranscriptError> {
        if !is_valid_video_id(video_id) {
            return Err(TranscriptError::InvalidVideoId(video_id.to_string()));
        }
        if self.unplayable.contains(video_id) {
            return Err(TranscriptError::VideoUnplayable {
                video_id: video_id.to_string(),
            });
        }

        let tracks = self
            .videos
            .get(video_id)
            .ok_or_else(|| TranscriptError::VideoUnavailable {
                video_id: video_id.to_string(),
            })?;

        tracks
            .get(language)
            .cloned()
            .ok_or_else(|| TranscriptError::NoTranscriptFound {
                video_id: video_id.to_string(),
                language: language.to_string(),
            })
    }
}

pub fn test_app(source: StaticTranscripts) -> Router {
    routes::router(AppState::with_source(Arc::new(source)))
}

pub fn cat_video() -> StaticTranscripts {
    StaticTranscripts::default().with_track(
        "abc123DEF45",
        "en",
        &["The cat sat.", "The cat sat on the mat.", "Dogs bark loudly at night."],
    )
}
