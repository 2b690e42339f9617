use crate::config::Config;
use crate::summarizer::DEFAULT_MAX_LENGTH;
use crate::transcript::{TranscriptSource, YouTubeTranscripts};
use std::sync::Arc;

/// Values used when a request leaves a parameter out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDefaults {
    pub max_length: i64,
    pub language: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            language: "en".to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub transcripts: Arc<dyn TranscriptSource + Send + Sync>,
    pub defaults: RequestDefaults,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            transcripts: Arc::new(YouTubeTranscripts::new(config.transcript_timeout())),
            defaults: RequestDefaults {
                max_length: config.default_max_length(),
                language: config.default_language().to_string(),
            },
        }
    }

    pub fn with_source(transcripts: Arc<dyn TranscriptSource + Send + Sync>) -> Self {
        Self {
            transcripts,
            defaults: RequestDefaults::default(),
        }
    }
}
