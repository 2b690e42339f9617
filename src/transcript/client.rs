use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

use crate::transcript::{
    cleaner::clean_fragments,
    errors::TranscriptError,
    source::TranscriptSource,
    types::CaptionFragment,
    video_id::is_valid_video_id,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const MAX_TRANSCRIPT_SIZE: u64 = 5 * 1024 * 1024; // 5MB

/// Transcript source backed by YouTube's public caption tracks.
#[derive(Debug, Clone)]
pub struct YouTubeTranscripts {
    timeout: Duration,
}

impl YouTubeTranscripts {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for YouTubeTranscripts {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

#[async_trait]
impl TranscriptSource for YouTubeTranscripts {
    #[instrument(skip(self), fields(timeout = ?self.timeout))]
    async fn fetch(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Vec<CaptionFragment>, TranscriptError> {
        if !is_valid_video_id(video_id) {
            return Err(TranscriptError::InvalidVideoId(video_id.to_string()));
        }

        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|err| TranscriptError::Provider(err.to_string()))?;

        // Manually created tracks win over auto-generated ones.
        let transcript = tokio::time::timeout(
            self.timeout,
            api.fetch_transcript(video_id, &[language], false),
        )
        .await
        .map_err(|_| TranscriptError::Timeout)?
        .map_err(|err| TranscriptError::from_provider_error(err, language))?;

        debug!(snippets = transcript.snippets.len(), "caption track fetched");

        let fragments = clean_fragments(transcript.snippets.into_iter().map(|snippet| {
            CaptionFragment::new(snippet.text, snippet.start, snippet.duration)
        }));
        check_size(&fragments)?;
        Ok(fragments)
    }
}

/// Rejects transcripts whose text exceeds the size the summarizer accepts.
fn check_size(fragments: &[CaptionFragment]) -> Result<(), TranscriptError> {
    let size: u64 = fragments
        .iter()
        .map(|fragment| fragment.text.len() as u64 + 1)
        .sum();
    if size > MAX_TRANSCRIPT_SIZE {
        return Err(TranscriptError::BodyTooLarge(size));
    }
    Ok(())
}
