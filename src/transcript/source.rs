use async_trait::async_trait;

use crate::transcript::{errors::TranscriptError, types::CaptionFragment};

/// Anything that can produce the captions of a video in a given language.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptSource {
    async fn fetch(
        &self,
        video_id: &str,
        language: &str,
    ) -> Result<Vec<CaptionFragment>, TranscriptError>;
}

/// Concatenates fragment texts with single spaces into one transcript.
pub fn join_fragments(fragments: &[CaptionFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
