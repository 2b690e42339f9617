use thiserror::Error;
use yt_transcript_rs::errors::{
    CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason as Reason,
};

#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("invalid video id: '{0}'")]
    InvalidVideoId(String),

    #[error("the video {video_id} is no longer available")]
    VideoUnavailable { video_id: String },

    #[error("the video {video_id} is age restricted")]
    AgeRestricted { video_id: String },

    #[error("the video {video_id} is unplayable")]
    VideoUnplayable { video_id: String },

    #[error("subtitles are disabled for the video {video_id}")]
    TranscriptsDisabled { video_id: String },

    #[error("no transcript found for the video {video_id} in language '{language}'")]
    NoTranscriptFound { video_id: String, language: String },

    #[error("requests for the video {video_id} are being blocked by YouTube")]
    RequestBlocked { video_id: String },

    #[error("transcript too large: {0} bytes")]
    BodyTooLarge(u64),

    #[error("request timeout")]
    Timeout,

    #[error("transcript provider failed: {0}")]
    Provider(String),
}

impl TranscriptError {
    /// Maps a provider failure for a `language` request onto the taxonomy.
    pub fn from_provider_error(err: CouldNotRetrieveTranscript, language: &str) -> Self {
        let video_id = err.video_id.clone();
        match &err.reason {
            Some(Reason::InvalidVideoId { .. }) => Self::InvalidVideoId(video_id),
            Some(Reason::VideoUnavailable { .. }) => Self::VideoUnavailable { video_id },
            Some(Reason::AgeRestricted { .. }) => Self::AgeRestricted { video_id },
            Some(Reason::VideoUnplayable { .. }) => Self::VideoUnplayable { video_id },
            Some(Reason::TranscriptsDisabled { .. }) => Self::TranscriptsDisabled { video_id },
            Some(Reason::NoTranscriptFound { .. }) => Self::NoTranscriptFound {
                video_id,
                language: language.to_string(),
            },
            Some(Reason::IpBlocked { .. } | Reason::RequestBlocked { .. }) => {
                Self::RequestBlocked { video_id }
            }
            _ => Self::Provider(err.to_string()),
        }
    }

    /// Failures caused by the video itself rather than by the transport.
    pub fn is_video_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidVideoId(_)
                | Self::VideoUnavailable { .. }
                | Self::AgeRestricted { .. }
                | Self::VideoUnplayable { .. }
                | Self::TranscriptsDisabled { .. }
                | Self::NoTranscriptFound { .. }
        )
    }
}
