use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One caption line as delivered by the transcript provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CaptionFragment {
    pub text: String,
    /// Offset from the start of the video, in seconds.
    pub start: f64,
    pub duration: f64,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }
}
