use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::app_state::RequestDefaults;
use crate::transcript::{CaptionFragment, extract_video_id};

/// Raw query string of `GET /summary`. Values stay strings so that a bad
/// `max_length` produces our own error body instead of a framework rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// Video URL; the id is taken from its `v` parameter or path.
    #[serde(default)]
    pub url: String,
    /// Word budget of the summary (default 150).
    pub max_length: Option<String>,
    /// Caption language code (default "en").
    pub language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryParams {
    pub video_id: String,
    pub max_length: i64,
    pub language: String,
}

impl SummaryQuery {
    pub fn validate(&self, defaults: &RequestDefaults) -> Result<SummaryParams, String> {
        let max_length = match self.max_length.as_deref() {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("invalid max_length '{}': expected an integer", raw))?,
            None => defaults.max_length,
        };

        Ok(SummaryParams {
            video_id: extract_video_id(&self.url),
            max_length,
            language: language_or_default(self.language.as_deref(), defaults),
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TranscriptQuery {
    /// Video URL; the id is taken from its `v` parameter or path.
    #[serde(default)]
    pub url: String,
    /// Caption language code (default "en").
    pub language: Option<String>,
}

impl TranscriptQuery {
    pub fn video_id(&self) -> String {
        extract_video_id(&self.url)
    }

    pub fn language(&self, defaults: &RequestDefaults) -> String {
        language_or_default(self.language.as_deref(), defaults)
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TranscriptResponse {
    pub video_id: String,
    pub language: String,
    /// Fragment texts joined with single spaces.
    pub text: String,
    pub fragments: Vec<CaptionFragment>,
}

fn language_or_default(language: Option<&str>, defaults: &RequestDefaults) -> String {
    match language.map(str::trim) {
        Some(language) if !language.is_empty() => language.to_string(),
        _ => defaults.language.clone(),
    }
}
