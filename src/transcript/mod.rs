pub mod cleaner;
pub mod client;
pub mod errors;
pub mod source;
pub mod types;
pub mod video_id;

pub use client::YouTubeTranscripts;
pub use errors::TranscriptError;
pub use source::{TranscriptSource, join_fragments};
pub use types::CaptionFragment;
pub use video_id::extract_video_id;

#[cfg(test)]
pub use source::MockTranscriptSource;
