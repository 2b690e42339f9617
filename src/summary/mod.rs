pub mod dtos;
pub mod handlers;

pub use handlers::{get_summary, get_transcript};
