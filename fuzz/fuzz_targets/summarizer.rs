#![no_main]

use libfuzzer_sys::fuzz_target;

use tubesum::summarizer::summarize;
use tubesum::transcript::cleaner::clean_caption_text;

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data);

    // Neither the caption cleaner nor the summarizer may panic on any input
    let _ = clean_caption_text(&text);
    let _ = summarize(&text, (data.len() % 300) as i64 - 10);
});
