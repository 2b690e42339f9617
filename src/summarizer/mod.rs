//! Extractive summarization by word frequency.
//!
//! The transcript is split into sentences, content words are counted across
//! the whole document, every sentence is scored by the counts of its tokens
//! and the best sentences are taken until the word budget is met.

pub mod frequency;
pub mod ranker;
pub mod selector;
pub mod stopwords;
pub mod tokenizer;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use frequency::FrequencyTable;
pub use ranker::SentenceScore;

/// Word budget used when a request does not name one.
pub const DEFAULT_MAX_LENGTH: i64 = 150;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub text: String,
    /// Indices of the chosen sentences, in selection order.
    pub sentence_indices: Vec<usize>,
    pub word_count: usize,
    pub total_sentences: usize,
}

pub fn summarize(transcript: &str, max_length: i64) -> Summary {
    // 1. Sentences and their word tokens
    let sentences = tokenizer::split_sentences(transcript);
    let tokenized: Vec<Vec<String>> = sentences
        .iter()
        .map(|sentence| tokenizer::tokenize_words(sentence))
        .collect();

    // 2. Content word frequencies over the whole transcript
    let table = FrequencyTable::from_tokenized(&tokenized);

    // 3. Score and order sentences
    let ranked = ranker::rank(ranker::score_sentences(&tokenized, &table));

    // 4. Fill the word budget
    let sentence_indices = selector::select(&ranked, max_length);
    let word_count = sentence_indices.iter().map(|&i| tokenized[i].len()).sum();

    Summary {
        text: selector::join(&sentences, &sentence_indices),
        sentence_indices,
        word_count,
        total_sentences: sentences.len(),
    }
}

/// Convenience wrapper returning only the summary text.
pub fn summarize_text(transcript: &str, max_length: i64) -> String {
    summarize(transcript, max_length).text
}
