use crate::summarizer::frequency::FrequencyTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceScore {
    /// Position of the sentence in document order.
    pub index: usize,
    pub score: usize,
    /// Number of word tokens, punctuation included.
    pub word_count: usize,
}

/// Scores each sentence by summing the table counts of all its tokens.
///
/// Tokens are not filtered here; stopwords and punctuation simply contribute
/// nothing because the table never contains them.
pub fn score_sentences<S: AsRef<str>>(
    sentences: &[Vec<S>],
    table: &FrequencyTable,
) -> Vec<SentenceScore> {
    sentences
        .iter()
        .enumerate()
        .map(|(index, tokens)| SentenceScore {
            index,
            score: tokens.iter().map(|token| table.count(token.as_ref())).sum(),
            word_count: tokens.len(),
        })
        .collect()
}

/// Orders scores for selection: highest score first, ties by document order.
///
/// Zero-score sentences are dropped unless nothing scores above zero, in
/// which case every sentence remains in document order.
pub fn rank(mut scores: Vec<SentenceScore>) -> Vec<SentenceScore> {
    if scores.iter().any(|s| s.score > 0) {
        scores.retain(|s| s.score > 0);
    }
    scores.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    scores
}
