use std::collections::HashMap;

use crate::summarizer::stopwords::is_content_word;

/// Occurrence counts of content words across one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts every content word in the tokenized sentences. Stopwords and
    /// non-alphabetic tokens are never inserted.
    pub fn from_tokenized<S: AsRef<str>>(sentences: &[Vec<S>]) -> Self {
        let mut counts = HashMap::new();
        for token in sentences.iter().flatten() {
            let token = token.as_ref();
            if is_content_word(token) {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Count for a token; absent tokens count zero.
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
