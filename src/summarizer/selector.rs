use crate::summarizer::ranker::SentenceScore;

/// Greedily takes ranked sentences until their word count reaches `budget`.
///
/// The stop check runs after each append, so the sentence that crosses the
/// budget is kept whole and a budget of zero or less still yields the top
/// sentence.
pub fn select(ranked: &[SentenceScore], budget: i64) -> Vec<usize> {
    let mut selected = Vec::new();
    let mut total_words: i64 = 0;

    for sentence in ranked {
        selected.push(sentence.index);
        total_words = total_words.saturating_add(sentence.word_count as i64);
        if total_words >= budget {
            break;
        }
    }

    selected
}

/// Joins the selected sentences with single spaces, in selection order.
pub fn join<S: AsRef<str>>(sentences: &[S], selected: &[usize]) -> String {
    selected
        .iter()
        .filter_map(|&index| sentences.get(index))
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ")
}
