use crate::summarizer::{DEFAULT_MAX_LENGTH, summarize, summarize_text};

const CATS: &str = "The cat sat. The cat sat on the mat. Dogs bark loudly at night.";

const LECTURE: &str = "Welcome back to the channel. Today we talk about memory safety in Rust. \
    Rust guarantees memory safety without a garbage collector. The borrow checker enforces \
    ownership rules at compile time. Ownership means every value has a single owner. \
    When the owner goes out of scope the value is dropped. \
    Thanks for watching and see you next time.";

#[test]
fn test_budget_met_by_top_sentence() {
    assert_eq!(summarize_text(CATS, 5), "The cat sat on the mat.");
}

#[test]
fn test_zero_budget_returns_top_sentence() {
    assert_eq!(summarize_text(CATS, 0), "The cat sat on the mat.");
}

#[test]
fn test_crossing_sentence_is_kept_whole() {
    let summary = summarize(CATS, 8);
    assert_eq!(summary.text, "The cat sat on the mat. The cat sat.");
    assert_eq!(summary.sentence_indices, vec![1, 0]);
    assert_eq!(summary.word_count, 11);
    assert_eq!(summary.total_sentences, 3);
}

#[test]
fn test_output_follows_score_order() {
    assert_eq!(
        summarize_text(CATS, DEFAULT_MAX_LENGTH),
        "The cat sat on the mat. The cat sat. Dogs bark loudly at night."
    );
}

#[test]
fn test_empty_transcript() {
    let summary = summarize("", DEFAULT_MAX_LENGTH);
    assert_eq!(summary.text, "");
    assert!(summary.sentence_indices.is_empty());
    assert_eq!(summary.word_count, 0);

    assert_eq!(summarize_text("  \n ", 10), "");
}

#[test]
fn test_stopword_only_sentence_is_skipped() {
    let transcript = "It is what it is. Rust compiles code.";
    assert_eq!(summarize_text(transcript, DEFAULT_MAX_LENGTH), "Rust compiles code.");
}

#[test]
fn test_all_zero_scores_fall_back_to_document_order() {
    let transcript = "It is. So it was.";
    assert_eq!(summarize_text(transcript, DEFAULT_MAX_LENGTH), "It is. So it was.");
    assert_eq!(summarize_text(transcript, 1), "It is.");
}

#[test]
fn test_unpunctuated_captions_form_one_sentence() {
    let transcript = "so today we look at rust and why rust matters";
    assert_eq!(summarize_text(transcript, 3), transcript);
}

#[test]
fn test_deterministic_output() {
    let first = summarize(LECTURE, 20);
    for _ in 0..10 {
        assert_eq!(summarize(LECTURE, 20), first);
    }
}

#[test]
fn test_budget_is_monotonic() {
    let mut previous = 0;
    for budget in 0..80 {
        let words = summarize(LECTURE, budget).word_count;
        assert!(words >= previous, "budget {budget} produced fewer words");
        previous = words;
    }
}

#[test]
fn test_lecture_prefers_topical_sentences() {
    assert_eq!(
        summarize_text(LECTURE, 9),
        "Rust guarantees memory safety without a garbage collector."
    );
    assert_eq!(
        summarize_text(LECTURE, 10),
        "Rust guarantees memory safety without a garbage collector. \
         The borrow checker enforces ownership rules at compile time."
    );
}

#[test]
fn test_abbreviation_periods_add_no_score() {
    let transcript = "Dr. Smith studies the U.S. economy. The economy grew fast. \
        Smith said the economy grew.";

    let summary = summarize(transcript, DEFAULT_MAX_LENGTH);
    assert_eq!(summary.total_sentences, 3);
    assert_eq!(summary.sentence_indices, vec![2, 0, 1]);
    assert_eq!(summary.word_count, 18);

    assert_eq!(summarize_text(transcript, 6), "Smith said the economy grew.");
}

#[cfg(feature = "fuzz")]
mod fuzz {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_summarize_never_panics(text in ".*", budget in -5i64..500) {
            let _ = summarize(&text, budget);
        }

        #[test]
        fn test_summary_sentences_come_from_transcript(
            text in "([A-Za-z]{1,8}( [A-Za-z]{1,8}){0,6}[.!?] ){0,12}",
            budget in 0i64..200,
        ) {
            let summary = summarize(&text, budget);
            for sentence in summary.text.split_inclusive(['.', '!', '?']) {
                prop_assert!(text.contains(sentence.trim()));
            }
        }

        #[test]
        fn test_larger_budget_never_shrinks_summary(
            text in "([A-Za-z]{1,8}( [A-Za-z]{1,8}){0,6}[.!?] ){0,12}",
            budget in 0i64..100,
            extra in 0i64..100,
        ) {
            let smaller = summarize(&text, budget).word_count;
            let larger = summarize(&text, budget + extra).word_count;
            prop_assert!(larger >= smaller);
        }
    }
}
