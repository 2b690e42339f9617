//! Sentence and word segmentation for transcript text.
//!
//! Both levels start from Unicode text segmentation (UAX #29) and then apply
//! the usual Punkt/Treebank corrections on top: sentence candidates are
//! re-joined after abbreviations and initials, and word pieces are merged or
//! split so that hyphenated words, clitics and abbreviation periods come out
//! the way an English Treebank tokenizer produces them.

use unicode_segmentation::UnicodeSegmentation;

use crate::summarizer::stopwords::is_stopword;

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "st", "jr", "sr", "prof", "rev", "gen", "sen", "rep", "gov", "lt",
    "col", "sgt", "capt", "vs", "etc", "inc", "ltd", "co", "corp", "fig", "approx", "dept",
    "est", "vol", "mt", "ft", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
    "oct", "nov", "dec",
];

const CLITICS: &[&str] = &["s", "re", "ve", "ll", "d", "m"];

/// Splits a transcript into trimmed sentences in document order.
///
/// Empty or whitespace-only input yields no sentences. Text without any
/// terminal punctuation is returned as a single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let segments: Vec<(usize, &str)> = text
        .split_sentence_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .collect();

    let mut sentences = Vec::new();
    let mut start = None;

    for (i, &(offset, segment)) in segments.iter().enumerate() {
        let sentence_start = *start.get_or_insert(offset);

        let next = segments.get(i + 1).map(|(_, next)| *next);
        if next.is_some_and(|next| continues_into(segment, next)) {
            continue;
        }

        let trimmed = text[sentence_start..offset + segment.len()].trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }
        start = None;
    }

    sentences
}

/// Whether a sentence candidate really ends inside an abbreviation or
/// initial and has to be joined with the candidate that follows.
fn continues_into(segment: &str, next: &str) -> bool {
    let Some(body) = segment.trim_end().strip_suffix('.') else {
        return false;
    };
    // Ellipses are only split before a capital, which is a real boundary.
    if body.ends_with('.') {
        return false;
    }

    let word = body
        .split_whitespace()
        .next_back()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    let lowered = word.to_lowercase();

    if ABBREVIATIONS.contains(&lowered.as_str()) || is_dotted_abbreviation(&lowered) {
        return true;
    }

    // "J. R. Tolkien" continues; "plan B. It works" does not.
    is_initial(word) && starts_with_name(next)
}

/// "e.g", "u.s", "p.m": short alphabetic parts joined by periods.
fn is_dotted_abbreviation(word: &str) -> bool {
    word.contains('.')
        && word
            .split('.')
            .all(|part| part.chars().count() <= 2 && is_alphabetic(part))
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    chars.next().is_some_and(char::is_uppercase) && chars.next().is_none()
}

fn starts_with_name(text: &str) -> bool {
    let Some(word) = text.split_whitespace().next() else {
        return false;
    };
    let word = word.trim_matches(|c: char| !c.is_alphanumeric());
    word.chars().next().is_some_and(char::is_uppercase) && !is_stopword(&word.to_lowercase())
}

/// Lowercases a sentence and splits it into Treebank-style word tokens.
///
/// Punctuation marks are tokens of their own, so the returned length is the
/// word count used by the summary budget. Only the period that closes the
/// sentence is split off; abbreviation periods stay on their word.
pub fn tokenize_words(sentence: &str) -> Vec<String> {
    let lowered = sentence.to_lowercase();
    let chunks: Vec<&str> = lowered.split_whitespace().collect();

    let mut tokens = Vec::new();
    for (i, chunk) in chunks.iter().enumerate() {
        tokenize_chunk(chunk, i + 1 == chunks.len(), &mut tokens);
    }
    tokens
}

fn tokenize_chunk(chunk: &str, is_last: bool, tokens: &mut Vec<String>) {
    let pieces: Vec<&str> = chunk.split_word_bounds().collect();
    let first_token = tokens.len();
    let mut i = 0;

    while i < pieces.len() {
        let piece = pieces[i];

        if piece == "." && pieces[i..].starts_with(&[".", ".", "."]) {
            tokens.push("...".to_string());
            i += 3;
            continue;
        }

        // "well-known" stays one token.
        if piece == "-"
            && tokens.len() > first_token
            && tokens.last().is_some_and(|last| ends_alphanumeric(last))
            && pieces
                .get(i + 1)
                .is_some_and(|next| next.starts_with(char::is_alphanumeric))
        {
            if let Some(last) = tokens.last_mut() {
                last.push('-');
                last.push_str(pieces[i + 1]);
            }
            i += 2;
            continue;
        }

        if piece.starts_with(char::is_alphanumeric) {
            push_word(piece, tokens);
        } else {
            tokens.push(piece.to_string());
        }
        i += 1;
    }

    // "dr." or "p.m." in the middle of a sentence keeps its period.
    let produced = tokens.len() - first_token;
    if !is_last
        && produced >= 2
        && tokens.last().is_some_and(|last| last == ".")
        && tokens[tokens.len() - 2..]
            .first()
            .is_some_and(|word| ends_alphanumeric(word))
    {
        tokens.pop();
        if let Some(word) = tokens.last_mut() {
            word.push('.');
        }
    }
}

/// Pushes a word, splitting off English clitics ("don't" -> "do", "n't").
fn push_word(word: &str, tokens: &mut Vec<String>) {
    let word = word.replace('\u{2019}', "'");

    if let Some(stem) = word.strip_suffix("n't")
        && !stem.is_empty()
    {
        tokens.push(stem.to_string());
        tokens.push("n't".to_string());
        return;
    }

    if let Some((stem, clitic)) = word.rsplit_once('\'')
        && !stem.is_empty()
        && CLITICS.contains(&clitic)
    {
        tokens.push(stem.to_string());
        tokens.push(format!("'{clitic}"));
        return;
    }

    tokens.push(word);
}

fn ends_alphanumeric(token: &str) -> bool {
    token.chars().next_back().is_some_and(char::is_alphanumeric)
}

/// True when every character of the token is alphabetic.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic_sentences() {
        let sentences =
            split_sentences("The cat sat. The cat sat on the mat. Dogs bark loudly at night.");
        assert_eq!(
            sentences,
            vec![
                "The cat sat.",
                "The cat sat on the mat.",
                "Dogs bark loudly at night."
            ]
        );
    }

    #[test]
    fn test_split_keeps_abbreviations_and_decimals() {
        let sentences = split_sentences("Dr. Smith arrived at 3.5 p.m. today. He left!");
        assert_eq!(
            sentences,
            vec!["Dr. Smith arrived at 3.5 p.m. today.", "He left!"]
        );
    }

    #[test]
    fn test_split_initials() {
        let sentences = split_sentences("It was written by J. R. Tolkien. Everyone knows it.");
        assert_eq!(
            sentences,
            vec!["It was written by J. R. Tolkien.", "Everyone knows it."]
        );
    }

    #[test]
    fn test_split_after_single_capital_letter() {
        assert_eq!(
            split_sentences("I like plan B. It works well. Cats purr."),
            vec!["I like plan B.", "It works well.", "Cats purr."]
        );
        assert_eq!(
            split_sentences("So do I. Then we left."),
            vec!["So do I.", "Then we left."]
        );
    }

    #[test]
    fn test_split_ellipsis() {
        assert_eq!(
            split_sentences("Wait... What happened?"),
            vec!["Wait...", "What happened?"]
        );
        assert_eq!(
            split_sentences("Wait... then nothing."),
            vec!["Wait... then nothing."]
        );
    }

    #[test]
    fn test_split_closing_quotes_and_mixed_terminators() {
        assert_eq!(
            split_sentences("He said \"stop.\" Then he left. Really?! Yes."),
            vec!["He said \"stop.\"", "Then he left.", "Really?!", "Yes."]
        );
    }

    #[test]
    fn test_split_without_punctuation() {
        assert_eq!(
            split_sentences("so today we are going to talk about rust"),
            vec!["so today we are going to talk about rust"]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(
            tokenize_words("The cat sat on the mat."),
            vec!["the", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_tokenize_clitics_numbers_and_hyphens() {
        assert_eq!(
            tokenize_words("The cat's toy isn't well-known, costing $3.50!"),
            vec![
                "the",
                "cat",
                "'s",
                "toy",
                "is",
                "n't",
                "well-known",
                ",",
                "costing",
                "$",
                "3.50",
                "!"
            ]
        );
    }

    #[test]
    fn test_tokenize_keeps_abbreviation_periods() {
        assert_eq!(
            tokenize_words("Dr. Smith arrived at 3.5 p.m. today."),
            vec!["dr.", "smith", "arrived", "at", "3.5", "p.m.", "today", "."]
        );
        assert_eq!(
            tokenize_words("The U.S. economy grew, e.g. in tech."),
            vec!["the", "u.s.", "economy", "grew", ",", "e.g.", "in", "tech", "."]
        );
    }

    #[test]
    fn test_abbreviations_are_not_content_words() {
        let tokens = tokenize_words("The U.S. economy grew, e.g. in tech.");
        assert!(!tokens.iter().any(|token| matches!(token.as_str(), "u" | "s" | "e" | "g")));
        assert!(!is_alphabetic("u.s."));
    }

    #[test]
    fn test_tokenize_contractions() {
        assert_eq!(tokenize_words("Don't"), vec!["do", "n't"]);
        assert_eq!(tokenize_words("We'll see"), vec!["we", "'ll", "see"]);
        assert_eq!(tokenize_words("they\u{2019}re"), vec!["they", "'re"]);
        assert_eq!(tokenize_words("'quoted'"), vec!["'", "quoted", "'"]);
    }

    #[test]
    fn test_tokenize_ellipsis_is_one_token() {
        assert_eq!(tokenize_words("wait..."), vec!["wait", "..."]);
        assert_eq!(tokenize_words("wait... then"), vec!["wait", "...", "then"]);
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("cat"));
        assert!(is_alphabetic("café"));
        assert!(!is_alphabetic("n't"));
        assert!(!is_alphabetic("3.50"));
        assert!(!is_alphabetic("well-known"));
        assert!(!is_alphabetic(""));
    }
}
