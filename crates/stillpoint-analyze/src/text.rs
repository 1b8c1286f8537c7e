//! Tokenizing and windowing helpers shared by the scorers.

use std::ops::Range;

/// Text with no letter or digit carries no signal.
pub fn is_degenerate(text: &str) -> bool {
    !text.chars().any(char::is_alphanumeric)
}

/// Whitespace-delimited word count, the denominator for densities.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-blank sentences, split on runs of `.`, `!` and `?`.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(['.', '!', '?']).filter(|s| !s.trim().is_empty())
}

/// Lowercased words with surrounding punctuation removed. Inner
/// apostrophes survive, so "don't" stays one token.
pub fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_token)
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn normalize_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
        .replace('\u{2019}', "'")
}

/// Up to `n` normalized words immediately before byte offset `at`,
/// nearest first.
pub fn preceding_words(text: &str, at: usize, n: usize) -> Vec<String> {
    let Some(head) = text.get(..at) else {
        return Vec::new();
    };
    head.split_whitespace()
        .rev()
        .take(n)
        .map(normalize_token)
        .collect()
}

/// Whether the whitespace-separated words of `phrase` occur contiguously
/// in `tokens`.
pub fn contains_sequence(tokens: &[String], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split_whitespace().collect();
    if parts.is_empty() || parts.len() > tokens.len() {
        return false;
    }
    tokens
        .windows(parts.len())
        .any(|w| w.iter().zip(&parts).all(|(a, b)| a == b))
}

/// Whether any of `terms` appears within `radius` characters before or
/// after `span`. The span itself is not searched, so a term never boosts
/// its own match.
///
/// Offsets that do not fall on a char boundary never match.
pub fn has_nearby_term(text: &str, span: Range<usize>, radius: usize, terms: &[String]) -> bool {
    let start = span.start.min(text.len());
    let end = span.end.clamp(start, text.len());
    if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return false;
    }
    let before = &text[back_chars(text, start, radius)..start];
    let after = &text[end..forward_chars(text, end, radius)];
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .any(|t| before.contains(t.as_str()) || after.contains(t.as_str()))
}

fn back_chars(text: &str, from: usize, n: usize) -> usize {
    if n == 0 {
        return from;
    }
    text[..from]
        .char_indices()
        .rev()
        .take(n)
        .last()
        .map_or(from, |(i, _)| i)
}

fn forward_chars(text: &str, from: usize, n: usize) -> usize {
    text[from..]
        .char_indices()
        .nth(n)
        .map_or(text.len(), |(i, _)| from + i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn degenerate_text() {
        assert!(is_degenerate(""));
        assert!(is_degenerate("   \n\t"));
        assert!(is_degenerate("... !!! ?"));
        assert!(!is_degenerate("ok"));
        assert!(!is_degenerate("42"));
    }

    #[test]
    fn sentences_skip_blank_runs() {
        let got: Vec<&str> = sentences("Great day!! Then rain... why?").collect();
        assert_eq!(got, vec!["Great day", " Then rain", " why"]);
    }

    #[test]
    fn tokens_strip_punctuation_keep_apostrophes() {
        assert_eq!(
            tokens("I don't know, REALLY (maybe) \u{201c}fine\u{201d}."),
            terms(&["i", "don't", "know", "really", "maybe", "fine"])
        );
        assert_eq!(tokens("can\u{2019}t sleep"), terms(&["can't", "sleep"]));
        assert!(tokens(" -- ").is_empty());
    }

    #[test]
    fn preceding_words_nearest_first() {
        let text = "i feel absolutely so happy";
        let at = text.find("happy").unwrap();
        assert_eq!(preceding_words(text, at, 2), terms(&["so", "absolutely"]));
        assert!(preceding_words(text, 0, 2).is_empty());
    }

    #[test]
    fn contains_sequence_matches_whole_words() {
        let toks = terms(&["my", "heart", "racing", "again"]);
        assert!(contains_sequence(&toks, "heart racing"));
        assert!(!contains_sequence(&toks, "heart again"));
        assert!(!contains_sequence(&toks, "race"));
        assert!(!contains_sequence(&toks, ""));
    }

    #[test]
    fn nearby_term_within_radius() {
        let text = "after the promotion i felt happy";
        let at = text.find("happy").unwrap();
        let span = at..at + 5;
        assert!(has_nearby_term(text, span.clone(), 100, &terms(&["promotion"])));
        assert!(!has_nearby_term(text, span.clone(), 5, &terms(&["promotion"])));
        assert!(!has_nearby_term(text, span, 100, &terms(&["vacation"])));
    }

    #[test]
    fn nearby_term_excludes_the_span_itself() {
        let text = "so successful";
        let at = text.find("successful").unwrap();
        assert!(!has_nearby_term(text, at..text.len(), 100, &terms(&["success"])));
    }

    #[test]
    fn nearby_term_counts_chars_not_bytes() {
        let text = "café ☕☕ joy";
        let at = text.find("joy").unwrap();
        // Five chars back reaches the "é"; the cups are one char each.
        assert!(has_nearby_term(text, at..at + 3, 5, &terms(&["é"])));
        assert!(!has_nearby_term(text, at..at + 3, 4, &terms(&["é"])));
        assert!(!has_nearby_term(text, 4..6, 10, &terms(&["caf"])));
    }
}
