//! Relevance-ranked keyword extraction.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use stillpoint_lexicon::{Lexicon, Tuning};

use crate::text;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordScore {
    pub word: String,
    pub score: f64,
}

/// What the rest of the analysis found, used to weight candidate words.
pub(crate) struct KeywordContext<'a> {
    pub mood_keywords: &'a [String],
    pub mood_matches: &'a [String],
    pub sentiment_words: Option<&'a HashSet<String>>,
}

pub(crate) struct KeywordExtractor {
    stop_words: HashSet<String>,
    boosts: Vec<(HashSet<String>, f64)>,
    high_value: HashSet<String>,
}

impl KeywordExtractor {
    pub fn new(lexicon: &Lexicon) -> Self {
        let set = |words: &[String]| words.iter().map(|w| w.to_lowercase()).collect::<HashSet<_>>();
        let v = &lexicon.vocabulary;
        Self {
            stop_words: set(&v.stop_words),
            boosts: vec![
                (set(&v.emotional), 2.5),
                (set(&v.contextual), 2.0),
                (set(&v.psychological), 2.2),
                (set(&v.relationship), 1.8),
                (set(&v.temporal_significance), 1.5),
            ],
            high_value: lexicon
                .high_value_words()
                .map(|w| w.to_lowercase())
                .collect(),
        }
    }

    pub fn extract(&self, lower: &str, ctx: &KeywordContext<'_>, tuning: &Tuning) -> Vec<KeywordScore> {
        let candidates: Vec<String> = text::tokens(lower)
            .into_iter()
            .filter(|t| t.chars().count() > 2 && t.chars().all(char::is_alphabetic))
            .filter(|t| !self.stop_words.contains(t))
            .collect();

        let mut frequency: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for word in &candidates {
            let count = frequency.entry(word.as_str()).or_insert(0);
            if *count == 0 {
                order.push(word.as_str());
            }
            *count += 1;
        }

        let mut scored: Vec<KeywordScore> = order
            .into_iter()
            .map(|word| {
                let f = frequency[word];
                KeywordScore {
                    word: word.to_string(),
                    score: self.score(word, f, ctx, tuning),
                }
            })
            .collect();
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut roots = HashSet::new();
        let mut selected = Vec::new();
        for candidate in scored {
            if selected.len() >= tuning.keyword_limit {
                break;
            }
            let root: String = candidate.word.chars().take(tuning.root_length).collect();
            if roots.insert(root) || candidate.score > tuning.root_override_score {
                selected.push(candidate);
            }
        }
        selected
    }

    fn score(&self, word: &str, frequency: usize, ctx: &KeywordContext<'_>, tuning: &Tuning) -> f64 {
        let mut score = 1.0;
        if ctx.mood_keywords.iter().any(|k| k == word) {
            score *= 4.0;
        }
        if ctx.sentiment_words.is_some_and(|s| s.contains(word)) {
            score *= 3.0;
        }
        if ctx.mood_matches.iter().any(|m| m == word) {
            score *= 3.5;
        }
        for (set, multiplier) in &self.boosts {
            if set.contains(word) {
                score *= multiplier;
            }
        }
        if frequency > 1 {
            score *= (frequency as f64).ln() + 1.0;
        }
        if self.high_value.contains(word) {
            score = score.max(tuning.high_value_seed);
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str, mood_keywords: &[&str], matches: &[&str]) -> Vec<KeywordScore> {
        let lexicon = Lexicon::builtin();
        let extractor = KeywordExtractor::new(&lexicon);
        let mood_keywords: Vec<String> = mood_keywords.iter().map(|s| s.to_string()).collect();
        let mood_matches: Vec<String> = matches.iter().map(|s| s.to_string()).collect();
        let ctx = KeywordContext {
            mood_keywords: &mood_keywords,
            mood_matches: &mood_matches,
            sentiment_words: None,
        };
        extractor.extract(&text.to_lowercase(), &ctx, &lexicon.tuning)
    }

    fn words(scores: &[KeywordScore]) -> Vec<&str> {
        scores.iter().map(|k| k.word.as_str()).collect()
    }

    #[test]
    fn drops_stop_words_short_and_non_alphabetic_tokens() {
        let got = extract("The cat and I went to 42nd street on a bus", &[], &[]);
        assert_eq!(words(&got), vec!["cat", "went", "street", "bus"]);
    }

    #[test]
    fn mood_match_outranks_plain_words() {
        let got = extract("walked home happy after dinner", &["happy"], &["happy"]);
        assert_eq!(got[0].word, "happy");
        assert!((got[0].score - 14.0).abs() < 1e-9);
        // "home" is a contextual word
        assert_eq!(got[1].word, "home");
    }

    #[test]
    fn repeated_words_get_log_boost() {
        let got = extract("rain rain rain", &[], &[]);
        assert_eq!(got.len(), 1);
        assert!((got[0].score - (3f64.ln() + 1.0)).abs() < 1e-9);
    }

    #[test]
    fn high_value_words_are_seeded() {
        let got = extract("slow journey", &[], &[]);
        assert_eq!(words(&got), vec!["journey", "slow"]);
        assert_eq!(got[0].score, 2.0);
    }

    #[test]
    fn shared_roots_are_skipped_unless_strong() {
        let got = extract("walking walked walker", &[], &[]);
        assert_eq!(words(&got), vec!["walking"]);
        let got = extract("happy happiness", &["happy", "happiness"], &[]);
        assert_eq!(words(&got), vec!["happy", "happiness"]);
    }

    #[test]
    fn at_most_keyword_limit() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike";
        let got = extract(text, &[], &[]);
        assert_eq!(got.len(), 10);
        assert_eq!(got[0].word, "alpha");
    }
}
