//! Sentence-level sentiment scoring with modifiers.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use stillpoint_core::SentimentPolarity;
use stillpoint_lexicon::{Lexicon, Tuning};

use crate::text;

/// Aggregate sentiment before normalization to `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentSummary {
    /// Mean sentence score, clamped to the configured range (±4 by default).
    pub score: f64,
    pub confidence: f64,
    pub sentences: usize,
    pub matches: usize,
    pub negations: usize,
    pub emotional_cues: usize,
}

impl Default for SentimentSummary {
    fn default() -> Self {
        Self {
            score: 0.0,
            confidence: 0.1,
            sentences: 0,
            matches: 0,
            negations: 0,
            emotional_cues: 0,
        }
    }
}

pub(crate) struct SentimentScorer {
    weights: HashMap<String, f64>,
    positive: HashSet<String>,
    negative: HashSet<String>,
    intensifiers: HashMap<String, f64>,
    diminishers: HashSet<String>,
    diminisher_multiplier: f64,
    temporal: Vec<(HashSet<String>, f64)>,
    negation: HashSet<String>,
    conditional: HashSet<String>,
    cues: Vec<(String, f64)>,
}

#[derive(Default)]
struct Sentence {
    score: f64,
    confidence: f64,
    matches: usize,
    negations: usize,
    cues: usize,
}

impl SentimentScorer {
    pub fn new(lexicon: &Lexicon) -> Self {
        let mut weights = HashMap::new();
        for tier in lexicon.sentiment.tiers() {
            for word in &tier.words {
                weights.entry(normalize(word)).or_insert(tier.weight);
            }
        }
        let collect = |tiers: &[stillpoint_lexicon::SentimentTier]| {
            tiers
                .iter()
                .flat_map(|t| t.words.iter().map(|w| normalize(w)))
                .collect::<HashSet<_>>()
        };
        let mut intensifiers = HashMap::new();
        for tier in &lexicon.modifiers.intensifiers {
            for word in &tier.words {
                intensifiers.entry(normalize(word)).or_insert(tier.multiplier);
            }
        }
        let set = |words: &[String]| words.iter().map(|w| normalize(w)).collect::<HashSet<_>>();
        let cues = lexicon
            .emotion_cues
            .iter()
            .flat_map(|cue| {
                let sign = cue.valence.sign();
                cue.phrases().map(move |p| (normalize(p), sign))
            })
            .collect();

        Self {
            weights,
            positive: collect(&lexicon.sentiment.positive),
            negative: collect(&lexicon.sentiment.negative),
            intensifiers,
            diminishers: set(&lexicon.modifiers.diminishers.words),
            diminisher_multiplier: lexicon.modifiers.diminishers.multiplier,
            temporal: lexicon
                .modifiers
                .temporal
                .iter()
                .map(|t| (set(&t.words), t.multiplier))
                .collect(),
            negation: set(&lexicon.modifiers.negation),
            conditional: set(&lexicon.modifiers.conditional),
            cues,
        }
    }

    /// Sentiment words of the given polarity; empty for neutral.
    pub fn lexicon_for(&self, polarity: SentimentPolarity) -> Option<&HashSet<String>> {
        match polarity {
            SentimentPolarity::Positive => Some(&self.positive),
            SentimentPolarity::Negative => Some(&self.negative),
            SentimentPolarity::Neutral => None,
        }
    }

    pub fn score(&self, lower: &str, tuning: &Tuning) -> SentimentSummary {
        let mut summary = SentimentSummary::default();
        let mut total_score = 0.0;
        let mut total_confidence = 0.0;
        for sentence in text::sentences(lower) {
            let tokens = text::tokens(sentence);
            if tokens.is_empty() {
                continue;
            }
            let s = self.score_sentence(&tokens, tuning);
            total_score += s.score;
            total_confidence += s.confidence;
            summary.sentences += 1;
            summary.matches += s.matches;
            summary.negations += s.negations;
            summary.emotional_cues += s.cues;
        }
        if summary.sentences == 0 {
            return summary;
        }
        let n = summary.sentences as f64;
        let length_factor = (text::word_count(lower) as f64
            / tuning.length_normalization_words as f64)
            .min(1.0);
        summary.score = (total_score / n).clamp(-tuning.sentiment_range, tuning.sentiment_range);
        summary.confidence = (total_confidence / n * length_factor).clamp(0.1, 1.0);
        summary
    }

    fn score_sentence(&self, tokens: &[String], tuning: &Tuning) -> Sentence {
        let mut out = Sentence::default();
        let mut adjustments = 0usize;
        let temporal: Vec<f64> = self
            .temporal
            .iter()
            .filter(|(words, _)| tokens.iter().any(|t| words.contains(t)))
            .map(|(_, m)| *m)
            .collect();

        let mut phrase_starts = HashSet::new();
        let mut i = 0;
        while i < tokens.len() {
            let Some((weight, width)) = self.lookup(tokens, i) else {
                i += 1;
                continue;
            };
            let mut score = weight;
            if let Some(m) = self.intensifier_before(tokens, i) {
                score *= m;
                adjustments += 1;
            }
            if i > 0 && self.diminishers.contains(&tokens[i - 1]) {
                score *= self.diminisher_multiplier;
                adjustments += 1;
            }
            for m in &temporal {
                score *= m;
                adjustments += 1;
            }
            out.score += score;
            out.matches += 1;
            if width > 1 {
                phrase_starts.insert(i);
            }
            i += width;
        }

        // Each trigger flips or softens the first sentiment term after it.
        for (j, token) in tokens.iter().enumerate() {
            if !self.negation.contains(token) || phrase_starts.contains(&j) {
                continue;
            }
            let target = (j + 1..tokens.len()).find_map(|k| self.lookup(tokens, k));
            match target {
                Some((w, _)) if w > 0.0 => out.score -= tuning.negation_flip_penalty,
                Some(_) => out.score += tuning.negation_soften_bonus,
                None => continue,
            }
            out.negations += 1;
            adjustments += 1;
        }

        if tokens.iter().any(|t| self.conditional.contains(t)) {
            out.score *= tuning.sentiment_conditional_factor;
            adjustments += 1;
        }

        let mut intensity = 0.0;
        for (phrase, sign) in &self.cues {
            if text::contains_sequence(tokens, phrase) {
                out.score += sign * tuning.emotional_cue_weight;
                intensity += tuning.emotional_cue_weight;
                out.cues += 1;
            }
        }

        let len = tokens.len() as f64;
        let match_ratio = out.matches as f64 / len;
        let contextual_ratio = adjustments as f64 / out.matches.max(1) as f64;
        let emotional_ratio = intensity / len;
        out.confidence =
            (match_ratio * 2.0 + contextual_ratio * 0.3 + emotional_ratio * 0.2 + 0.1).clamp(0.0, 1.0);
        out
    }

    /// Two-word entries win over single words.
    fn lookup(&self, tokens: &[String], i: usize) -> Option<(f64, usize)> {
        if let Some(next) = tokens.get(i + 1) {
            let pair = format!("{} {next}", tokens[i]);
            if let Some(w) = self.weights.get(&pair) {
                return Some((*w, 2));
            }
        }
        self.weights.get(&tokens[i]).map(|w| (*w, 1))
    }

    fn intensifier_before(&self, tokens: &[String], i: usize) -> Option<f64> {
        if i >= 2 {
            let pair = format!("{} {}", tokens[i - 2], tokens[i - 1]);
            if let Some(m) = self.intensifiers.get(&pair) {
                return Some(*m);
            }
        }
        i.checked_sub(1)
            .and_then(|prev| self.intensifiers.get(&tokens[prev]))
            .copied()
    }
}

fn normalize(term: &str) -> String {
    term.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
