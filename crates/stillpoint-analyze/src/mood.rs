//! Per-mood lexicon scoring and dominant-mood selection.

use std::collections::HashSet;

use regex::Regex;
use serde::Serialize;
use stillpoint_core::{MoodAnalysis, MoodType};
use stillpoint_lexicon::{term_pattern, Lexicon, MoodLexicon, Result, Tuning};

use crate::text;

/// Scoring detail for one mood.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodScore {
    pub mood: MoodType,
    pub score: f64,
    pub confidence: f64,
    /// Matched keywords and phrases, one per occurrence.
    pub matches: Vec<String>,
}

/// The winning mood and how sure the scorer is about it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Dominant {
    pub mood: MoodType,
    pub confidence: f64,
}

struct MoodMatcher {
    table: MoodLexicon,
    keywords: Option<Regex>,
    /// One matcher per contextual boost so nested terms count separately.
    boosts: Vec<Regex>,
}

pub(crate) struct MoodScorer {
    matchers: Vec<MoodMatcher>,
    negation: HashSet<String>,
    negation_scope: usize,
    conditional: HashSet<String>,
}

impl MoodScorer {
    pub fn new(lexicon: &Lexicon) -> Result<Self> {
        let mut matchers = lexicon
            .moods
            .iter()
            .map(|table| {
                Ok(MoodMatcher {
                    keywords: term_pattern(&table.keywords, &format!("{} keywords", table.mood))?,
                    boosts: boost_patterns(table)?,
                    table: lowercased(table),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        matchers.sort_by_key(|m| m.table.mood);
        Ok(Self {
            matchers,
            negation: lexicon.modifiers.negation.iter().map(|w| w.to_lowercase()).collect(),
            negation_scope: lexicon.modifiers.negation_scope,
            conditional: lexicon.modifiers.conditional.iter().map(|w| w.to_lowercase()).collect(),
        })
    }

    pub fn keywords(&self, mood: MoodType) -> &[String] {
        self.matchers
            .iter()
            .find(|m| m.table.mood == mood)
            .map(|m| m.table.keywords.as_slice())
            .unwrap_or_default()
    }

    pub fn sentiment_multiplier(&self, mood: MoodType) -> f64 {
        self.matchers
            .iter()
            .find(|m| m.table.mood == mood)
            .map_or(0.0, |m| m.table.sentiment_multiplier)
    }

    /// Score every mood against `lower` (already lowercased). Results are in
    /// mood declaration order.
    pub fn score(&self, lower: &str, tuning: &Tuning) -> Vec<MoodScore> {
        let words = text::word_count(lower).max(1) as f64;
        let mut scores: Vec<MoodScore> = self
            .matchers
            .iter()
            .map(|m| m.score(lower, words, tuning))
            .collect();

        for sentence in text::sentences(lower) {
            let tokens = text::tokens(sentence);
            self.dampen_negated(&tokens, &mut scores, tuning);
            if tokens.iter().any(|t| self.conditional.contains(t)) {
                for s in &mut scores {
                    s.score *= tuning.conditional_dampening;
                    s.confidence *= tuning.conditional_confidence_factor;
                }
            }
        }
        scores
    }

    /// For each negation trigger, a mood with a keyword among the next
    /// `negation_scope` words has its whole score dampened once.
    fn dampen_negated(&self, tokens: &[String], scores: &mut [MoodScore], tuning: &Tuning) {
        for (i, token) in tokens.iter().enumerate() {
            if !self.negation.contains(token) {
                continue;
            }
            let end = (i + 1 + self.negation_scope).min(tokens.len());
            let window = &tokens[(i + 1).min(end)..end];
            if window.is_empty() {
                continue;
            }
            for (matcher, score) in self.matchers.iter().zip(scores.iter_mut()) {
                if matcher
                    .table
                    .keywords
                    .iter()
                    .any(|k| text::contains_sequence(window, k))
                {
                    tracing::trace!(mood = %matcher.table.mood, trigger = %token, "negated mood keyword");
                    score.score *= tuning.negation_dampening;
                    score.confidence *= tuning.negation_confidence_factor;
                }
            }
        }
    }
}

impl MoodMatcher {
    fn score(&self, lower: &str, words: f64, tuning: &Tuning) -> MoodScore {
        let table = &self.table;
        let mut total = 0.0;
        let mut match_count = 0usize;
        let mut matches = Vec::new();

        if let Some(re) = &self.keywords {
            for m in re.find_iter(lower) {
                let mut score = table.weight;
                let preceding = text::preceding_words(lower, m.start(), 2);
                if preceding.iter().any(|w| table.intensifiers.contains(w)) {
                    score *= tuning.keyword_intensifier_boost;
                }
                if text::has_nearby_term(
                    lower,
                    m.range(),
                    tuning.keyword_context_radius,
                    &table.contextual_boosts,
                ) {
                    score *= tuning.keyword_context_boost;
                }
                total += score;
                match_count += 1;
                matches.push(m.as_str().to_string());
            }
        }

        for phrase in &table.phrases {
            for (at, _) in lower.match_indices(phrase.as_str()) {
                let mut score = table.weight * tuning.phrase_weight;
                if text::has_nearby_term(
                    lower,
                    at..at + phrase.len(),
                    tuning.phrase_context_radius,
                    &table.contextual_boosts,
                ) {
                    score *= tuning.phrase_context_boost;
                }
                total += score;
                match_count += 1;
                matches.push(phrase.clone());
            }
        }

        let present = self.boosts.iter().filter(|re| re.is_match(lower)).count();
        total += table.weight * tuning.ambient_boost * present as f64;
        match_count += present;

        let density = match_count as f64 / words;
        let confidence =
            (density * 3.0 + match_count as f64 * 0.1 + table.confidence).clamp(0.0, 1.0);
        MoodScore {
            mood: table.mood,
            score: total,
            confidence,
            matches,
        }
    }
}

/// Rank the scored moods and pick the dominant one. Scores under the floor
/// are noise; with nothing left the text reads as neutral.
pub(crate) fn select_dominant(scores: &[MoodScore], tuning: &Tuning) -> Dominant {
    let mut ranked: Vec<&MoodScore> = scores.iter().filter(|s| s.score > 0.0).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let Some(top) = ranked.first().filter(|t| t.score >= tuning.mood_score_floor) else {
        return Dominant {
            mood: MoodType::Neutral,
            confidence: MoodAnalysis::NEUTRAL_CONFIDENCE,
        };
    };
    let second = ranked.get(1).map_or(0.0, |s| s.score);
    let relative_strength = top.score / (top.score + second);
    let gap = ((top.score - second) / top.score).min(1.0);
    let confidence = (0.4 * relative_strength + 0.4 * top.confidence + 0.2 * gap).clamp(0.0, 0.98);
    Dominant {
        mood: top.mood,
        confidence,
    }
}

fn boost_patterns(table: &MoodLexicon) -> Result<Vec<Regex>> {
    let mut terms: Vec<String> = table
        .contextual_boosts
        .iter()
        .map(|t| t.trim().to_lowercase())
        .collect();
    terms.sort();
    terms.dedup();
    let context = format!("{} contextual boost", table.mood);
    let mut patterns = Vec::with_capacity(terms.len());
    for term in terms {
        if let Some(re) = term_pattern(std::slice::from_ref(&term), &context)? {
            patterns.push(re);
        }
    }
    Ok(patterns)
}

fn lowercased(table: &MoodLexicon) -> MoodLexicon {
    let lower = |terms: &[String]| terms.iter().map(|t| t.trim().to_lowercase()).collect();
    MoodLexicon {
        keywords: lower(&table.keywords),
        phrases: lower(&table.phrases),
        contextual_boosts: lower(&table.contextual_boosts),
        intensifiers: lower(&table.intensifiers),
        ..table.clone()
    }
}
