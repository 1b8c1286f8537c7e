use std::collections::HashSet;

use stillpoint_core::MoodType;

use crate::error::{LexiconError, Result};
use crate::schema::{Lexicon, WeightedTerms};

/// Check the structural invariants the analyzer relies on.
pub(crate) fn validate(lexicon: &Lexicon) -> Result<()> {
    let mut seen = HashSet::new();
    for table in &lexicon.moods {
        if !seen.insert(table.mood) {
            return Err(LexiconError::DuplicateMood(table.mood));
        }
        if table.keywords.is_empty() {
            return Err(LexiconError::EmptyKeywords(table.mood));
        }
        if !(table.weight > 0.0) {
            return Err(LexiconError::NonPositiveWeight {
                mood: table.mood,
                weight: table.weight,
            });
        }
        if !(0.0..=1.0).contains(&table.confidence) {
            return Err(LexiconError::ConfidenceOutOfRange {
                mood: table.mood,
                confidence: table.confidence,
            });
        }
        let ctx = |list: &str| format!("{} {list}", table.mood);
        no_blank(&table.keywords, || ctx("keywords"))?;
        no_blank(&table.phrases, || ctx("phrases"))?;
        no_blank(&table.contextual_boosts, || ctx("contextual boosts"))?;
        no_blank(&table.intensifiers, || ctx("intensifiers"))?;
    }
    if let Some(missing) = MoodType::ALL.into_iter().find(|m| !seen.contains(m)) {
        return Err(LexiconError::MissingMood(missing));
    }

    for tier in &lexicon.sentiment.positive {
        if !(tier.weight > 0.0) {
            return Err(LexiconError::TierSign {
                tier: format!("positive.{}", tier.name),
                weight: tier.weight,
            });
        }
        no_blank(&tier.words, || format!("positive.{}", tier.name))?;
    }
    for tier in &lexicon.sentiment.negative {
        if !(tier.weight < 0.0) {
            return Err(LexiconError::TierSign {
                tier: format!("negative.{}", tier.name),
                weight: tier.weight,
            });
        }
        no_blank(&tier.words, || format!("negative.{}", tier.name))?;
    }

    let m = &lexicon.modifiers;
    no_blank(&m.negation, || "negation".to_string())?;
    no_blank(&m.conditional, || "conditional".to_string())?;
    for terms in m
        .intensifiers
        .iter()
        .chain(m.temporal.iter())
        .chain(std::iter::once(&m.diminishers))
    {
        weighted_terms(terms)?;
    }
    for cue in &lexicon.emotion_cues {
        if cue.phrases().any(|p| p.trim().is_empty()) {
            return Err(LexiconError::BlankTerm(format!("{} cues", cue.emotion)));
        }
    }
    no_blank(&lexicon.vocabulary.stop_words, || "stop words".to_string())?;

    let t = &lexicon.tuning;
    positive("keyword_context_radius", t.keyword_context_radius as f64)?;
    positive("phrase_context_radius", t.phrase_context_radius as f64)?;
    positive("length_normalization_words", t.length_normalization_words as f64)?;
    positive("root_length", t.root_length as f64)?;
    positive("sentiment_range", t.sentiment_range)?;
    for (name, value) in [
        ("keyword_intensifier_boost", t.keyword_intensifier_boost),
        ("keyword_context_boost", t.keyword_context_boost),
        ("phrase_weight", t.phrase_weight),
        ("phrase_context_boost", t.phrase_context_boost),
        ("negation_dampening", t.negation_dampening),
        ("negation_confidence_factor", t.negation_confidence_factor),
        ("conditional_dampening", t.conditional_dampening),
        ("conditional_confidence_factor", t.conditional_confidence_factor),
        ("sentiment_conditional_factor", t.sentiment_conditional_factor),
    ] {
        positive(name, value)?;
    }
    if t.keyword_limit == 0 {
        return Err(LexiconError::ZeroKeywordLimit);
    }
    Ok(())
}

fn weighted_terms(terms: &WeightedTerms) -> Result<()> {
    positive(&format!("{} multiplier", terms.name), terms.multiplier)?;
    no_blank(&terms.words, || terms.name.clone())
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(LexiconError::NonPositive {
            name: name.to_string(),
            value,
        })
    }
}

fn no_blank(terms: &[String], context: impl Fn() -> String) -> Result<()> {
    if terms.iter().any(|t| t.trim().is_empty()) {
        return Err(LexiconError::BlankTerm(context()));
    }
    Ok(())
}
