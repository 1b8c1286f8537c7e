use stillpoint_core::{JournalEntry, MoodType, SentimentPolarity, SuggestionType};

use crate::catalog::{Candidate, Theme};

/// Score a catalog candidate against the most recent entry.
///
/// `mood` is the mood the candidate was drawn for and `theme` is set for
/// theme-specific variants. The result is clamped to `[0, 1]`.
pub fn relevance(
    candidate: &Candidate,
    theme: Option<Theme>,
    mood: MoodType,
    last: &JournalEntry,
    themes: &[Theme],
) -> f64 {
    let mut score = 0.5;

    if !candidate.keywords.is_empty() {
        let content = last.content.to_lowercase();
        let hits = candidate
            .keywords
            .iter()
            .filter(|k| last.keywords.iter().any(|e| e == *k) || content.contains(**k))
            .count();
        score += hits as f64 / candidate.keywords.len() as f64 * 0.3;
    }

    if theme.is_some_and(|t| themes.contains(&t)) {
        score += 0.4;
    }

    score += match (candidate.kind, last.sentiment) {
        (SuggestionType::MoodBoost, SentimentPolarity::Negative) => 0.3,
        (SuggestionType::StressRelief, SentimentPolarity::Negative) => 0.4,
        (SuggestionType::Growth, SentimentPolarity::Positive) => 0.3,
        _ => 0.0,
    };

    if mood == last.mood {
        score += 0.2;
    }
    score.clamp(0.0, 1.0)
}

pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillpoint_core::MoodAnalysis;
    use time::macros::date;

    use crate::catalog::mood_catalog;

    fn last(content: &str, mood: MoodType, sentiment: SentimentPolarity) -> JournalEntry {
        let analysis = MoodAnalysis {
            mood,
            sentiment,
            ..MoodAnalysis::neutral()
        };
        JournalEntry::new("u1", date!(2024 - 05 - 10), content, &analysis)
    }

    #[test]
    fn base_score_without_signals() {
        let candidate = &mood_catalog(MoodType::Neutral).candidates[0];
        let entry = last("nothing much", MoodType::Content, SentimentPolarity::Neutral);
        assert_eq!(relevance(candidate, None, MoodType::Neutral, &entry, &[]), 0.5);
    }

    #[test]
    fn keyword_overlap_counts_content_and_keywords() {
        // Keywords: anxious, worried, stressed, overwhelmed, panic
        let candidate = &mood_catalog(MoodType::Anxious).candidates[0];
        let mut entry = last("So Worried and stressed", MoodType::Neutral, SentimentPolarity::Neutral);
        entry.keywords = vec!["panic".into()];
        let score = relevance(candidate, None, MoodType::Anxious, &entry, &[]);
        assert!((score - (0.5 + 0.6 * 0.3)).abs() < 1e-9);
    }

    #[test]
    fn sentiment_alignment_and_mood_match() {
        let candidate = &mood_catalog(MoodType::Anxious).candidates[1];
        let entry = last("quiet", MoodType::Anxious, SentimentPolarity::Negative);
        // stress-relief on a negative entry +0.4, same mood +0.2
        assert_eq!(relevance(candidate, None, MoodType::Anxious, &entry, &[]), 1.0);
    }

    #[test]
    fn detected_theme_bonus() {
        let catalog = mood_catalog(MoodType::Joyful);
        let candidate = catalog.contextual_for(Theme::Work).unwrap();
        let entry = last("quiet", MoodType::Neutral, SentimentPolarity::Neutral);
        let with = relevance(candidate, Some(Theme::Work), MoodType::Joyful, &entry, &[Theme::Work]);
        let without = relevance(candidate, Some(Theme::Work), MoodType::Joyful, &entry, &[]);
        assert!((with - 0.9).abs() < 1e-9);
        assert_eq!(without, 0.5);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(0.666_666), 0.67);
        assert_eq!(round2(0.5), 0.5);
    }
}
