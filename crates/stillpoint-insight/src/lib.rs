//! Read-only aggregation over a journal history: recurring moods,
//! sentiment trend and volatility, narrative insights, and chart data.
//!
//! Every function takes entries ordered oldest first and recomputes from
//! scratch. Nothing here fails or panics on an empty history.

pub mod pattern;
pub mod rules;
pub mod signal;
pub mod stats;

use stillpoint_core::{JournalEntry, SentimentInsight};

pub use pattern::{analyze_emotional_patterns, interval_consistency};
pub use rules::{concern_insights, keyword_insights};
pub use signal::{emotional_volatility, sentiment_trend, SentimentTrend};
pub use stats::{mood_stats, mood_timeline, MoodCount, MoodStats, TimelinePoint, TimelineRange};

/// Below this many entries only a getting-started insight is returned.
pub const MIN_INSIGHT_ENTRIES: usize = 5;
pub const MAX_INSIGHTS: usize = 6;

/// Narrative insights over the history, most confident first.
pub fn generate_sentiment_insights(entries: &[JournalEntry]) -> Vec<SentimentInsight> {
    if entries.len() < MIN_INSIGHT_ENTRIES {
        return vec![rules::getting_started()];
    }

    let mut insights: Vec<SentimentInsight> = Vec::new();
    insights.extend(rules::trend_insight(sentiment_trend(entries)));
    insights.extend(
        analyze_emotional_patterns(entries)
            .iter()
            .filter_map(rules::consistent_mood_insight),
    );
    insights.extend(rules::volatility_insight(emotional_volatility(entries)));
    insights.extend(keyword_insights(entries));
    insights.extend(concern_insights(entries));

    insights.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    insights.truncate(MAX_INSIGHTS);
    tracing::debug!(entries = entries.len(), insights = insights.len(), "generated insights");
    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillpoint_core::{InsightKind, MoodAnalysis, MoodType, SentimentPolarity};
    use time::macros::date;
    use time::Duration;

    fn entry(day: i64, mood: MoodType, score: f64, keywords: &[&str]) -> JournalEntry {
        let analysis = MoodAnalysis {
            mood,
            sentiment: SentimentPolarity::from_score(score, 0.15),
            sentiment_score: score,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            confidence: 0.8,
        };
        JournalEntry::new("u1", date!(2024 - 06 - 01) + Duration::days(day), "text", &analysis)
    }

    #[test]
    fn short_history_gets_started_insight() {
        for n in 0..MIN_INSIGHT_ENTRIES as i64 {
            let entries: Vec<_> = (0..n).map(|d| entry(d, MoodType::Content, 0.5, &[])).collect();
            let got = generate_sentiment_insights(&entries);
            assert_eq!(got.len(), 1);
            assert_eq!(got[0].title, "Building Your Emotional Awareness");
            assert_eq!(got[0].kind, InsightKind::Pattern);
            assert_eq!(got[0].confidence, 0.8);
        }
    }

    #[test]
    fn steady_peaceful_week() {
        let entries: Vec<_> = (0..7)
            .map(|d| entry(d, MoodType::Peaceful, 0.5, &["walk"]))
            .collect();
        let got = generate_sentiment_insights(&entries);
        let titles: Vec<_> = got.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Consistent Peaceful Pattern",
                "Emotional Stability",
                "\"walk\" Pattern Detected"
            ]
        );
        assert!(got.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    }

    #[test]
    fn mixed_history_is_sorted_and_capped() {
        let mut entries: Vec<_> = (0..5)
            .map(|d| entry(d, MoodType::Content, 0.6, &[]))
            .collect();
        for d in 5..10 {
            let score = if d % 2 == 0 { -0.9 } else { -0.6 };
            entries.push(entry(d, MoodType::Anxious, score, &["alone", "deadline"]));
        }
        let got = generate_sentiment_insights(&entries);
        assert!(got.len() <= MAX_INSIGHTS);
        assert!(got.windows(2).all(|w| w[0].confidence >= w[1].confidence));
        assert_eq!(got[0].title, "Concerning Emotional Trend");
        assert_eq!(got[0].confidence, 1.0);
        assert!(got.iter().any(|i| i.title == "Social Connection Concerns"));
        assert!(got.iter().any(|i| i.title == "\"deadline\" Pattern Detected"));
        assert!(got.iter().all(|i| i.title != "Persistent Negative Emotions"));
    }

    #[test]
    fn small_shift_near_zero_is_not_a_trend() {
        // -0.04 -> 0.04 is large relative to the 0.1 floor but inside the
        // direction margin.
        let entries: Vec<_> = (0..6)
            .map(|d| entry(d, MoodType::Neutral, if d < 3 { -0.04 } else { 0.04 }, &[]))
            .collect();
        let trend = sentiment_trend(&entries);
        assert_eq!(trend.direction, SentimentPolarity::Neutral);
        assert!(trend.significance > 0.6, "{}", trend.significance);

        let got = generate_sentiment_insights(&entries);
        assert!(got.iter().all(|i| !i.title.ends_with("Emotional Trend")));
        assert!(got.iter().all(|i| i.kind != InsightKind::Concern));
    }
}
