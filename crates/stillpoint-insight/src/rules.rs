//! Individual insight rules. Each returns the insights it fires, if any.

use stillpoint_core::{
    EmotionalPattern, InsightKind, JournalEntry, SentimentInsight, SentimentPolarity,
};

use crate::pattern::tally;
use crate::signal::{mean, recent, SentimentTrend};

const TREND_SIGNIFICANCE: f64 = 0.6;
const CONSISTENT_FREQUENCY: f64 = 0.4;
const CONSISTENT_REGULARITY: f64 = 0.7;
const HIGH_VOLATILITY: f64 = 0.7;
const LOW_VOLATILITY: f64 = 0.3;

const KEYWORD_MIN_COUNT: usize = 3;
const KEYWORD_TOP: usize = 3;
const KEYWORD_MIN_SENTIMENT: f64 = 0.3;

const NEGATIVE_SHARE: f64 = 0.7;
const STRESSED_SHARE: f64 = 0.6;
const ISOLATION_MIN_COUNT: usize = 3;
const ISOLATION_KEYWORDS: &[&str] = &["alone", "lonely", "isolated", "disconnected", "empty"];

fn insight(
    kind: InsightKind,
    title: impl Into<String>,
    description: impl Into<String>,
    confidence: f64,
    suggestion: Option<String>,
) -> SentimentInsight {
    SentimentInsight {
        kind,
        title: title.into(),
        description: description.into(),
        confidence,
        actionable: suggestion.is_some(),
        suggestion,
    }
}

fn percent(share: f64) -> i64 {
    (share * 100.0).round() as i64
}

pub(crate) fn getting_started() -> SentimentInsight {
    insight(
        InsightKind::Pattern,
        "Building Your Emotional Awareness",
        "You're just starting your mindful journey. Keep writing to discover your emotional patterns.",
        0.8,
        Some("Try to journal daily for at least a week to establish baseline patterns.".into()),
    )
}

pub(crate) fn trend_insight(trend: SentimentTrend) -> Option<SentimentInsight> {
    if trend.significance <= TREND_SIGNIFICANCE {
        return None;
    }
    let (kind, title, suggestion) = match trend.direction {
        SentimentPolarity::Positive => (
            InsightKind::Strength,
            "Positive Emotional Trend",
            "Consider what factors are contributing to this positive trend and how to maintain them.",
        ),
        SentimentPolarity::Negative => (
            InsightKind::Concern,
            "Concerning Emotional Trend",
            "This pattern suggests you might benefit from additional emotional support or stress management techniques.",
        ),
        SentimentPolarity::Neutral => return None,
    };
    Some(insight(
        kind,
        title,
        format!(
            "Your recent entries show a {} emotional trend with {}% consistency.",
            trend.direction,
            percent(trend.significance)
        ),
        trend.significance,
        Some(suggestion.into()),
    ))
}

pub(crate) fn consistent_mood_insight(pattern: &EmotionalPattern) -> Option<SentimentInsight> {
    if pattern.frequency <= CONSISTENT_FREQUENCY || pattern.consistency <= CONSISTENT_REGULARITY {
        return None;
    }
    let mood = pattern.dominant_mood;
    let (kind, suggestion) = if mood.is_positive() {
        (
            InsightKind::Strength,
            format!("Your consistent {mood} state is a strength. Consider what maintains this positive pattern."),
        )
    } else {
        (
            InsightKind::Concern,
            "This consistent pattern might indicate an area needing attention. Consider exploring what triggers these feelings.".to_string(),
        )
    };
    Some(insight(
        kind,
        format!("Consistent {} Pattern", mood.label()),
        format!(
            "You've been experiencing {mood} feelings in {}% of recent entries with high consistency.",
            percent(pattern.frequency)
        ),
        pattern.consistency,
        Some(suggestion),
    ))
}

pub(crate) fn volatility_insight(volatility: f64) -> Option<SentimentInsight> {
    if volatility > HIGH_VOLATILITY {
        Some(insight(
            InsightKind::Concern,
            "High Emotional Variability",
            "Your recent entries show significant emotional ups and downs, which might indicate stress or major life changes.",
            volatility,
            Some("Consider incorporating grounding techniques or speaking with a counselor about managing emotional fluctuations.".into()),
        ))
    } else if volatility < LOW_VOLATILITY {
        Some(insight(
            InsightKind::Pattern,
            "Emotional Stability",
            "Your emotions have been relatively stable recently, showing good emotional regulation.",
            1.0 - volatility,
            None,
        ))
    } else {
        None
    }
}

/// Recurring keywords whose entries lean clearly positive or negative.
pub fn keyword_insights(entries: &[JournalEntry]) -> Vec<SentimentInsight> {
    let window = recent(entries);
    let mut counts = tally(window.iter().flat_map(|e| e.keywords.iter()));
    counts.retain(|(_, n)| *n >= KEYWORD_MIN_COUNT);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(KEYWORD_TOP);

    counts
        .into_iter()
        .filter_map(|(keyword, count)| {
            let scores: Vec<f64> = window
                .iter()
                .filter(|e| e.keywords.contains(keyword))
                .map(|e| e.sentiment_score)
                .collect();
            let average = mean(&scores);
            if average.abs() <= KEYWORD_MIN_SENTIMENT {
                return None;
            }
            let (leaning, suggestion) = if average > 0.0 {
                (
                    "positive",
                    format!("\"{keyword}\" seems to be a positive influence in your life. Consider how to cultivate more of this."),
                )
            } else {
                (
                    "negative",
                    format!("\"{keyword}\" appears to be challenging for you. Consider strategies to address or reframe this area."),
                )
            };
            Some(insight(
                InsightKind::Pattern,
                format!("\"{keyword}\" Pattern Detected"),
                format!("The theme \"{keyword}\" appears frequently in your entries and is associated with {leaning} emotions."),
                (count as f64 / window.len() as f64 * 2.0).min(0.9),
                Some(suggestion),
            ))
        })
        .collect()
}

/// Fixed-confidence concerns over the recent window.
pub fn concern_insights(entries: &[JournalEntry]) -> Vec<SentimentInsight> {
    let window = recent(entries);
    if window.is_empty() {
        return Vec::new();
    }
    let n = window.len() as f64;
    let mut out = Vec::new();

    let negative = window
        .iter()
        .filter(|e| e.sentiment == SentimentPolarity::Negative)
        .count();
    if negative as f64 >= n * NEGATIVE_SHARE {
        out.push(insight(
            InsightKind::Concern,
            "Persistent Negative Emotions",
            format!(
                "{}% of your recent entries reflect negative emotions.",
                percent(negative as f64 / n)
            ),
            0.9,
            Some("Consider reaching out to a mental health professional or trusted friend for support.".into()),
        ));
    }

    let stressed = window.iter().filter(|e| e.mood.is_stressed()).count();
    if stressed as f64 >= n * STRESSED_SHARE {
        out.push(insight(
            InsightKind::Concern,
            "High Stress/Anxiety Pattern",
            "Your recent entries frequently mention stress, anxiety, or frustration.",
            0.8,
            Some("Consider stress management techniques like deep breathing, meditation, or regular exercise.".into()),
        ));
    }

    let isolation = window
        .iter()
        .flat_map(|e| e.keywords.iter())
        .filter(|k| ISOLATION_KEYWORDS.contains(&k.as_str()))
        .count();
    if isolation >= ISOLATION_MIN_COUNT {
        out.push(insight(
            InsightKind::Concern,
            "Social Connection Concerns",
            "Your entries frequently mention feelings of loneliness or isolation.",
            0.7,
            Some("Consider reaching out to friends, family, or joining social activities to build connections.".into()),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillpoint_core::{MoodAnalysis, MoodType, Trend};
    use time::macros::date;

    fn entry(mood: MoodType, sentiment: SentimentPolarity, score: f64, keywords: &[&str]) -> JournalEntry {
        let analysis = MoodAnalysis {
            mood,
            sentiment,
            sentiment_score: score,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            confidence: 0.7,
        };
        JournalEntry::new("u1", date!(2024 - 04 - 01), "text", &analysis)
    }

    fn titles(insights: &[SentimentInsight]) -> Vec<&str> {
        insights.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn trend_needs_significance_and_direction() {
        let strong = SentimentTrend {
            direction: SentimentPolarity::Negative,
            significance: 0.75,
        };
        let got = trend_insight(strong).unwrap();
        assert_eq!(got.kind, InsightKind::Concern);
        assert_eq!(got.title, "Concerning Emotional Trend");
        assert_eq!(
            got.description,
            "Your recent entries show a negative emotional trend with 75% consistency."
        );
        assert!(trend_insight(SentimentTrend { significance: 0.6, ..strong }).is_none());
        assert!(trend_insight(SentimentTrend {
            direction: SentimentPolarity::Neutral,
            significance: 0.9
        })
        .is_none());
    }

    #[test]
    fn consistent_mood_wording() {
        let pattern = EmotionalPattern {
            dominant_mood: MoodType::Peaceful,
            frequency: 0.5,
            trend: Trend::Stable,
            consistency: 0.8,
            triggers: Vec::new(),
        };
        let got = consistent_mood_insight(&pattern).unwrap();
        assert_eq!(got.kind, InsightKind::Strength);
        assert_eq!(got.title, "Consistent Peaceful Pattern");
        assert_eq!(
            got.description,
            "You've been experiencing peaceful feelings in 50% of recent entries with high consistency."
        );
        assert_eq!(got.confidence, 0.8);

        let anxious = EmotionalPattern {
            dominant_mood: MoodType::Anxious,
            ..pattern.clone()
        };
        assert_eq!(consistent_mood_insight(&anxious).unwrap().kind, InsightKind::Concern);
        let rare = EmotionalPattern {
            frequency: 0.4,
            ..pattern
        };
        assert!(consistent_mood_insight(&rare).is_none());
    }

    #[test]
    fn volatility_bands() {
        assert_eq!(volatility_insight(0.8).unwrap().kind, InsightKind::Concern);
        let calm = volatility_insight(0.1).unwrap();
        assert_eq!(calm.title, "Emotional Stability");
        assert!(!calm.actionable);
        assert!(calm.suggestion.is_none());
        assert!((calm.confidence - 0.9).abs() < 1e-9);
        assert!(volatility_insight(0.5).is_none());
    }

    #[test]
    fn keyword_patterns_need_repetition_and_lean() {
        let n = SentimentPolarity::Neutral;
        let entries = vec![
            entry(MoodType::Content, n, 0.6, &["garden", "sleep"]),
            entry(MoodType::Content, n, 0.4, &["garden", "sleep"]),
            entry(MoodType::Content, n, 0.5, &["garden"]),
            entry(MoodType::Anxious, n, -0.5, &["sleep"]),
            entry(MoodType::Neutral, n, 0.0, &["commute", "commute", "commute"]),
        ];
        let got = keyword_insights(&entries);
        // sleep averages 0.17 and commute 0.0, so only garden fires
        assert_eq!(titles(&got), vec!["\"garden\" Pattern Detected"]);
        assert!(got[0].description.ends_with("associated with positive emotions."));
        assert!((got[0].confidence - 0.9).abs() < 1e-9);
    }

    #[test]
    fn keyword_confidence_scales_with_share() {
        let n = SentimentPolarity::Negative;
        let mut entries: Vec<_> = (0..3).map(|_| entry(MoodType::Anxious, n, -0.8, &["deadline"])).collect();
        entries.extend((0..7).map(|_| entry(MoodType::Neutral, n, 0.0, &[])));
        let got = keyword_insights(&entries);
        assert_eq!(got.len(), 1);
        assert!((got[0].confidence - 0.6).abs() < 1e-9);
        assert!(got[0].suggestion.as_deref().unwrap().contains("challenging"));
    }

    #[test]
    fn concerns_fire_at_thresholds() {
        let neg = SentimentPolarity::Negative;
        let neu = SentimentPolarity::Neutral;
        let mut entries: Vec<_> = (0..7)
            .map(|_| entry(MoodType::Anxious, neg, -0.7, &["lonely"]))
            .collect();
        entries.extend((0..3).map(|_| entry(MoodType::Content, neu, 0.0, &[])));
        let got = concern_insights(&entries);
        assert_eq!(
            titles(&got),
            vec![
                "Persistent Negative Emotions",
                "High Stress/Anxiety Pattern",
                "Social Connection Concerns"
            ]
        );
        assert_eq!(got[0].description, "70% of your recent entries reflect negative emotions.");
        assert_eq!(got[2].confidence, 0.7);

        entries[0].sentiment = neu;
        entries[0].mood = MoodType::Content;
        entries[1].mood = MoodType::Content;
        let got = concern_insights(&entries);
        assert_eq!(titles(&got), vec!["Social Connection Concerns"]);
        assert!(concern_insights(&[]).is_empty());
    }
}
