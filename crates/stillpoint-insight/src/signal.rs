use serde::Serialize;
use stillpoint_core::{JournalEntry, SentimentPolarity};

/// Entries the sentiment trend and volatility look at.
pub const SIGNAL_WINDOW: usize = 10;

const MIN_SIGNAL_ENTRIES: usize = 3;
const DIRECTION_MARGIN: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentTrend {
    pub direction: SentimentPolarity,
    /// Relative size of the shift, in `[0, 1]`.
    pub significance: f64,
}

impl SentimentTrend {
    const FLAT: SentimentTrend = SentimentTrend {
        direction: SentimentPolarity::Neutral,
        significance: 0.0,
    };
}

pub(crate) fn recent(entries: &[JournalEntry]) -> &[JournalEntry] {
    &entries[entries.len().saturating_sub(SIGNAL_WINDOW)..]
}

/// Compare the first and second half of the last [`SIGNAL_WINDOW`]
/// entries' sentiment scores.
pub fn sentiment_trend(entries: &[JournalEntry]) -> SentimentTrend {
    let window = recent(entries);
    if window.len() < MIN_SIGNAL_ENTRIES {
        return SentimentTrend::FLAT;
    }
    let scores: Vec<f64> = window.iter().map(|e| e.sentiment_score).collect();
    let (first, second) = scores.split_at(scores.len() / 2);
    let (first, second) = (mean(first), mean(second));

    let difference = second - first;
    let significance = difference.abs() / first.abs().max(second.abs()).max(0.1);
    let direction = if difference > DIRECTION_MARGIN {
        SentimentPolarity::Positive
    } else if difference < -DIRECTION_MARGIN {
        SentimentPolarity::Negative
    } else {
        SentimentPolarity::Neutral
    };
    SentimentTrend {
        direction,
        significance: significance.min(1.0),
    }
}

/// Population standard deviation of the last [`SIGNAL_WINDOW`] sentiment
/// scores, capped at 1.
pub fn emotional_volatility(entries: &[JournalEntry]) -> f64 {
    let window = recent(entries);
    if window.len() < MIN_SIGNAL_ENTRIES {
        return 0.0;
    }
    let scores: Vec<f64> = window.iter().map(|e| e.sentiment_score).collect();
    let m = mean(&scores);
    let variance = scores.iter().map(|s| (s - m).powi(2)).sum::<f64>() / scores.len() as f64;
    variance.sqrt().min(1.0)
}

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len().max(1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillpoint_core::MoodAnalysis;
    use time::macros::date;

    fn scored(scores: &[f64]) -> Vec<JournalEntry> {
        scores
            .iter()
            .map(|&s| {
                let analysis = MoodAnalysis {
                    sentiment_score: s,
                    ..MoodAnalysis::neutral()
                };
                JournalEntry::new("u1", date!(2024 - 02 - 01), "text", &analysis)
            })
            .collect()
    }

    #[test]
    fn rising_scores_trend_positive() {
        let trend = sentiment_trend(&scored(&[-0.5, -0.5, 0.5, 0.5]));
        assert_eq!(trend.direction, SentimentPolarity::Positive);
        assert_eq!(trend.significance, 1.0);
    }

    #[test]
    fn odd_lengths_put_the_middle_in_the_second_half() {
        // first half [0.2], second half [0.2, 0.8] -> mean 0.5
        let trend = sentiment_trend(&scored(&[0.2, 0.2, 0.8]));
        assert_eq!(trend.direction, SentimentPolarity::Positive);
        assert!((trend.significance - 0.6).abs() < 1e-9);
    }

    #[test]
    fn small_shift_is_neutral() {
        let trend = sentiment_trend(&scored(&[0.5, 0.5, 0.55, 0.55]));
        assert_eq!(trend.direction, SentimentPolarity::Neutral);
        assert!(trend.significance < 0.1);
    }

    #[test]
    fn near_zero_means_use_floor() {
        let trend = sentiment_trend(&scored(&[0.0, 0.0, 0.0, 0.05]));
        assert!((trend.significance - 0.25).abs() < 1e-9);
    }

    #[test]
    fn only_last_ten_entries_count() {
        let mut scores = vec![-1.0; 5];
        scores.extend([0.5; 10]);
        assert_eq!(sentiment_trend(&scored(&scores)), SentimentTrend::FLAT);
        assert_eq!(emotional_volatility(&scored(&scores)), 0.0);
    }

    #[test]
    fn too_few_entries_are_flat() {
        assert_eq!(sentiment_trend(&scored(&[-1.0, 1.0])), SentimentTrend::FLAT);
        assert_eq!(emotional_volatility(&scored(&[-1.0, 1.0])), 0.0);
        assert_eq!(sentiment_trend(&[]), SentimentTrend::FLAT);
    }

    #[test]
    fn volatility_is_population_std_dev() {
        // mean 0, deviations 0.5 each
        assert!((emotional_volatility(&scored(&[0.5, -0.5, 0.5, -0.5])) - 0.5).abs() < 1e-9);
        assert_eq!(emotional_volatility(&scored(&[1.0, -1.0, 1.0, -1.0])), 1.0);
    }
}
