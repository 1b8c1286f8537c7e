use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight discrete mood labels assigned to a journal entry.
///
/// Declaration order follows the mood picker (joyful first, frustrated
/// last); [`MoodType::valence_score`] gives the chart ordering instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodType {
    Joyful,
    Excited,
    Content,
    Peaceful,
    Neutral,
    Melancholy,
    Anxious,
    Frustrated,
}

impl MoodType {
    pub const ALL: [MoodType; 8] = [
        MoodType::Joyful,
        MoodType::Excited,
        MoodType::Content,
        MoodType::Peaceful,
        MoodType::Neutral,
        MoodType::Melancholy,
        MoodType::Anxious,
        MoodType::Frustrated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodType::Joyful => "joyful",
            MoodType::Excited => "excited",
            MoodType::Content => "content",
            MoodType::Peaceful => "peaceful",
            MoodType::Neutral => "neutral",
            MoodType::Melancholy => "melancholy",
            MoodType::Anxious => "anxious",
            MoodType::Frustrated => "frustrated",
        }
    }

    /// Chart position, 1 (frustrated) through 8 (excited). Never used by
    /// the analyzer itself.
    pub fn valence_score(self) -> u8 {
        match self {
            MoodType::Frustrated => 1,
            MoodType::Anxious => 2,
            MoodType::Melancholy => 3,
            MoodType::Neutral => 4,
            MoodType::Peaceful => 5,
            MoodType::Content => 6,
            MoodType::Joyful => 7,
            MoodType::Excited => 8,
        }
    }

    /// Moods counted as "positive" when interpreting trends.
    pub fn is_positive(self) -> bool {
        matches!(
            self,
            MoodType::Joyful | MoodType::Excited | MoodType::Content | MoodType::Peaceful
        )
    }

    /// Moods counted as stress signals by the suggestion and insight rules.
    pub fn is_stressed(self) -> bool {
        matches!(self, MoodType::Anxious | MoodType::Frustrated)
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodType::Joyful => "Joyful",
            MoodType::Excited => "Excited",
            MoodType::Content => "Content",
            MoodType::Peaceful => "Peaceful",
            MoodType::Neutral => "Neutral",
            MoodType::Melancholy => "Melancholy",
            MoodType::Anxious => "Anxious",
            MoodType::Frustrated => "Frustrated",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodType::Joyful => "\u{1f60a}",
            MoodType::Excited => "\u{1f929}",
            MoodType::Content => "\u{1f60c}",
            MoodType::Peaceful => "\u{1f54a}\u{fe0f}",
            MoodType::Neutral => "\u{1f610}",
            MoodType::Melancholy => "\u{1f614}",
            MoodType::Anxious => "\u{1f630}",
            MoodType::Frustrated => "\u{1f624}",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MoodType::Joyful => "Feeling happy and uplifted",
            MoodType::Excited => "Full of energy and enthusiasm",
            MoodType::Content => "Satisfied and at peace",
            MoodType::Peaceful => "Calm and serene",
            MoodType::Neutral => "Balanced and steady",
            MoodType::Melancholy => "Thoughtfully sad or pensive",
            MoodType::Anxious => "Worried or uneasy",
            MoodType::Frustrated => "Feeling blocked or annoyed",
        }
    }

    /// Hex colour shown beside the mood in the stats legend.
    pub fn color(self) -> &'static str {
        match self {
            MoodType::Joyful => "#fbbf24",
            MoodType::Excited => "#f472b6",
            MoodType::Content => "#86efac",
            MoodType::Peaceful => "#a78bfa",
            MoodType::Neutral => "#94a3b8",
            MoodType::Melancholy => "#60a5fa",
            MoodType::Anxious => "#fb923c",
            MoodType::Frustrated => "#ef4444",
        }
    }
}

impl fmt::Display for MoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood \"{0}\"; expected one of joyful, excited, content, peaceful, neutral, melancholy, anxious, frustrated")]
pub struct ParseMoodError(pub String);

impl FromStr for MoodType {
    type Err = ParseMoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        MoodType::ALL
            .into_iter()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| ParseMoodError(s.to_string()))
    }
}

/// Coarse polarity of an entry. Always derived from a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentPolarity {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl SentimentPolarity {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentPolarity::Positive => "positive",
            SentimentPolarity::Neutral => "neutral",
            SentimentPolarity::Negative => "negative",
        }
    }

    /// Label a raw score: strictly above `threshold` is positive, strictly
    /// below `-threshold` is negative.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score > threshold {
            SentimentPolarity::Positive
        } else if score < -threshold {
            SentimentPolarity::Negative
        } else {
            SentimentPolarity::Neutral
        }
    }
}

impl fmt::Display for SentimentPolarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyzer output for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub mood: MoodType,
    pub sentiment: SentimentPolarity,
    /// In `[-1, 1]`.
    pub sentiment_score: f64,
    /// At most ten, unique, most relevant first.
    pub keywords: Vec<String>,
    /// In `[0, 0.98]`.
    pub confidence: f64,
}

impl MoodAnalysis {
    /// Confidence reported for text that carries no signal.
    pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

    /// The result for empty or degenerate text.
    pub fn neutral() -> Self {
        Self {
            mood: MoodType::Neutral,
            sentiment: SentimentPolarity::Neutral,
            sentiment_score: 0.0,
            keywords: Vec::new(),
            confidence: Self::NEUTRAL_CONFIDENCE,
        }
    }
}

impl Default for MoodAnalysis {
    fn default() -> Self {
        Self::neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valence_orders_frustrated_to_excited() {
        let mut moods = MoodType::ALL.to_vec();
        moods.sort_by_key(|m| m.valence_score());
        assert_eq!(moods.first(), Some(&MoodType::Frustrated));
        assert_eq!(moods.last(), Some(&MoodType::Excited));
        let scores: Vec<u8> = moods.iter().map(|m| m.valence_score()).collect();
        assert_eq!(scores, (1..=8).collect::<Vec<u8>>());
    }

    #[test]
    fn mood_parse_roundtrip_and_case() {
        for mood in MoodType::ALL {
            assert_eq!(mood.as_str().parse::<MoodType>().unwrap(), mood);
        }
        assert_eq!(" Anxious ".parse::<MoodType>().unwrap(), MoodType::Anxious);
        assert!("grumpy".parse::<MoodType>().is_err());
    }

    #[test]
    fn mood_serializes_lowercase() {
        let json = serde_json::to_string(&MoodType::Melancholy).unwrap();
        assert_eq!(json, "\"melancholy\"");
    }

    #[test]
    fn positive_and_stressed_partition() {
        let positive: Vec<_> = MoodType::ALL.into_iter().filter(|m| m.is_positive()).collect();
        assert_eq!(positive.len(), 4);
        assert!(MoodType::Anxious.is_stressed());
        assert!(MoodType::Frustrated.is_stressed());
        assert!(!MoodType::Melancholy.is_stressed());
        assert!(!MoodType::Neutral.is_positive());
    }

    #[test]
    fn polarity_thresholds_are_strict() {
        assert_eq!(SentimentPolarity::from_score(0.6, 0.6), SentimentPolarity::Neutral);
        assert_eq!(SentimentPolarity::from_score(0.61, 0.6), SentimentPolarity::Positive);
        assert_eq!(SentimentPolarity::from_score(-0.61, 0.6), SentimentPolarity::Negative);
    }

    #[test]
    fn neutral_analysis_shape() {
        let a = MoodAnalysis::neutral();
        assert_eq!(a.mood, MoodType::Neutral);
        assert_eq!(a.sentiment, SentimentPolarity::Neutral);
        assert_eq!(a.sentiment_score, 0.0);
        assert!(a.keywords.is_empty());
        assert_eq!(a.confidence, 0.5);
    }

    #[test]
    fn analysis_serializes_camel_case() {
        let v = serde_json::to_value(MoodAnalysis::neutral()).unwrap();
        assert!(v.get("sentimentScore").is_some());
        assert_eq!(v["sentiment"], "neutral");
    }
}
