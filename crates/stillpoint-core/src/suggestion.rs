use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a mindful activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionType {
    MoodBoost,
    StressRelief,
    Reflection,
    Growth,
}

impl SuggestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionType::MoodBoost => "mood-boost",
            SuggestionType::StressRelief => "stress-relief",
            SuggestionType::Reflection => "reflection",
            SuggestionType::Growth => "growth",
        }
    }
}

impl fmt::Display for SuggestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ranked activity suggestion surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindfulSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionType,
    pub title: String,
    pub description: String,
    /// Human-readable, e.g. "10-15 minutes".
    pub duration: String,
    /// Why this suggestion was surfaced.
    pub reason: String,
    /// In `[0, 1]`; rounded to two decimals once ranking is done.
    pub relevance_score: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_as_type_kebab_case() {
        let s = MindfulSuggestion {
            kind: SuggestionType::StressRelief,
            title: "Three Deep Breaths".into(),
            description: "Breathe.".into(),
            duration: "2-3 minutes".into(),
            reason: "Calm".into(),
            relevance_score: 0.8,
            keywords: vec![],
        };
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["type"], "stress-relief");
        assert_eq!(v["relevanceScore"], 0.8);
        assert!(v.get("keywords").is_none());
    }
}
