use serde::{Deserialize, Serialize};
use stillpoint_core::MoodType;

use crate::builtin;

/// Everything the analyzer knows about language, as one immutable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    pub moods: Vec<MoodLexicon>,
    pub sentiment: SentimentLexicon,
    #[serde(default = "builtin::modifiers")]
    pub modifiers: Modifiers,
    #[serde(default = "builtin::emotion_cues")]
    pub emotion_cues: Vec<EmotionCue>,
    #[serde(default = "builtin::vocabulary")]
    pub vocabulary: Vocabulary,
    #[serde(default)]
    pub tuning: Tuning,
}

/// Uniform per-mood table. Every mood has the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodLexicon {
    pub mood: MoodType,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub phrases: Vec<String>,
    /// Theme words that amplify nearby matches and add a small ambient score.
    #[serde(default)]
    pub contextual_boosts: Vec<String>,
    /// Adjacent-word amplifiers specific to this mood.
    #[serde(default)]
    pub intensifiers: Vec<String>,
    /// Prior strength of the mood; must be positive.
    pub weight: f64,
    /// Signed nudge applied to the final sentiment score.
    #[serde(default)]
    pub sentiment_multiplier: f64,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    0.5
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentLexicon {
    pub positive: Vec<SentimentTier>,
    pub negative: Vec<SentimentTier>,
}

impl SentimentLexicon {
    pub fn tiers(&self) -> impl Iterator<Item = &SentimentTier> {
        self.positive.iter().chain(self.negative.iter())
    }
}

/// A strength band of sentiment words. Positive tiers carry positive
/// weights, negative tiers negative ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentTier {
    pub name: String,
    pub weight: f64,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerms {
    pub name: String,
    pub multiplier: f64,
    pub words: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifiers {
    pub negation: Vec<String>,
    /// Words after a negation trigger that mood dampening looks at.
    #[serde(default = "default_negation_scope")]
    pub negation_scope: usize,
    pub intensifiers: Vec<WeightedTerms>,
    pub diminishers: WeightedTerms,
    pub temporal: Vec<WeightedTerms>,
    pub conditional: Vec<String>,
}

fn default_negation_scope() -> usize {
    3
}

impl Default for Modifiers {
    fn default() -> Self {
        builtin::modifiers()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Valence {
    Positive,
    Negative,
}

impl Valence {
    pub fn sign(self) -> f64 {
        match self {
            Valence::Positive => 1.0,
            Valence::Negative => -1.0,
        }
    }
}

/// Cue phrases for one emotion family (body, thought and behaviour signs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionCue {
    pub emotion: String,
    pub valence: Valence,
    #[serde(default)]
    pub physiological: Vec<String>,
    #[serde(default)]
    pub cognitive: Vec<String>,
    #[serde(default)]
    pub behavioral: Vec<String>,
}

impl EmotionCue {
    pub fn phrases(&self) -> impl Iterator<Item = &String> {
        self.physiological
            .iter()
            .chain(self.cognitive.iter())
            .chain(self.behavioral.iter())
    }
}

/// Word sets used by keyword extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub emotional: Vec<String>,
    #[serde(default)]
    pub contextual: Vec<String>,
    #[serde(default)]
    pub psychological: Vec<String>,
    #[serde(default)]
    pub relationship: Vec<String>,
    #[serde(default)]
    pub temporal_significance: Vec<String>,
    /// Seeded with a floor score even on a single occurrence. Sentiment
    /// words are always added on top of this list.
    #[serde(default)]
    pub high_value: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        builtin::vocabulary()
    }
}

/// Empirically chosen scoring constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Characters either side of a keyword searched for contextual boosts.
    pub keyword_context_radius: usize,
    /// Characters either side of a phrase searched for contextual boosts.
    pub phrase_context_radius: usize,
    pub keyword_intensifier_boost: f64,
    pub keyword_context_boost: f64,
    /// Phrase matches count this many times the mood weight.
    pub phrase_weight: f64,
    pub phrase_context_boost: f64,
    /// Share of the mood weight added per contextual boost present anywhere.
    pub ambient_boost: f64,
    /// Mood total multiplier when a keyword sits inside a negation scope.
    pub negation_dampening: f64,
    pub negation_confidence_factor: f64,
    /// Mood multiplier for each sentence holding a conditional word.
    pub conditional_dampening: f64,
    pub conditional_confidence_factor: f64,
    /// Sentence sentiment multiplier for conditional sentences.
    pub sentiment_conditional_factor: f64,
    pub negation_flip_penalty: f64,
    pub negation_soften_bonus: f64,
    pub emotional_cue_weight: f64,
    /// Mood scores below this are treated as no signal.
    pub mood_score_floor: f64,
    /// Applied to the unnormalized sentiment aggregate.
    pub polarity_threshold: f64,
    /// Half-width of the aggregate sentiment range; also the normalizer.
    pub sentiment_range: f64,
    pub mood_nudge: f64,
    /// Word count at which sentiment confidence stops being penalized.
    pub length_normalization_words: usize,
    pub keyword_limit: usize,
    pub root_length: usize,
    pub root_override_score: f64,
    pub high_value_seed: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            keyword_context_radius: 100,
            phrase_context_radius: 80,
            keyword_intensifier_boost: 1.6,
            keyword_context_boost: 1.3,
            phrase_weight: 2.2,
            phrase_context_boost: 1.4,
            ambient_boost: 0.8,
            negation_dampening: 0.15,
            negation_confidence_factor: 0.8,
            conditional_dampening: 0.85,
            conditional_confidence_factor: 0.9,
            sentiment_conditional_factor: 0.7,
            negation_flip_penalty: 2.0,
            negation_soften_bonus: 1.0,
            emotional_cue_weight: 0.2,
            mood_score_floor: 0.2,
            polarity_threshold: 0.6,
            sentiment_range: 4.0,
            mood_nudge: 0.2,
            length_normalization_words: 50,
            keyword_limit: 10,
            root_length: 4,
            root_override_score: 3.0,
            high_value_seed: 2.0,
        }
    }
}
