//! Rule-based mood and sentiment analysis of journal text.
//!
//! An [`Analyzer`] is built once from a validated [`Lexicon`] and is then
//! immutable: `analyze` is pure, never fails, and can be shared across
//! threads.

pub mod keywords;
pub mod mood;
pub mod sentiment;
pub mod text;

use std::sync::LazyLock;

use serde::Serialize;
use stillpoint_core::{MoodAnalysis, SentimentPolarity};
use stillpoint_lexicon::{Lexicon, LexiconError, Tuning};

use keywords::{KeywordContext, KeywordExtractor};
pub use keywords::KeywordScore;
use mood::MoodScorer;
pub use mood::MoodScore;
use sentiment::SentimentScorer;
pub use sentiment::SentimentSummary;
pub use text::has_nearby_term;

static BUILTIN: LazyLock<Analyzer> = LazyLock::new(Analyzer::builtin);

/// Analyze `text` with the built-in English lexicon.
pub fn analyze(text: &str) -> MoodAnalysis {
    BUILTIN.analyze(text)
}

/// Everything that went into a [`MoodAnalysis`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub analysis: MoodAnalysis,
    /// Highest score first.
    pub mood_scores: Vec<MoodScore>,
    pub mood_confidence: f64,
    pub sentiment: SentimentSummary,
    pub keyword_scores: Vec<KeywordScore>,
}

pub struct Analyzer {
    tuning: Tuning,
    moods: MoodScorer,
    sentiment: SentimentScorer,
    keywords: KeywordExtractor,
}

impl Analyzer {
    /// Validate `lexicon` and compile its matchers.
    pub fn new(lexicon: Lexicon) -> Result<Self, LexiconError> {
        lexicon.validate()?;
        let analyzer = Self {
            moods: MoodScorer::new(&lexicon)?,
            sentiment: SentimentScorer::new(&lexicon),
            keywords: KeywordExtractor::new(&lexicon),
            tuning: lexicon.tuning,
        };
        tracing::debug!("analyzer ready");
        Ok(analyzer)
    }

    pub fn builtin() -> Self {
        Self::new(Lexicon::builtin()).expect("built-in lexicon should validate")
    }

    pub fn analyze(&self, text: &str) -> MoodAnalysis {
        self.explain(text).analysis
    }

    pub fn explain(&self, text: &str) -> AnalysisReport {
        if text::is_degenerate(text) {
            return AnalysisReport {
                analysis: MoodAnalysis::neutral(),
                mood_scores: Vec::new(),
                mood_confidence: MoodAnalysis::NEUTRAL_CONFIDENCE,
                sentiment: SentimentSummary::default(),
                keyword_scores: Vec::new(),
            };
        }
        let t = &self.tuning;
        let lower = text.to_lowercase();

        let mut mood_scores = self.moods.score(&lower, t);
        let dominant = mood::select_dominant(&mood_scores, t);

        let sentiment = self.sentiment.score(&lower, t);
        let polarity = SentimentPolarity::from_score(sentiment.score, t.polarity_threshold);
        let nudge = self.moods.sentiment_multiplier(dominant.mood) * t.mood_nudge;
        let sentiment_score =
            ((sentiment.score / t.sentiment_range).clamp(-1.0, 1.0) + nudge).clamp(-1.0, 1.0);

        let mood_matches = mood_scores
            .iter()
            .find(|s| s.mood == dominant.mood)
            .map(|s| s.matches.as_slice())
            .unwrap_or_default();
        let ctx = KeywordContext {
            mood_keywords: self.moods.keywords(dominant.mood),
            mood_matches,
            sentiment_words: self.sentiment.lexicon_for(polarity),
        };
        let keyword_scores = self.keywords.extract(&lower, &ctx, t);

        let keyword_coverage = (keyword_scores.len() as f64 / 8.0).min(1.0);
        let confidence = (0.6 * dominant.confidence
            + 0.3 * sentiment.confidence
            + 0.1 * keyword_coverage)
            .min(0.98);

        let analysis = MoodAnalysis {
            mood: dominant.mood,
            sentiment: polarity,
            sentiment_score,
            keywords: keyword_scores.iter().map(|k| k.word.clone()).collect(),
            confidence,
        };
        tracing::debug!(
            mood = %analysis.mood,
            sentiment = %analysis.sentiment,
            score = analysis.sentiment_score,
            confidence = analysis.confidence,
            "analyzed entry"
        );

        mood_scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        AnalysisReport {
            analysis,
            mood_scores,
            mood_confidence: dominant.confidence,
            sentiment,
            keyword_scores,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::builtin()
    }
}
