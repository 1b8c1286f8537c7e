use std::path::PathBuf;

use stillpoint_core::MoodType;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

/// A lexicon that cannot be used. These are programmer or configuration
/// errors, reported when an analyzer is built and never during analysis.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("reading lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML lexicon: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON lexicon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("mood \"{0}\" has no lexicon entry")]
    MissingMood(MoodType),

    #[error("mood \"{0}\" is defined more than once")]
    DuplicateMood(MoodType),

    #[error("mood \"{0}\" has no keywords")]
    EmptyKeywords(MoodType),

    #[error("blank term in {0}")]
    BlankTerm(String),

    #[error("mood \"{mood}\" weight must be positive, got {weight}")]
    NonPositiveWeight { mood: MoodType, weight: f64 },

    #[error("mood \"{mood}\" confidence prior must be within [0, 1], got {confidence}")]
    ConfidenceOutOfRange { mood: MoodType, confidence: f64 },

    #[error("sentiment tier \"{tier}\" has weight {weight} with the wrong sign")]
    TierSign { tier: String, weight: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: String, value: f64 },

    #[error("keyword limit must be at least 1")]
    ZeroKeywordLimit,

    #[error("cannot compile term pattern for {context}: {source}")]
    Pattern {
        context: String,
        #[source]
        source: regex::Error,
    },
}
