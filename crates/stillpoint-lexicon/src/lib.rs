//! Lexicon and pattern tables for the Stillpoint analyzer.
//!
//! Tables are plain configuration values: the built-in English set, or an
//! alternate set read from YAML or JSON. Validation runs once, when a
//! lexicon is loaded or an analyzer is constructed.

mod builtin;
pub mod error;
pub mod schema;
mod validate;

use std::path::Path;

use regex::Regex;
use stillpoint_core::MoodType;

pub use error::{LexiconError, Result};
pub use schema::{
    EmotionCue, Lexicon, Modifiers, MoodLexicon, SentimentLexicon, SentimentTier, Tuning, Valence,
    Vocabulary, WeightedTerms,
};

impl Lexicon {
    /// The built-in English tables.
    pub fn builtin() -> Self {
        builtin::lexicon()
    }

    /// Parse and validate a YAML lexicon.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_yaml::from_str(yaml)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Parse and validate a JSON lexicon.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(json)?;
        lexicon.validate()?;
        Ok(lexicon)
    }

    /// Load a lexicon file. `.json` files are read as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));
        let lexicon = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!(path = %path.display(), moods = lexicon.moods.len(), "loaded lexicon");
        Ok(lexicon)
    }

    pub fn validate(&self) -> Result<()> {
        validate::validate(self)
    }

    pub fn mood(&self, mood: MoodType) -> Option<&MoodLexicon> {
        self.moods.iter().find(|m| m.mood == mood)
    }

    /// All sentiment words plus the vocabulary's high-value list.
    pub fn high_value_words(&self) -> impl Iterator<Item = &String> {
        self.sentiment
            .tiers()
            .flat_map(|t| t.words.iter())
            .chain(self.vocabulary.high_value.iter())
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Compile a term list into one case-insensitive, word-bounded matcher.
///
/// Longer terms are tried first so "fed up" wins over "fed". Returns
/// `None` for an empty list.
pub fn term_pattern(terms: &[String], context: &str) -> Result<Option<Regex>> {
    let mut sorted: Vec<String> = terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();
    if sorted.is_empty() {
        return Ok(None);
    }
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    sorted.dedup();
    let alternation = sorted
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b"))
        .map(Some)
        .map_err(|source| LexiconError::Pattern {
            context: context.to_string(),
            source,
        })
}
