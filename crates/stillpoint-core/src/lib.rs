pub mod entry;
pub mod insight;
pub mod mood;
pub mod suggestion;

pub use entry::{iso_date, upsert_entry, JournalEntry, UserProfile};
pub use insight::{EmotionalPattern, InsightKind, SentimentInsight, Trend};
pub use mood::{MoodAnalysis, MoodType, ParseMoodError, SentimentPolarity};
pub use suggestion::{MindfulSuggestion, SuggestionType};
