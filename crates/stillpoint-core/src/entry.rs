use serde::{Deserialize, Serialize};
use time::Date;

use crate::mood::{MoodAnalysis, MoodType, SentimentPolarity};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// A single day's journal entry with its analysis embedded.
///
/// Field names serialize in camelCase so entries exported by the web app
/// deserialize as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub user_id: String,
    #[serde(with = "iso_date")]
    pub date: Date,
    pub content: String,
    pub mood: MoodType,
    pub sentiment: SentimentPolarity,
    pub sentiment_score: f64,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl JournalEntry {
    /// Build a fresh entry with a new `ent_<ulid>` id.
    pub fn new(user_id: &str, date: Date, content: &str, analysis: &MoodAnalysis) -> Self {
        let now = now_rfc3339();
        Self {
            id: format!("ent_{}", ulid::Ulid::new()),
            user_id: user_id.to_string(),
            date,
            content: content.to_string(),
            mood: analysis.mood,
            sentiment: analysis.sentiment,
            sentiment_score: analysis.sentiment_score,
            keywords: analysis.keywords.clone(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Replace content and analysis fields, keeping identity and creation time.
    pub fn apply_analysis(&mut self, content: &str, analysis: &MoodAnalysis) {
        self.content = content.to_string();
        self.mood = analysis.mood;
        self.sentiment = analysis.sentiment;
        self.sentiment_score = analysis.sentiment_score;
        self.keywords = analysis.keywords.clone();
        self.updated_at = now_rfc3339();
    }
}

/// Insert or update the entry for `(user_id, date)`.
///
/// Keeps at most one entry per user per date. Blank content is ignored and
/// yields `None`.
pub fn upsert_entry<'a>(
    entries: &'a mut Vec<JournalEntry>,
    user_id: &str,
    date: Date,
    content: &str,
    analysis: &MoodAnalysis,
) -> Option<&'a JournalEntry> {
    if content.trim().is_empty() {
        return None;
    }
    match entries
        .iter()
        .position(|e| e.user_id == user_id && e.date == date)
    {
        Some(idx) => {
            entries[idx].apply_analysis(content, analysis);
            Some(&entries[idx])
        }
        None => {
            entries.push(JournalEntry::new(user_id, date, content, analysis));
            entries.last()
        }
    }
}

/// The account an entry history belongs to.
///
/// Display preferences are carried opaquely; scoring never reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub preferences: serde_json::Value,
}

impl UserProfile {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }
}

fn now_rfc3339() -> String {
    let now = time::OffsetDateTime::now_utc();
    now.format(&time::format_description::well_known::Rfc3339)
        .expect("RFC3339 formatting should not fail")
}
