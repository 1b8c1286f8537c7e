//! Mindful-activity suggestions ranked against a user's recent entries.
//!
//! Both entry points always return exactly three suggestions, highest
//! relevance first, with scores rounded to two decimals.

pub mod catalog;
pub mod relevance;
pub mod theme;

use stillpoint_core::{
    JournalEntry, MindfulSuggestion, MoodType, SentimentPolarity, UserProfile,
};
use time::{Date, Weekday};

use catalog::{Scored, Theme, DEFAULTS, GENERIC};
use relevance::{relevance, round2};
pub use theme::detect_themes;

/// Entries considered for the dominant mood and pattern detection.
pub const HISTORY_WINDOW: usize = 7;
pub const SUGGESTION_COUNT: usize = 3;

/// Hour of day before which morning suggestions apply.
pub const MORNING_CUTOFF_HOUR: u8 = 10;

/// The three fallback suggestions.
pub fn default_suggestions() -> Vec<MindfulSuggestion> {
    DEFAULTS.iter().map(Scored::to_suggestion).collect()
}

/// Most frequent mood in `entries`; ties go to the mood seen first.
pub fn dominant_mood(entries: &[JournalEntry]) -> Option<MoodType> {
    let mut counts: Vec<(MoodType, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(m, _)| *m == entry.mood) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.mood, 1)),
        }
    }
    counts
        .iter()
        .fold(None, |best: Option<(MoodType, usize)>, &(mood, n)| match best {
            Some((_, top)) if top >= n => best,
            _ => Some((mood, n)),
        })
        .map(|(mood, _)| mood)
}

/// Suggestions for a user's history, ordered oldest entry first.
pub fn suggest_for_history(entries: &[JournalEntry], user: &UserProfile) -> Vec<MindfulSuggestion> {
    let (Some(last), Some(mood)) = (entries.last(), dominant_mood(recent(entries))) else {
        return default_suggestions();
    };
    let window = recent(entries);
    let themes = detect_themes(entries);
    let catalog = catalog::mood_catalog(mood);

    let mut ranked: Vec<MindfulSuggestion> = catalog
        .candidates
        .iter()
        .map(|c| c.with_relevance(relevance(c, None, mood, last, &themes)))
        .collect();

    for &theme in &themes {
        if let Some(c) = catalog.contextual_for(theme) {
            let mut s = c.with_relevance(relevance(c, Some(theme), mood, last, &themes));
            s.reason = format!("{} (based on {theme} themes in your entries)", s.reason);
            ranked.push(s);
        }
    }
    ranked.extend(pattern_suggestions(window, &themes));

    ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    ranked.truncate(SUGGESTION_COUNT);
    while ranked.len() < SUGGESTION_COUNT {
        ranked.push(DEFAULTS[ranked.len() % DEFAULTS.len()].to_suggestion());
    }
    for s in &mut ranked {
        s.relevance_score = round2(s.relevance_score);
    }

    tracing::debug!(
        user = %user.id,
        %mood,
        themes = ?themes,
        top = %ranked[0].title,
        "ranked history suggestions"
    );
    ranked
}

/// Suggestions for a calendar day at a given hour (0-23), layered on the
/// same theme detection.
pub fn suggest_for_date(
    date: Date,
    hour: u8,
    entries: &[JournalEntry],
    user: &UserProfile,
) -> Vec<MindfulSuggestion> {
    let themes = detect_themes(entries);
    let last = entries.last();
    let mut picked: Vec<Scored> = Vec::new();

    if date.weekday() == Weekday::Sunday {
        if last.is_some_and(|e| e.sentiment == SentimentPolarity::Negative) {
            picked.push(catalog::SUNDAY_SOUL_RESET);
        } else {
            picked.push(catalog::WEEKLY_WISDOM);
        }
    }
    if hour < MORNING_CUTOFF_HOUR {
        if last.is_some_and(|e| e.mood == MoodType::Anxious) {
            picked.push(catalog::MORNING_ANXIETY_EASE);
        } else {
            picked.push(catalog::MORNING_POWER_HOUR);
        }
    }
    if themes.contains(&Theme::Work) {
        picked.push(catalog::WORK_LIFE_BALANCE);
    }
    while picked.len() < SUGGESTION_COUNT {
        picked.push(GENERIC[picked.len() % GENERIC.len()]);
    }

    let mut ranked: Vec<MindfulSuggestion> = picked.iter().map(Scored::to_suggestion).collect();
    ranked.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    ranked.truncate(SUGGESTION_COUNT);
    for s in &mut ranked {
        s.relevance_score = round2(s.relevance_score);
    }

    tracing::debug!(user = %user.id, %date, hour, themes = ?themes, "ranked date suggestions");
    ranked
}

fn recent(entries: &[JournalEntry]) -> &[JournalEntry] {
    &entries[entries.len().saturating_sub(HISTORY_WINDOW)..]
}

fn pattern_suggestions(recent: &[JournalEntry], themes: &[Theme]) -> Vec<MindfulSuggestion> {
    let mut out = Vec::new();
    let stressful = recent
        .iter()
        .filter(|e| e.mood.is_stressed() || e.sentiment == SentimentPolarity::Negative)
        .count();
    if stressful >= 3 {
        out.push(catalog::WEEKLY_STRESS_RESET.to_suggestion());
    }
    let positive = recent
        .iter()
        .filter(|e| e.sentiment == SentimentPolarity::Positive)
        .count();
    if positive >= 4 {
        out.push(catalog::POSITIVE_MOMENTUM.to_suggestion());
    }
    if themes.contains(&Theme::Relationship) || themes.contains(&Theme::Family) {
        out.push(catalog::RELATIONSHIP_APPRECIATION.to_suggestion());
    }
    out
}
