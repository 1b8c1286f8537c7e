use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use stillpoint_analyze::Analyzer;
use stillpoint_core::{JournalEntry, UserProfile};
use stillpoint_lexicon::Lexicon;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// User id assumed when neither `--user` nor the entries name one.
const LOCAL_USER: &str = "local";

/// Read a JSON array of entries, keep those belonging to `user` (all when
/// `None`), and order them oldest first.
pub fn load_entries(path: &Path, user: Option<&str>) -> anyhow::Result<Vec<JournalEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading entries from {}", path.display()))?;
    let mut entries: Vec<JournalEntry> = serde_json::from_str(&content)
        .with_context(|| format!("parsing entries in {}", path.display()))?;
    if let Some(user) = user {
        entries.retain(|e| e.user_id == user);
    }
    entries.sort_by_key(|e| e.date);
    tracing::debug!(path = %path.display(), count = entries.len(), "loaded entries");
    Ok(entries)
}

pub fn profile(user: Option<&str>, entries: &[JournalEntry]) -> UserProfile {
    let id = user
        .or_else(|| entries.first().map(|e| e.user_id.as_str()))
        .unwrap_or(LOCAL_USER);
    UserProfile::new(id)
}

pub fn load_lexicon(path: Option<&Path>) -> anyhow::Result<Lexicon> {
    match path {
        Some(path) => Ok(Lexicon::load(path)?),
        None => Ok(Lexicon::builtin()),
    }
}

pub fn analyzer(lexicon: Option<&Path>) -> anyhow::Result<Analyzer> {
    Ok(Analyzer::new(load_lexicon(lexicon)?)?)
}

/// Text from the argument, a file, or stdin, in that order.
pub fn read_text(text: Option<String>, file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("reading stdin"),
    }
}

pub fn parse_date(s: &str) -> anyhow::Result<Date> {
    Date::parse(s, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

pub fn date_or_today(s: Option<&str>) -> anyhow::Result<Date> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(OffsetDateTime::now_utc().date()),
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use time::macros::date;

    const ENTRIES: &str = r#"[
        {"id": "b", "userId": "ana", "date": "2024-05-03", "content": "long day at work",
         "mood": "frustrated", "sentiment": "negative", "sentimentScore": -0.5,
         "keywords": ["work"], "createdAt": "", "updatedAt": ""},
        {"id": "a", "userId": "ana", "date": "2024-05-01", "content": "quiet walk",
         "mood": "peaceful", "sentiment": "positive", "sentimentScore": 0.4},
        {"id": "c", "userId": "ben", "date": "2024-05-02", "content": "meh",
         "mood": "neutral", "sentiment": "neutral", "sentimentScore": 0.0}
    ]"#;

    fn entries_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ENTRIES.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_sorts_and_filters() {
        let file = entries_file();
        let all = load_entries(file.path(), None).unwrap();
        let ids: Vec<_> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
        assert!(all[0].keywords.is_empty());

        let ana = load_entries(file.path(), Some("ana")).unwrap();
        assert_eq!(ana.len(), 2);
        assert_eq!(ana[0].date, date!(2024 - 05 - 01));
        assert_eq!(profile(Some("ana"), &ana).id, "ana");
        assert_eq!(profile(None, &ana).id, "ana");
        assert_eq!(profile(None, &[]).id, LOCAL_USER);
    }

    #[test]
    fn bad_entry_files_report_the_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        let err = load_entries(file.path(), None).unwrap_err();
        assert!(err.to_string().starts_with("parsing entries in"));

        let dir = tempfile::tempdir().unwrap();
        let err = load_entries(&dir.path().join("missing.json"), None).unwrap_err();
        assert!(err.to_string().starts_with("reading entries from"));
    }

    #[test]
    fn text_sources() {
        assert_eq!(read_text(Some("hi".into()), None).unwrap(), "hi");
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"from a file").unwrap();
        assert_eq!(read_text(None, Some(file.path())).unwrap(), "from a file");
    }

    #[test]
    fn dates() {
        assert_eq!(parse_date("2024-02-29").unwrap(), date!(2024 - 02 - 29));
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("yesterday").is_err());
        assert_eq!(date_or_today(Some("2024-01-05")).unwrap(), date!(2024 - 01 - 05));
    }

    #[test]
    fn lexicon_file_selects_analyzer() {
        assert!(analyzer(None).is_ok());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "moods: []\n").unwrap();
        assert!(analyzer(Some(&path)).is_err());
    }
}
