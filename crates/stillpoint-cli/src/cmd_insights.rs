use std::fmt::Write as _;
use std::path::Path;

use stillpoint_core::{EmotionalPattern, SentimentInsight};

use crate::input;

pub fn insights(entries: &Path, user: Option<&str>, json: bool) -> anyhow::Result<()> {
    let entries = input::load_entries(entries, user)?;
    let insights = stillpoint_insight::generate_sentiment_insights(&entries);
    if json {
        input::print_json(&insights)?;
    } else {
        print!("{}", render_insights(&insights));
    }
    Ok(())
}

pub fn patterns(entries: &Path, user: Option<&str>, json: bool) -> anyhow::Result<()> {
    let entries = input::load_entries(entries, user)?;
    let patterns = stillpoint_insight::analyze_emotional_patterns(&entries);
    if json {
        input::print_json(&patterns)?;
    } else {
        print!("{}", render_patterns(&patterns));
    }
    Ok(())
}

pub fn render_insights(insights: &[SentimentInsight]) -> String {
    let mut out = String::new();
    for (i, insight) in insights.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "[{}] {} ({:.0}%)",
            insight.kind,
            insight.title,
            insight.confidence * 100.0
        );
        let _ = writeln!(out, "  {}", insight.description);
        if let Some(suggestion) = &insight.suggestion {
            let _ = writeln!(out, "  -> {suggestion}");
        }
    }
    out
}

pub fn render_patterns(patterns: &[EmotionalPattern]) -> String {
    if patterns.is_empty() {
        return "(not enough entries for patterns)\n".to_string();
    }
    let mut out = String::new();
    for p in patterns {
        let _ = writeln!(
            out,
            "{} {:<11} {:>3.0}% of recent entries, {}, consistency {:.2}",
            p.dominant_mood.emoji(),
            p.dominant_mood.as_str(),
            p.frequency * 100.0,
            p.trend,
            p.consistency
        );
        if !p.triggers.is_empty() {
            let _ = writeln!(out, "  triggers: {}", p.triggers.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillpoint_core::{InsightKind, MoodType, Trend};

    #[test]
    fn insight_listing() {
        let out = render_insights(&stillpoint_insight::generate_sentiment_insights(&[]));
        assert!(out.starts_with("[pattern] Building Your Emotional Awareness (80%)"));
        assert!(out.contains("  -> Try to journal daily"));
    }

    #[test]
    fn insight_kind_tags() {
        let out = render_insights(&[SentimentInsight {
            kind: InsightKind::Concern,
            title: "Frequent Anxiety".into(),
            description: "Anxious in 4 of 10 entries.".into(),
            confidence: 0.7,
            actionable: false,
            suggestion: None,
        }]);
        assert_eq!(out, "[concern] Frequent Anxiety (70%)\n  Anxious in 4 of 10 entries.\n");
    }

    #[test]
    fn pattern_listing() {
        assert_eq!(render_patterns(&[]), "(not enough entries for patterns)\n");
        let out = render_patterns(&[EmotionalPattern {
            dominant_mood: MoodType::Anxious,
            frequency: 0.5,
            trend: Trend::Declining,
            consistency: 0.75,
            triggers: vec!["deadline".into(), "sleep".into()],
        }]);
        assert!(out.contains("anxious"));
        assert!(out.contains(" 50% of recent entries, declining, consistency 0.75"));
        assert!(out.contains("  triggers: deadline, sleep"));
    }

    #[test]
    fn commands_read_entry_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("entries.json");
        std::fs::write(&path, "[]").unwrap();
        assert!(insights(&path, None, true).is_ok());
        assert!(patterns(&path, Some("u1"), false).is_ok());
        assert!(insights(&dir.path().join("nope.json"), None, false).is_err());
    }
}
