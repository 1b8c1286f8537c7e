use std::sync::LazyLock;

use regex::Regex;
use stillpoint_core::JournalEntry;

use crate::catalog::Theme;

/// Entries scanned for themes, most recent last.
pub const THEME_WINDOW: usize = 5;

struct ThemeRule {
    theme: Theme,
    pattern: Regex,
    keywords: &'static [&'static str],
}

static THEME_RULES: LazyLock<Vec<ThemeRule>> = LazyLock::new(|| {
    let rule = |theme: Theme, pattern: &str, keywords: &'static [&'static str]| ThemeRule {
        theme,
        pattern: Regex::new(pattern).unwrap(),
        keywords,
    };
    vec![
        rule(
            Theme::Work,
            r"\b(work|job|career|boss|colleague|office|meeting|project|deadline|promotion)\b",
            &["work", "job", "career", "office", "meeting"],
        ),
        rule(
            Theme::Relationship,
            r"\b(relationship|partner|spouse|boyfriend|girlfriend|marriage|love|date|romantic)\b",
            &["love", "relationship", "partner", "romantic"],
        ),
        rule(
            Theme::Family,
            r"\b(family|mother|father|parent|child|sibling|brother|sister|mom|dad)\b",
            &["family", "mother", "father", "parent", "child"],
        ),
        rule(
            Theme::Achievement,
            r"\b(achievement|success|accomplish|goal|win|victory|proud|celebration)\b",
            &["success", "achievement", "goal", "victory", "proud"],
        ),
        rule(
            Theme::Loss,
            r"\b(loss|death|grief|goodbye|ended|lost|missing|departed)\b",
            &["loss", "grief", "death", "goodbye", "missing"],
        ),
        rule(
            Theme::Opportunity,
            r"\b(opportunity|future|new|beginning|start|chance|possibility)\b",
            &["opportunity", "future", "new", "beginning", "chance"],
        ),
        rule(
            Theme::Nature,
            r"\b(nature|outdoors|garden|trees|flowers|beach|mountains|hiking|walk)\b",
            &["nature", "outdoors", "garden", "trees", "beach"],
        ),
        rule(
            Theme::Health,
            r"\b(health|exercise|fitness|diet|medical|doctor|therapy|wellness)\b",
            &["health", "exercise", "fitness", "medical", "wellness"],
        ),
    ]
});

/// Themes present in the last few entries' text or keywords, in
/// [`Theme`] declaration order.
pub fn detect_themes(entries: &[JournalEntry]) -> Vec<Theme> {
    let recent = &entries[entries.len().saturating_sub(THEME_WINDOW)..];
    let content = recent
        .iter()
        .map(|e| e.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    let keywords: Vec<&str> = recent
        .iter()
        .flat_map(|e| e.keywords.iter().map(String::as_str))
        .collect();

    THEME_RULES
        .iter()
        .filter(|rule| {
            rule.pattern.is_match(&content)
                || keywords.iter().any(|k| rule.keywords.iter().any(|r| r == k))
        })
        .map(|rule| rule.theme)
        .collect()
}
