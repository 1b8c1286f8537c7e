use stillpoint_core::{EmotionalPattern, JournalEntry, MoodType, Trend};
use time::Date;

/// Entries in the "recent" window; the window before it is the same size.
pub const PATTERN_WINDOW: usize = 14;
pub const MIN_PATTERN_ENTRIES: usize = 3;

const TREND_MARGIN: f64 = 0.1;
const TOP_MOODS: usize = 3;
const MAX_TRIGGERS: usize = 5;

/// The three most frequent moods of the last [`PATTERN_WINDOW`] entries,
/// each compared against the window before it.
///
/// `entries` must be ordered oldest first. Fewer than
/// [`MIN_PATTERN_ENTRIES`] entries yield no patterns.
pub fn analyze_emotional_patterns(entries: &[JournalEntry]) -> Vec<EmotionalPattern> {
    if entries.len() < MIN_PATTERN_ENTRIES {
        return Vec::new();
    }
    let split = entries.len().saturating_sub(PATTERN_WINDOW);
    let recent = &entries[split..];
    let older = &entries[split.saturating_sub(PATTERN_WINDOW)..split];

    let mut ranked = tally(recent.iter().map(|e| e.mood));
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(TOP_MOODS);

    ranked
        .into_iter()
        .map(|(mood, count)| {
            let frequency = count as f64 / recent.len() as f64;
            let older_count = older.iter().filter(|e| e.mood == mood).count();
            let older_frequency = older_count as f64 / older.len().max(1) as f64;

            let occurrences: Vec<&JournalEntry> =
                recent.iter().filter(|e| e.mood == mood).collect();
            let dates: Vec<Date> = occurrences.iter().map(|e| e.date).collect();

            EmotionalPattern {
                dominant_mood: mood,
                frequency,
                trend: trend_for(mood, frequency, older_frequency),
                consistency: interval_consistency(&dates),
                triggers: triggers(&occurrences),
            }
        })
        .collect()
}

/// How evenly spaced `dates` are, from 0 (erratic) to 1 (regular).
///
/// Order does not matter. Fewer than two dates score 0.
pub fn interval_consistency(dates: &[Date]) -> f64 {
    if dates.len() < 2 {
        return 0.0;
    }
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();

    let gaps = (sorted.len() - 1) as f64;
    let span = (sorted[sorted.len() - 1] - sorted[0]).whole_days() as f64;
    let expected = span / gaps;

    let total: f64 = sorted
        .windows(2)
        .map(|w| {
            let actual = (w[1] - w[0]).whole_days() as f64;
            let deviation = (actual - expected).abs() / expected.max(1.0);
            (1.0 - deviation).max(0.0)
        })
        .sum();
    total / gaps
}

fn trend_for(mood: MoodType, recent: f64, older: f64) -> Trend {
    let rising = if recent > older + TREND_MARGIN {
        true
    } else if recent < older - TREND_MARGIN {
        false
    } else {
        return Trend::Stable;
    };
    if rising == mood.is_positive() {
        Trend::Improving
    } else {
        Trend::Declining
    }
}

/// Keywords seen at least twice across `entries`, most frequent first.
fn triggers(entries: &[&JournalEntry]) -> Vec<String> {
    let mut counts = tally(entries.iter().flat_map(|e| e.keywords.iter()));
    counts.retain(|(_, n)| *n >= 2);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(MAX_TRIGGERS)
        .map(|(k, _)| k.clone())
        .collect()
}

/// Occurrence counts in first-seen order.
pub(crate) fn tally<T: PartialEq>(items: impl IntoIterator<Item = T>) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, n)) => *n += 1,
            None => counts.push((item, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use stillpoint_core::{MoodAnalysis, SentimentPolarity};
    use time::macros::date;
    use time::Duration;

    fn entry(day: i64, mood: MoodType, keywords: &[&str]) -> JournalEntry {
        let analysis = MoodAnalysis {
            mood,
            sentiment: SentimentPolarity::Neutral,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            ..MoodAnalysis::neutral()
        };
        JournalEntry::new("u1", date!(2024 - 01 - 01) + Duration::days(day), "text", &analysis)
    }

    #[test]
    fn too_few_entries() {
        let entries = vec![entry(0, MoodType::Joyful, &[]), entry(1, MoodType::Joyful, &[])];
        assert!(analyze_emotional_patterns(&entries).is_empty());
    }

    #[test]
    fn top_three_moods_with_first_seen_ties() {
        let moods = [
            MoodType::Anxious,
            MoodType::Content,
            MoodType::Peaceful,
            MoodType::Content,
            MoodType::Neutral,
            MoodType::Anxious,
        ];
        let entries: Vec<_> = moods.iter().enumerate().map(|(i, &m)| entry(i as i64, m, &[])).collect();
        let patterns = analyze_emotional_patterns(&entries);
        let got: Vec<_> = patterns.iter().map(|p| p.dominant_mood).collect();
        assert_eq!(got, vec![MoodType::Anxious, MoodType::Content, MoodType::Peaceful]);
        assert!((patterns[0].frequency - 2.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn trend_direction_depends_on_mood_valence() {
        // 14 older entries without the mood, then 14 recent entries half of which carry it.
        let mut entries: Vec<_> = (0..14).map(|d| entry(d, MoodType::Neutral, &[])).collect();
        for d in 14..28 {
            let mood = if d % 2 == 0 { MoodType::Peaceful } else { MoodType::Anxious };
            entries.push(entry(d, mood, &[]));
        }
        let patterns = analyze_emotional_patterns(&entries);
        let trend = |m| patterns.iter().find(|p| p.dominant_mood == m).map(|p| p.trend);
        assert_eq!(trend(MoodType::Peaceful), Some(Trend::Improving));
        assert_eq!(trend(MoodType::Anxious), Some(Trend::Declining));
    }

    #[test]
    fn stable_when_frequency_barely_moves() {
        let entries: Vec<_> = (0..28).map(|d| entry(d, MoodType::Content, &[])).collect();
        let patterns = analyze_emotional_patterns(&entries);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].trend, Trend::Stable);
        assert_eq!(patterns[0].frequency, 1.0);
        assert_eq!(patterns[0].consistency, 1.0);
    }

    #[test]
    fn consistency_edge_cases() {
        let d = date!(2024 - 01 - 01);
        assert_eq!(interval_consistency(&[]), 0.0);
        assert_eq!(interval_consistency(&[d]), 0.0);
        // all on one day: no division by zero
        assert_eq!(interval_consistency(&[d, d, d]), 1.0);
        // order does not matter
        let a = [d, d + Duration::days(3), d + Duration::days(10)];
        let b = [a[2], a[0], a[1]];
        assert_eq!(interval_consistency(&a), interval_consistency(&b));
        // expected gap 5: deviations 0.4 each
        assert!((interval_consistency(&a) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn triggers_need_two_occurrences() {
        let entries = vec![
            entry(0, MoodType::Anxious, &["deadline", "boss"]),
            entry(1, MoodType::Anxious, &["deadline", "sleep"]),
            entry(2, MoodType::Anxious, &["sleep", "deadline"]),
            entry(3, MoodType::Content, &["boss"]),
        ];
        let patterns = analyze_emotional_patterns(&entries);
        assert_eq!(patterns[0].dominant_mood, MoodType::Anxious);
        assert_eq!(patterns[0].triggers, vec!["deadline", "sleep"]);
        assert!(patterns[1].triggers.is_empty());
    }

    fn journal_text() -> impl Strategy<Value = String> {
        prop_oneof![
            prop::sample::select(vec![
                "I am so happy and joyful today, everything is wonderful!",
                "Worried about the deadline, could not sleep at all.",
                "A quiet walk by the lake, calm and grounded.",
                "Meh. Nothing much happened.",
                "I'm not happy with how the meeting went, but tomorrow is another day.",
            ])
            .prop_map(String::from),
            "[a-zA-Z ,.!']{0,80}",
        ]
    }

    proptest! {
        #[test]
        fn consistency_grows_as_spacing_evens_out(d in 1i64..5) {
            let day = |n| date!(2024 - 01 - 01) + Duration::days(n);
            let uneven = interval_consistency(&[day(0), day(d), day(10)]);
            let evener = interval_consistency(&[day(0), day(d + 1), day(10)]);
            prop_assert!(evener >= uneven);
            prop_assert!((0.0..=1.0).contains(&uneven));
        }

        #[test]
        fn analyzed_entries_grow_more_consistent_toward_the_midpoint(
            text in journal_text(),
            span in 2i64..40,
        ) {
            let analysis = stillpoint_analyze::analyze(&text);
            let start = date!(2024 - 03 - 01);
            let consistency_with_middle_at = |middle: i64| {
                let entries: Vec<JournalEntry> = [0, middle, span]
                    .iter()
                    .map(|&d| JournalEntry::new("u1", start + Duration::days(d), &text, &analysis))
                    .collect();
                let patterns = analyze_emotional_patterns(&entries);
                assert_eq!(patterns.len(), 1);
                assert_eq!(patterns[0].dominant_mood, analysis.mood);
                assert_eq!(patterns[0].frequency, 1.0);
                patterns[0].consistency
            };

            let mut previous = consistency_with_middle_at(1);
            for middle in 2..=span / 2 {
                let current = consistency_with_middle_at(middle);
                prop_assert!(current >= previous, "middle {middle}: {current} < {previous}");
                prop_assert!((0.0..=1.0).contains(&current));
                previous = current;
            }
            if span % 2 == 0 {
                prop_assert_eq!(previous, 1.0);
            }
        }
    }
}
