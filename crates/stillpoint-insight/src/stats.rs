//! Summary numbers and chart series for a user's mood history.

use serde::Serialize;
use stillpoint_core::{JournalEntry, MoodType};
use time::{Date, Duration, Weekday};

pub const WEEK_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodCount {
    pub mood: MoodType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodStats {
    pub total_entries: usize,
    /// Mean [`MoodType::valence_score`], 0 without entries.
    pub average_valence: f64,
    /// Moods that occur at least once, in mood table order.
    pub distribution: Vec<MoodCount>,
    pub most_common: Option<MoodType>,
    /// Entries dated within the seven days ending `today`, or later.
    pub entries_this_week: usize,
}

pub fn mood_stats(entries: &[JournalEntry], today: Date) -> MoodStats {
    let distribution: Vec<MoodCount> = MoodType::ALL
        .iter()
        .map(|&mood| MoodCount {
            mood,
            count: entries.iter().filter(|e| e.mood == mood).count(),
        })
        .filter(|c| c.count > 0)
        .collect();

    let average_valence = if entries.is_empty() {
        0.0
    } else {
        let total: u32 = entries.iter().map(|e| u32::from(e.mood.valence_score())).sum();
        f64::from(total) / entries.len() as f64
    };

    // ties go to the later mood in table order
    let most_common = distribution
        .iter()
        .copied()
        .reduce(|a, b| if a.count > b.count { a } else { b })
        .map(|c| c.mood);

    let week_start = today - Duration::days(WEEK_DAYS - 1);
    MoodStats {
        total_entries: entries.len(),
        average_valence,
        distribution,
        most_common,
        entries_this_week: entries.iter().filter(|e| e.date >= week_start).count(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineRange {
    /// The seven days ending today.
    Week,
    /// Every day of today's calendar month.
    Month,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePoint {
    #[serde(with = "stillpoint_core::iso_date")]
    pub date: Date,
    /// Axis label; empty for month days skipped to avoid crowding.
    pub label: String,
    pub mood: Option<MoodType>,
    pub valence: Option<u8>,
}

/// One point per day of `range`, oldest first. Days without an entry carry
/// no mood; days with several use the first entry found.
pub fn mood_timeline(entries: &[JournalEntry], range: TimelineRange, today: Date) -> Vec<TimelinePoint> {
    let days: Vec<Date> = match range {
        TimelineRange::Week => (0..WEEK_DAYS)
            .rev()
            .map(|back| today - Duration::days(back))
            .collect(),
        TimelineRange::Month => {
            let first = today - Duration::days(i64::from(today.day()) - 1);
            std::iter::successors(Some(first), |d| d.next_day())
                .take_while(|d| d.month() == today.month())
                .collect()
        }
    };
    let last = days.len().saturating_sub(1);

    days.into_iter()
        .enumerate()
        .map(|(i, date)| {
            let mood = entries.iter().find(|e| e.date == date).map(|e| e.mood);
            let label = match range {
                TimelineRange::Week => short_weekday(date.weekday()).to_string(),
                TimelineRange::Month if i == 0 || i == last || (i + 1) % 3 == 0 => {
                    date.day().to_string()
                }
                TimelineRange::Month => String::new(),
            };
            TimelinePoint {
                date,
                label,
                mood,
                valence: mood.map(MoodType::valence_score),
            }
        })
        .collect()
}

fn short_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stillpoint_core::MoodAnalysis;
    use time::macros::date;

    fn entry(date: Date, mood: MoodType) -> JournalEntry {
        let analysis = MoodAnalysis {
            mood,
            ..MoodAnalysis::neutral()
        };
        JournalEntry::new("u1", date, "text", &analysis)
    }

    #[test]
    fn stats_for_empty_history() {
        let stats = mood_stats(&[], date!(2024 - 05 - 15));
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.average_valence, 0.0);
        assert!(stats.distribution.is_empty());
        assert_eq!(stats.most_common, None);
        assert_eq!(stats.entries_this_week, 0);
    }

    #[test]
    fn stats_summarise_history() {
        let entries = vec![
            entry(date!(2024 - 05 - 01), MoodType::Anxious),
            entry(date!(2024 - 05 - 09), MoodType::Content),
            entry(date!(2024 - 05 - 10), MoodType::Anxious),
            entry(date!(2024 - 05 - 15), MoodType::Excited),
        ];
        let stats = mood_stats(&entries, date!(2024 - 05 - 15));
        assert_eq!(stats.total_entries, 4);
        // (2 + 6 + 2 + 8) / 4
        assert_eq!(stats.average_valence, 4.5);
        assert_eq!(
            stats.distribution,
            vec![
                MoodCount { mood: MoodType::Excited, count: 1 },
                MoodCount { mood: MoodType::Content, count: 1 },
                MoodCount { mood: MoodType::Anxious, count: 2 },
            ]
        );
        assert_eq!(stats.most_common, Some(MoodType::Anxious));
        // May 9 through May 15
        assert_eq!(stats.entries_this_week, 3);
    }

    #[test]
    fn most_common_tie_takes_later_mood() {
        let entries = vec![
            entry(date!(2024 - 05 - 01), MoodType::Joyful),
            entry(date!(2024 - 05 - 02), MoodType::Neutral),
        ];
        assert_eq!(mood_stats(&entries, date!(2024 - 05 - 02)).most_common, Some(MoodType::Neutral));
    }

    #[test]
    fn week_timeline() {
        let entries = vec![entry(date!(2024 - 05 - 14), MoodType::Content)];
        let points = mood_timeline(&entries, TimelineRange::Week, date!(2024 - 05 - 15));
        let labels: Vec<_> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Thu", "Fri", "Sat", "Sun", "Mon", "Tue", "Wed"]);
        assert_eq!(points[0].date, date!(2024 - 05 - 09));
        assert_eq!(points[5].mood, Some(MoodType::Content));
        assert_eq!(points[5].valence, Some(6));
        assert!(points.iter().filter(|p| p.mood.is_some()).count() == 1);
    }

    #[test]
    fn month_timeline_thins_labels() {
        let points = mood_timeline(&[], TimelineRange::Month, date!(2024 - 02 - 17));
        assert_eq!(points.len(), 29);
        assert_eq!(points[0].date, date!(2024 - 02 - 01));
        assert_eq!(points[28].date, date!(2024 - 02 - 29));
        let labelled: Vec<_> = points
            .iter()
            .filter(|p| !p.label.is_empty())
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(
            labelled,
            vec!["1", "3", "6", "9", "12", "15", "18", "21", "24", "27", "29"]
        );
    }

    #[test]
    fn timeline_point_json_shape() {
        let points = mood_timeline(&[], TimelineRange::Week, date!(2024 - 12 - 31));
        let json = serde_json::to_value(&points[6]).unwrap();
        assert_eq!(json["date"], "2024-12-31");
        assert_eq!(json["label"], "Tue");
        assert!(json["mood"].is_null());
    }
}
