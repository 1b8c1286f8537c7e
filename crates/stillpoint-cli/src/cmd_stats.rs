use std::fmt::Write as _;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use stillpoint_core::MoodType;
use stillpoint_insight::{MoodCount, MoodStats, TimelinePoint, TimelineRange};

use crate::input;

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Range {
    Week,
    Month,
}

impl From<Range> for TimelineRange {
    fn from(range: Range) -> Self {
        match range {
            Range::Week => TimelineRange::Week,
            Range::Month => TimelineRange::Month,
        }
    }
}

/// Display metadata for one row of the mood distribution.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegendEntry {
    mood: MoodType,
    count: usize,
    label: &'static str,
    emoji: &'static str,
    description: &'static str,
    color: &'static str,
}

impl From<MoodCount> for LegendEntry {
    fn from(c: MoodCount) -> Self {
        Self {
            mood: c.mood,
            count: c.count,
            label: c.mood.label(),
            emoji: c.mood.emoji(),
            description: c.mood.description(),
            color: c.mood.color(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsOutput {
    stats: MoodStats,
    legend: Vec<LegendEntry>,
    range: TimelineRange,
    timeline: Vec<TimelinePoint>,
}

impl StatsOutput {
    fn new(stats: MoodStats, range: TimelineRange, timeline: Vec<TimelinePoint>) -> Self {
        let legend = stats.distribution.iter().copied().map(LegendEntry::from).collect();
        Self {
            stats,
            legend,
            range,
            timeline,
        }
    }
}

pub fn execute(
    entries: &Path,
    user: Option<&str>,
    range: Range,
    today: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let entries = input::load_entries(entries, user)?;
    let today = input::date_or_today(today)?;
    let range = TimelineRange::from(range);
    let output = StatsOutput::new(
        stillpoint_insight::mood_stats(&entries, today),
        range,
        stillpoint_insight::mood_timeline(&entries, range, today),
    );
    if json {
        input::print_json(&output)?;
    } else {
        print!("{}", render(&output.stats, &output.timeline));
    }
    Ok(())
}

pub fn render(stats: &MoodStats, timeline: &[TimelinePoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "entries:        {}", stats.total_entries);
    let _ = writeln!(out, "this week:      {}", stats.entries_this_week);
    let _ = writeln!(out, "average mood:   {:.1}/8", stats.average_valence);
    match stats.most_common {
        Some(mood) => {
            let _ = writeln!(out, "most common:    {} {}", mood.emoji(), mood.label());
        }
        None => {
            let _ = writeln!(out, "most common:    n/a");
        }
    }

    if !stats.distribution.is_empty() {
        out.push_str("\ndistribution:\n");
        for row in stats.distribution.iter().copied().map(LegendEntry::from) {
            let _ = writeln!(
                out,
                "  {} {:<11} {:>3}  {}  {}",
                row.emoji, row.label, row.count, row.color, row.description
            );
        }
    }

    out.push_str("\ntimeline:\n");
    for p in timeline {
        let bar = p.valence.map(|v| "#".repeat(usize::from(v))).unwrap_or_default();
        let _ = writeln!(out, "  {} {:>3} {}", p.date, p.label, bar);
    }
    out
}
