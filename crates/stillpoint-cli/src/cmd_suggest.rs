use std::fmt::Write as _;
use std::path::Path;

use stillpoint_core::MindfulSuggestion;
use time::OffsetDateTime;

use crate::input;

pub struct SuggestParams<'a> {
    pub entries: &'a Path,
    pub user: Option<&'a str>,
    pub date: Option<&'a str>,
    pub hour: Option<u8>,
    pub json: bool,
}

pub fn execute(params: SuggestParams<'_>) -> anyhow::Result<()> {
    let entries = input::load_entries(params.entries, params.user)?;
    let profile = input::profile(params.user, &entries);

    let suggestions = if params.date.is_some() || params.hour.is_some() {
        let date = input::date_or_today(params.date)?;
        let hour = params
            .hour
            .unwrap_or_else(|| OffsetDateTime::now_utc().hour());
        stillpoint_suggest::suggest_for_date(date, hour, &entries, &profile)
    } else {
        stillpoint_suggest::suggest_for_history(&entries, &profile)
    };

    if params.json {
        input::print_json(&suggestions)?;
    } else {
        print!("{}", render(&suggestions));
    }
    Ok(())
}

pub fn render(suggestions: &[MindfulSuggestion]) -> String {
    let mut out = String::new();
    for (i, s) in suggestions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "{}. {} [{}, {}] relevance {:.2}",
            i + 1,
            s.title,
            s.kind.as_str(),
            s.duration,
            s.relevance_score
        );
        let _ = writeln!(out, "   {}", s.description);
        let _ = writeln!(out, "   why: {}", s.reason);
    }
    out
}
