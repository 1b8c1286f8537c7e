use std::fmt::Write as _;
use std::path::Path;

use stillpoint_analyze::AnalysisReport;
use stillpoint_core::MoodAnalysis;

use crate::input;

pub struct AnalyzeParams<'a> {
    pub lexicon: Option<&'a Path>,
    pub text: Option<String>,
    pub file: Option<&'a Path>,
    pub json: bool,
    pub explain: bool,
}

pub fn execute(params: AnalyzeParams<'_>) -> anyhow::Result<()> {
    let analyzer = input::analyzer(params.lexicon)?;
    let text = input::read_text(params.text, params.file)?;
    let report = analyzer.explain(&text);

    match (params.json, params.explain) {
        (true, true) => input::print_json(&report)?,
        (true, false) => input::print_json(&report.analysis)?,
        (false, true) => print!("{}", render_report(&report)),
        (false, false) => print!("{}", render_analysis(&report.analysis)),
    }
    Ok(())
}

pub fn render_analysis(a: &MoodAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "mood:       {} {} (confidence {:.2})",
        a.mood.emoji(),
        a.mood,
        a.confidence
    );
    let _ = writeln!(out, "sentiment:  {} ({:+.2})", a.sentiment, a.sentiment_score);
    if a.keywords.is_empty() {
        let _ = writeln!(out, "keywords:   (none)");
    } else {
        let _ = writeln!(out, "keywords:   {}", a.keywords.join(", "));
    }
    out
}

pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = render_analysis(&report.analysis);

    out.push_str("\nmood scores:\n");
    let scored: Vec<_> = report.mood_scores.iter().filter(|s| s.score > 0.0).collect();
    if scored.is_empty() {
        out.push_str("  (no mood keywords matched)\n");
    }
    for s in scored {
        let _ = writeln!(
            out,
            "  {:<11} {:>6.3}  conf {:.2}  [{}]",
            s.mood.as_str(),
            s.score,
            s.confidence,
            s.matches.join(", ")
        );
    }

    let sent = &report.sentiment;
    let _ = writeln!(
        out,
        "\nsentiment: raw {:+.2} over {} sentence(s), {} match(es), {} negation(s), {} cue(s), conf {:.2}",
        sent.score, sent.sentences, sent.matches, sent.negations, sent.emotional_cues, sent.confidence
    );

    if !report.keyword_scores.is_empty() {
        out.push_str("\nkeyword weights:\n");
        for k in &report.keyword_scores {
            let _ = writeln!(out, "  {:<16} {:.2}", k.word, k.score);
        }
    }
    out
}
